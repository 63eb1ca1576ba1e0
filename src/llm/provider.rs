//! Supported LLM providers and how each one authenticates.

use reqwest::RequestBuilder;
use std::fmt;
use std::str::FromStr;

use crate::error::RelayError;

/// Version header required by the Anthropic Messages API
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// LLM provider selected by the `provider` field of a relay request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Groq,
    OpenAi,
    Anthropic,
    DeepSeek,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::Groq,
        Provider::OpenAi,
        Provider::Anthropic,
        Provider::DeepSeek,
    ];

    /// Identifier used in requests and error messages
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::DeepSeek => "deepseek",
        }
    }

    /// Chat-completion endpoint used unless overridden in configuration
    pub const fn default_url(self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai/v1/chat/completions",
            Self::OpenAi => "https://api.openai.com/v1/chat/completions",
            Self::Anthropic => "https://api.anthropic.com/v1/messages",
            Self::DeepSeek => "https://api.deepseek.com/v1/chat/completions",
        }
    }

    pub const fn auth_scheme(self) -> AuthScheme {
        match self {
            Self::Anthropic => AuthScheme::AnthropicKey,
            Self::Groq | Self::OpenAi | Self::DeepSeek => AuthScheme::Bearer,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or(RelayError::InvalidProvider)
    }
}

/// How the API key is attached to an outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `x-api-key: <key>` plus `anthropic-version`
    AnthropicKey,
}

impl AuthScheme {
    pub fn apply(self, request: RequestBuilder, api_key: &str) -> RequestBuilder {
        match self {
            Self::Bearer => request.bearer_auth(api_key),
            Self::AnthropicKey => request
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION),
        }
    }
}

/// Endpoint and key for one provider
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub url: String,
    pub api_key: Option<String>,
}

impl ProviderSettings {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Settings for every supported provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTable {
    pub groq: ProviderSettings,
    pub openai: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub deepseek: ProviderSettings,
}

impl ProviderTable {
    pub fn get(&self, provider: Provider) -> &ProviderSettings {
        match provider {
            Provider::Groq => &self.groq,
            Provider::OpenAi => &self.openai,
            Provider::Anthropic => &self.anthropic,
            Provider::DeepSeek => &self.deepseek,
        }
    }

    pub fn get_mut(&mut self, provider: Provider) -> &mut ProviderSettings {
        match provider {
            Provider::Groq => &mut self.groq,
            Provider::OpenAi => &mut self.openai,
            Provider::Anthropic => &mut self.anthropic,
            Provider::DeepSeek => &mut self.deepseek,
        }
    }

    /// Providers with an API key
    pub fn configured(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.get(*p).is_configured())
            .collect()
    }
}

impl Default for ProviderTable {
    fn default() -> Self {
        Self {
            groq: ProviderSettings::new(Provider::Groq.default_url(), None),
            openai: ProviderSettings::new(Provider::OpenAi.default_url(), None),
            anthropic: ProviderSettings::new(Provider::Anthropic.default_url(), None),
            deepseek: ProviderSettings::new(Provider::DeepSeek.default_url(), None),
        }
    }
}
