//! Process configuration
//!
//! Every value comes from a command-line flag or its environment variable.
//! Credentials are optional; an empty value counts as unset.

use clap::Parser;
use std::time::Duration;

use crate::aster::client::DEFAULT_BASE_URL;
use crate::aster::AsterCredentials;
use crate::llm::{Provider, ProviderSettings, ProviderTable};

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Aster API key
    #[arg(long, env = "ASTER_API_KEY", hide_env_values = true)]
    pub aster_api_key: Option<String>,

    /// Aster API secret used for HMAC signing
    #[arg(long, env = "ASTER_SECRET", hide_env_values = true)]
    pub aster_secret: Option<String>,

    /// Aster REST base URL
    #[arg(long, env = "ASTER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub aster_base_url: String,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub groq_api_key: Option<String>,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Anthropic API key
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub anthropic_api_key: Option<String>,

    /// DeepSeek API key
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    pub deepseek_api_key: Option<String>,

    /// Groq chat-completions URL
    #[arg(long, env = "GROQ_API_URL", default_value = Provider::Groq.default_url())]
    pub groq_url: String,

    /// OpenAI chat-completions URL
    #[arg(long, env = "OPENAI_API_URL", default_value = Provider::OpenAi.default_url())]
    pub openai_url: String,

    /// Anthropic messages URL
    #[arg(long, env = "ANTHROPIC_API_URL", default_value = Provider::Anthropic.default_url())]
    pub anthropic_url: String,

    /// DeepSeek chat-completions URL
    #[arg(long, env = "DEEPSEEK_API_URL", default_value = Provider::DeepSeek.default_url())]
    pub deepseek_url: String,

    /// Address to bind the listener to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to run the relay on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Timeout for upstream requests in seconds (no timeout if unset)
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS")]
    pub upstream_timeout_secs: Option<u64>,
}

/// Immutable configuration shared by all handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub aster_base_url: String,
    pub aster_credentials: Option<AsterCredentials>,
    pub providers: ProviderTable,
    pub upstream_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            aster_base_url: DEFAULT_BASE_URL.to_string(),
            aster_credentials: None,
            providers: ProviderTable::default(),
            upstream_timeout: None,
        }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            aster_base_url: args.aster_base_url,
            aster_credentials: AsterCredentials::from_parts(args.aster_api_key, args.aster_secret),
            providers: ProviderTable {
                groq: ProviderSettings::new(args.groq_url, args.groq_api_key),
                openai: ProviderSettings::new(args.openai_url, args.openai_api_key),
                anthropic: ProviderSettings::new(args.anthropic_url, args.anthropic_api_key),
                deepseek: ProviderSettings::new(args.deepseek_url, args.deepseek_api_key),
            },
            upstream_timeout: args.upstream_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Config {
    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
