//! LLM relay client
//!
//! Picks the provider named in the request body, strips the `provider` field
//! and POSTs the rest of the body to that provider's endpoint.

use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

use super::provider::{Provider, ProviderTable};
use crate::error::RelayError;
use crate::upstream::UpstreamResponse;

#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
    providers: ProviderTable,
}

impl LlmClient {
    pub fn new(client: Client, providers: ProviderTable) -> Self {
        Self { client, providers }
    }

    pub fn providers(&self) -> &ProviderTable {
        &self.providers
    }

    /// Forward a `{ "provider": ..., ...rest }` body to the named provider
    pub async fn forward(&self, body: Value) -> Result<UpstreamResponse, RelayError> {
        let (provider, payload) = split_provider(body)?;

        let settings = self.providers.get(provider);
        let api_key = settings
            .api_key
            .as_deref()
            .ok_or(RelayError::MissingProviderKey(provider))?;

        debug!("POST {} via {}", settings.url, provider);

        // `json` sets Content-Type: application/json
        let request = self.client.post(&settings.url).json(&payload);
        let response = provider
            .auth_scheme()
            .apply(request, api_key)
            .send()
            .await?;

        UpstreamResponse::read(response).await
    }
}

/// Remove and parse the `provider` field, returning the remaining payload
pub fn split_provider(body: Value) -> Result<(Provider, Map<String, Value>), RelayError> {
    let Value::Object(mut payload) = body else {
        return Err(RelayError::InvalidProvider);
    };

    let provider = match payload.remove("provider") {
        Some(Value::String(name)) => name.parse::<Provider>()?,
        _ => return Err(RelayError::InvalidProvider),
    };

    Ok((provider, payload))
}
