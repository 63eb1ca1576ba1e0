use anyhow::{Context, Result};
use reqwest::Client;

use crate::aster::AsterClient;
use crate::config::Config;
use crate::llm::LlmClient;

/// Shared application state
///
/// Built once at startup and never mutated. Both relay clients share the
/// same connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub aster: AsterClient,
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            aster: AsterClient::new(
                client.clone(),
                config.aster_base_url.clone(),
                config.aster_credentials.clone(),
            ),
            llm: LlmClient::new(client, config.providers.clone()),
        })
    }
}
