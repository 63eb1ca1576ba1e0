//! Aster API Client
//!
//! Forwards public and signed GET requests to the Aster futures REST API.

use reqwest::Client;
use tracing::debug;

use super::signer::{timestamp_ms, AsterCredentials, SignedQuery};
use crate::error::RelayError;
use crate::upstream::UpstreamResponse;

/// Production REST base URL
pub const DEFAULT_BASE_URL: &str = "https://fapi.asterdex.com";

/// Header carrying the API key on signed requests
pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Aster REST client
#[derive(Debug, Clone)]
pub struct AsterClient {
    client: Client,
    base_url: String,
    credentials: Option<AsterCredentials>,
}

impl AsterClient {
    /// Create a client sharing an existing HTTP connection pool
    pub fn new(client: Client, base_url: String, credentials: Option<AsterCredentials>) -> Self {
        Self {
            client,
            base_url,
            credentials,
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Forward an unauthenticated GET, re-serializing the query parameters
    pub async fn get_public(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<UpstreamResponse, RelayError> {
        debug!("GET {} ({} params)", endpoint, params.len());

        let response = self
            .client
            .get(self.endpoint_url(endpoint))
            .query(params)
            .send()
            .await?;

        UpstreamResponse::read(response).await
    }

    /// Forward a signed GET using the current time as `timestamp`
    pub async fn get_signed(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
    ) -> Result<UpstreamResponse, RelayError> {
        self.get_signed_at(endpoint, params, timestamp_ms()).await
    }

    /// Forward a signed GET with an explicit `timestamp`
    pub async fn get_signed_at(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
        timestamp_ms: i64,
    ) -> Result<UpstreamResponse, RelayError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(RelayError::MissingExchangeCredentials)?;

        let signed = SignedQuery::new(params, &credentials.secret, timestamp_ms);
        let url = format!("{}?{}", self.endpoint_url(endpoint), signed.to_query_string());

        debug!("GET {} (signed, timestamp {})", endpoint, timestamp_ms);

        // The URL carries the signature and must not reach logs or error bodies
        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &credentials.api_key)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        Ok(UpstreamResponse::decode(response)
            .await
            .map_err(reqwest::Error::without_url)?)
    }
}
