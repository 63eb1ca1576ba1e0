//! Upstream response pass-through shared by every relay.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::error::RelayError;

/// JSON body returned by an upstream service together with its status.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl UpstreamResponse {
    /// Read an upstream response, keeping its status and decoding the body as JSON
    pub async fn read(response: reqwest::Response) -> Result<Self, RelayError> {
        Ok(Self::decode(response).await?)
    }

    /// Same as [`read`](Self::read) but leaves the `reqwest` error untouched
    pub async fn decode(response: reqwest::Response) -> reqwest::Result<Self> {
        let status = response.status();
        let body = response.json::<Value>().await?;
        Ok(Self { status, body })
    }
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
