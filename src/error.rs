//! Relay error types.
//!
//! Every failure is converted at the handler boundary into a JSON envelope
//! of the form `{"error": "<message>"}`:
//! - missing credentials, unknown providers and unreadable bodies map to 400
//! - upstream transport or decode failures map to 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::error::Error as StdError;
use thiserror::Error;

use crate::llm::Provider;

/// Error returned by any of the relay handlers.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Exchange API key or secret is not configured
    #[error("Missing Aster credentials")]
    MissingExchangeCredentials,

    /// The `provider` field is absent or not one of the supported providers
    #[error("Invalid provider")]
    InvalidProvider,

    /// The provider is supported but no API key is configured for it
    #[error("Missing {0} API key")]
    MissingProviderKey(Provider),

    /// Request body that could not be read as JSON
    #[error("{0}")]
    InvalidBody(String),

    /// Network failure, timeout or non-JSON upstream body
    #[error("{}", error_chain(.0))]
    Upstream(#[from] reqwest::Error),
}

impl RelayError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingExchangeCredentials
            | Self::InvalidProvider
            | Self::MissingProviderKey(_)
            | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Joins an error with its sources so the root cause (refused connection,
/// DNS failure, JSON syntax error) reaches the caller.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
