use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::warn;

use crate::error::RelayError;
use crate::state::AppState;
use crate::upstream::UpstreamResponse;

/// GET /api/market/{*endpoint} - Public market data, no authentication
pub async fn market_relay(
    State(state): State<Arc<AppState>>,
    Path(endpoint): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<UpstreamResponse, RelayError> {
    state
        .aster
        .get_public(&endpoint, &params)
        .await
        .inspect_err(|e| warn!("Market relay to {} failed: {}", endpoint, e))
}

/// GET /api/aster/{*endpoint} - Signed request with the configured credentials
pub async fn aster_relay(
    State(state): State<Arc<AppState>>,
    Path(endpoint): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<UpstreamResponse, RelayError> {
    state
        .aster
        .get_signed(&endpoint, params)
        .await
        .inspect_err(|e| warn!("Aster relay to {} failed: {}", endpoint, e))
}

/// POST /api/llm - Chat completion forwarded to the provider named in the body
pub async fn llm_relay(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<UpstreamResponse, RelayError> {
    let body = match body {
        Ok(Json(body)) => body,
        // Treated as an empty object, which has no provider
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Object(Map::new()),
        Err(rejection) => {
            let message = rejection.body_text();
            warn!("LLM relay rejected body: {}", message);
            return Err(RelayError::InvalidBody(message));
        }
    };

    state
        .llm
        .forward(body)
        .await
        .inspect_err(|e| warn!("LLM relay failed: {}", e))
}
