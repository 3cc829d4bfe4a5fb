use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::warn;

use crate::types::ErrorResponse;
use crate::AppState;

pub const KEY_HEADER: &str = "X-Cardforge-Key";
/// Accepted for clients written against the generic header name
pub const LEGACY_KEY_HEADER: &str = "X-API-Key";

fn provided_key(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(KEY_HEADER)
        .or_else(|| headers.get(LEGACY_KEY_HEADER))
        .and_then(|v| v.to_str().ok())
}

fn unauthorized(message: &str) -> Response {
    let body = ErrorResponse {
        error: "unauthorized".to_string(),
        message: message.to_string(),
        details: None,
    };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

/// Gate `/config/*` behind `API_KEY` when one is configured; open otherwise.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(expected) = state.config.api_key.as_deref() else {
        return next.run(request).await;
    };

    match provided_key(request.headers()) {
        Some(key) if key == expected => next.run(request).await,
        Some(_) => {
            warn!("Rejected {}: wrong configuration API key", request.uri().path());
            unauthorized("API key does not match")
        }
        None => {
            warn!("Rejected {}: no {} header", request.uri().path(), KEY_HEADER);
            unauthorized(&format!("{} header is required", KEY_HEADER))
        }
    }
}
