use axum::{routing::post, Router};
use std::sync::Arc;

use crate::AppState;

use super::handlers;

pub fn config_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/validate", post(handlers::validate_config))
        .route("/generate", post(handlers::generate_code))
}
