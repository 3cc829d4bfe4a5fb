use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use super::issues::ValidationIssue;

/// Raised by the generator when handed a snapshot that still has errors.
/// Always a caller bug, never a user mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Precondition violated: configuration has {error_count} unresolved error(s), first at {first_field}")]
    PreconditionViolation {
        error_count: usize,
        first_field: String,
    },
}

#[derive(Error, Debug)]
pub enum ForgeError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration has {} error(s)", error_count(.0))]
    ValidationFailed(Vec<ValidationIssue>),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}

fn error_count(issues: &[ValidationIssue]) -> usize {
    issues.iter().filter(|i| i.is_error()).count()
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ForgeError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, error_code, details) = match self {
            ForgeError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request", None),
            ForgeError::ValidationFailed(issues) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_failed",
                serde_json::to_value(issues).ok(),
            ),
            ForgeError::Generate(GenerateError::PreconditionViolation { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "precondition_violation",
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ForgeError {
    fn from(rejection: JsonRejection) -> Self {
        ForgeError::InvalidRequest(format!("JSON parse error: {}", rejection.body_text()))
    }
}
