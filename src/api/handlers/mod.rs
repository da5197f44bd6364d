pub mod page;
pub mod roster;

use crate::api::errors::ApiError;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for unknown routes
pub async fn not_found() -> ApiError {
    ApiError::not_found("No such route")
}
