pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure.
///
/// This structure is returned for all error responses, providing consistent
/// error information to clients:
/// - `error`: short machine-readable code (e.g. "user_not_found")
/// - `message`: optional human-readable text, omitted from the JSON when absent
///
/// # JSON Example
///
/// ```json
/// {
///   "error": "user_not_found",
///   "message": "User 42 not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: Some(message.into()),
        }
    }
}

/// Helper function to create complete error responses.
///
/// # Example
///
/// ```rust,ignore
/// use axum::http::StatusCode;
/// use axum_helpers::errors::{error_response, messages};
///
/// let response = error_response(
///     StatusCode::BAD_REQUEST,
///     messages::CODE_INVALID_ID,
///     "ID must be a valid integer",
/// );
/// ```
pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> Response {
    let body = Json(ErrorResponse::new(error, message));
    (status, body).into_response()
}
