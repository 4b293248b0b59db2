use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorResponse, messages};

/// Handler for 404 Not Found errors.
///
/// This can be used as a fallback handler in your router.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse::new(
        messages::CODE_NOT_FOUND,
        messages::NOT_FOUND_RESOURCE,
    ));

    (StatusCode::NOT_FOUND, body).into_response()
}
