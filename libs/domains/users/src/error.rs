use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::errors::error_response;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Could not create user: {0}")]
    CreationFailed(String),

    #[error("Could not update user: {0}")]
    UpdateFailed(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            UserError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                "user_not_found",
                format!("User {} not found", id),
            ),
            UserError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            UserError::CreationFailed(msg) => {
                tracing::error!("User creation failed: {}", msg);
                (StatusCode::CONFLICT, "creation_failed", msg.clone())
            }
            UserError::UpdateFailed(msg) => {
                tracing::error!("User update failed: {}", msg);
                (StatusCode::CONFLICT, "update_failed", msg.clone())
            }
        };

        error_response(status, error_type, message)
    }
}
