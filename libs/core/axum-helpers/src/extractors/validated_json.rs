//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{error_response, messages};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::Response,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Validates the request body using the `validator` crate's `Validate` trait.
/// A body that fails to deserialize is rejected as `invalid_request`; a body
/// that deserializes but fails validation is rejected as `validation_error`
/// with the per-field messages joined into one string.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateUser {
///     #[validate(length(min = 1, message = "name must not be empty"))]
///     name: String,
///     #[validate(length(min = 1, message = "email must not be empty"))]
///     email: String,
/// }
///
/// async fn create_user(ValidatedJson(payload): ValidatedJson<CreateUser>) -> String {
///     format!("Creating user: {}", payload.name)
/// }
///
/// let app = Router::new().route("/users", post(create_user));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|_| {
            error_response(
                StatusCode::BAD_REQUEST,
                messages::CODE_INVALID_REQUEST,
                messages::INVALID_REQUEST_BODY,
            )
        })?;

        data.validate().map_err(|e| {
            // Flatten validator errors into one human-readable message
            let details = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| match &err.message {
                        Some(message) => message.to_string(),
                        None => format!("{field} is invalid"),
                    })
                })
                .collect::<Vec<_>>()
                .join(", ");

            error_response(StatusCode::BAD_REQUEST, messages::CODE_VALIDATION, details)
        })?;

        Ok(ValidatedJson(data))
    }
}
