//! API routes module
//!
//! This module defines all HTTP API routes for the Users API.

pub mod users;

use axum::Router;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes() -> Router {
    Router::new().nest("/v1/users", users::router())
}
