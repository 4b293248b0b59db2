//! Users API routes
//!
//! This module wires up the users domain to HTTP routes.

use axum::Router;
use domain_users::{InMemoryUserRepository, UserService, handlers};

/// Create users router
pub fn router() -> Router {
    // Create the in-memory repository backing the whole API
    let repository = InMemoryUserRepository::new();

    // Create the service
    let service = UserService::new(repository);

    // Return the domain's router
    handlers::router(service)
}
