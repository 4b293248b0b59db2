//! Standard error messages and codes for consistent error responses.

// Message constants
pub const INVALID_ID: &str = "ID must be a valid integer";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found.";

// Machine-readable error codes carried in the `error` field
pub const CODE_INVALID_ID: &str = "invalid_id";
pub const CODE_INVALID_REQUEST: &str = "invalid_request";
pub const CODE_VALIDATION: &str = "validation_error";
pub const CODE_NOT_FOUND: &str = "not_found";
