use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned by the store and never reused
    pub id: i64,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Creation timestamp, set once at creation
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new user
///
/// Absent fields deserialize to empty strings, so a missing field is
/// reported by validation the same way as an explicitly empty one.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "email must not be empty"))]
    pub email: String,
}

/// DTO for updating an existing user
///
/// Fields that are absent or empty are left unchanged, so a field
/// cannot be cleared to the empty string through an update.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response payload for the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
    pub total: usize,
}

impl User {
    /// Apply updates from UpdateUser DTO, skipping absent and empty fields
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(email) = update.email.filter(|e| !e.is_empty()) {
            self.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_update_changes_provided_fields() {
        let mut user = sample_user();
        user.apply_update(UpdateUser {
            name: Some("Alicia".to_string()),
            email: Some("alicia@example.com".to_string()),
        });

        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alicia@example.com");
    }

    #[test]
    fn test_apply_update_skips_absent_fields() {
        let mut user = sample_user();
        user.apply_update(UpdateUser {
            name: Some("Alicia".to_string()),
            email: None,
        });

        assert_eq!(user.name, "Alicia");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_apply_update_skips_empty_strings() {
        let mut user = sample_user();
        user.apply_update(UpdateUser {
            name: Some(String::new()),
            email: Some(String::new()),
        });

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_create_user_missing_fields_deserialize_as_empty() {
        let input: CreateUser = serde_json::from_str(r#"{"name": "Alice"}"#).unwrap();

        assert_eq!(input.name, "Alice");
        assert_eq!(input.email, "");
    }
}
