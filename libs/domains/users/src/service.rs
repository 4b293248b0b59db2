//! User Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User, UsersResponse};
use crate::repository::UserRepository;

/// User service providing business logic operations
///
/// The service layer handles validation, business rules, and orchestrates
/// repository operations.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new UserService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List all users with the total count
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<UsersResponse> {
        let users = self.repository.list().await?;
        let total = users.len();
        Ok(UsersResponse { users, total })
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: i64) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Create a new user
    #[instrument(skip(self, input), fields(user_name = %input.name))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        // Validate input
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update an existing user
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: i64, input: UpdateUser) -> UserResult<User> {
        self.repository
            .update(id, input)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> UserResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use chrono::Utc;

    fn sample_user(id: i64) -> User {
        User {
            id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_users_reports_total() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_list()
            .returning(|| Ok(vec![sample_user(1), sample_user(2)]));

        let service = UserService::new(mock_repo);
        let response = service.list_users().await.unwrap();

        assert_eq!(response.total, 2);
        assert_eq!(response.users.len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_maps_missing_to_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(42))
            .returning(|_| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.get_user(42).await;

        assert!(matches!(result, Err(UserError::NotFound(42))));
    }

    #[tokio::test]
    async fn test_create_user_rejects_invalid_input_before_store_access() {
        // No expectation set: the mock panics if the store is touched
        let mock_repo = MockUserRepository::new();

        let service = UserService::new(mock_repo);
        let result = service
            .create_user(CreateUser {
                name: String::new(),
                email: "alice@example.com".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_user_passes_through_store_conflict() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_create()
            .returning(|_| Err(UserError::CreationFailed("store rejected record".to_string())));

        let service = UserService::new(mock_repo);
        let result = service
            .create_user(CreateUser {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::CreationFailed(_))));
    }

    #[tokio::test]
    async fn test_update_user_maps_missing_to_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_update()
            .returning(|_, _| Ok(None));

        let service = UserService::new(mock_repo);
        let result = service.update_user(7, UpdateUser::default()).await;

        assert!(matches!(result, Err(UserError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_delete_user_maps_false_to_not_found() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(7))
            .returning(|_| Ok(false));

        let service = UserService::new(mock_repo);
        let result = service.delete_user(7).await;

        assert!(matches!(result, Err(UserError::NotFound(7))));
    }
}
