use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};

/// Repository trait for User persistence
///
/// This trait defines the data access interface for users.
/// Implementations can use different storage backends (in-memory, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users, ordered by ascending ID
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Get a user by ID
    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Create a new user with a freshly assigned ID
    async fn create(&self, input: CreateUser) -> UserResult<User>;

    /// Update an existing user, returning `None` if it does not exist
    async fn update(&self, id: i64, input: UpdateUser) -> UserResult<Option<User>>;

    /// Delete a user by ID, returning whether it existed
    async fn delete(&self, id: i64) -> UserResult<bool>;
}

/// Mutable store contents behind a single lock
///
/// Keeping the map and the ID counter together means ID assignment and
/// insertion happen under one write guard, so concurrent creates can
/// never hand out the same ID.
#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

/// In-memory implementation of UserRepository
///
/// IDs start at 1, increase strictly, and are never reused even after
/// a delete.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> UserResult<Vec<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn create(&self, input: CreateUser) -> UserResult<User> {
        if input.name.is_empty() || input.email.is_empty() {
            return Err(UserError::Validation(
                "name and email are required".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        state.next_id += 1;
        let user = User {
            id: state.next_id,
            name: input.name,
            email: input.email,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, name = %user.name, "Created user");
        Ok(user)
    }

    async fn update(&self, id: i64, input: UpdateUser) -> UserResult<Option<User>> {
        let mut state = self.state.write().await;

        match state.users.get_mut(&id) {
            Some(user) => {
                user.apply_update(input);
                tracing::info!(user_id = id, "Updated user");
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> UserResult<bool> {
        let mut state = self.state.write().await;

        if state.users.remove(&id).is_some() {
            tracing::info!(user_id = id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, email: &str) -> CreateUser {
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let alice = repo
            .create(create_input("Alice", "alice@example.com"))
            .await
            .unwrap();
        let bob = repo
            .create(create_input("Bob", "bob@example.com"))
            .await
            .unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[tokio::test]
    async fn test_create_rejects_empty_fields() {
        let repo = InMemoryUserRepository::new();

        let result = repo.create(create_input("", "alice@example.com")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));

        let result = repo.create(create_input("Alice", "")).await;
        assert!(matches!(result, Err(UserError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_by_id_returns_none_for_missing() {
        let repo = InMemoryUserRepository::new();

        let fetched = repo.get_by_id(999).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_list_returns_users_in_ascending_id_order() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_input("Alice", "alice@example.com"))
            .await
            .unwrap();
        repo.create(create_input("Bob", "bob@example.com"))
            .await
            .unwrap();
        repo.create(create_input("Carol", "carol@example.com"))
            .await
            .unwrap();

        let users = repo.list().await.unwrap();
        let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Listing has no side effects
        let again = repo.list().await.unwrap();
        assert_eq!(users, again);
    }

    #[tokio::test]
    async fn test_update_skips_empty_and_absent_fields() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_input("Alice", "alice@example.com"))
            .await
            .unwrap();

        let updated = repo
            .update(
                1,
                UpdateUser {
                    name: Some(String::new()),
                    email: None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_update_returns_none_for_missing() {
        let repo = InMemoryUserRepository::new();

        let result = repo
            .update(1, UpdateUser::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_never_reused() {
        let repo = InMemoryUserRepository::new();

        repo.create(create_input("Alice", "alice@example.com"))
            .await
            .unwrap();
        repo.create(create_input("Bob", "bob@example.com"))
            .await
            .unwrap();

        assert!(repo.delete(2).await.unwrap());
        assert!(!repo.delete(2).await.unwrap());

        let carol = repo
            .create(create_input("Carol", "carol@example.com"))
            .await
            .unwrap();
        assert_eq!(carol.id, 3);
    }

    #[tokio::test]
    async fn test_concurrent_creates_assign_unique_ids() {
        let repo = InMemoryUserRepository::new();

        let mut handles = Vec::new();
        for i in 0..32 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(create_input(
                    &format!("User {}", i),
                    &format!("user{}@example.com", i),
                ))
                .await
                .unwrap()
                .id
            }));
        }

        let mut ids = std::collections::HashSet::new();
        for handle in handles {
            ids.insert(handle.await.unwrap());
        }

        assert_eq!(ids.len(), 32);
        assert_eq!(repo.list().await.unwrap().len(), 32);
    }
}
