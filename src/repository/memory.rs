// src/repository/memory.rs
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepositoryError, RepositoryResult, UserRepository};
use crate::models::user::{NewUser, User};

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<i32, User>,
    last_id: i32,
}

/// Process-local user store, used when no database is configured and in tests.
/// Ids start at 1 and are never reused.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().cloned().collect())
    }

    async fn find_page(&self, offset: i64, limit: i64) -> RepositoryResult<Vec<User>> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);

        let store = self.store.read().await;
        Ok(store
            .users
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepositoryResult<i64> {
        let store = self.store.read().await;
        Ok(store.users.len() as i64)
    }

    async fn create(&self, input: NewUser) -> RepositoryResult<User> {
        let mut store = self.store.write().await;

        if store.users.values().any(|u| u.email == input.email) {
            return Err(RepositoryError::DuplicateKey);
        }

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Database("id sequence exhausted".to_string()))?;
        store.last_id = id;

        let user = User {
            id,
            email: input.email,
            username: input.username,
            is_active: input.is_active,
        };
        store.users.insert(id, user.clone());

        tracing::debug!(user_id = id, "Created user");
        Ok(user)
    }

    async fn update_active(&self, id: i32, is_active: bool) -> RepositoryResult<User> {
        let mut store = self.store.write().await;
        let user = store.users.get_mut(&id).ok_or(RepositoryError::NotFound)?;
        user.is_active = is_active;
        Ok(user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            username: "someone".to_string(),
            is_active: false,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryUserRepository::new();

        let a = repo.create(new_user("a@example.com")).await.unwrap();
        let b = repo.create(new_user("b@example.com")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(new_user("a@example.com")).await.unwrap();

        let result = repo.create(new_user("a@example.com")).await;
        assert!(matches!(result, Err(RepositoryError::DuplicateKey)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_page_skips_and_takes_in_id_order() {
        let repo = InMemoryUserRepository::new();
        for i in 0..7 {
            repo.create(new_user(&format!("u{i}@example.com")))
                .await
                .unwrap();
        }

        let page = repo.find_page(3, 3).await.unwrap();
        let ids: Vec<i32> = page.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);

        assert!(repo.find_page(10, 3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_active_on_missing_row() {
        let repo = InMemoryUserRepository::new();
        let result = repo.update_active(42, true).await;
        assert!(matches!(result, Err(RepositoryError::NotFound)));
    }
}
