// src/repository/mod.rs
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use sqlx::Error as SqlxError;
use thiserror::Error;

use crate::models::user::{NewUser, User};

pub use memory::InMemoryUserRepository;
pub use postgres::PgUserRepository;

/// SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("duplicate key")]
    DuplicateKey,

    #[error("record not found")]
    NotFound,

    #[error("database error: {0}")]
    Database(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<SqlxError> for RepositoryError {
    fn from(err: SqlxError) -> Self {
        match err {
            SqlxError::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                RepositoryError::DuplicateKey
            }
            SqlxError::RowNotFound => RepositoryError::NotFound,
            other => RepositoryError::Database(other.to_string()),
        }
    }
}

/// Persistence gateway for the `users` table.
///
/// Every listing is ordered by ascending `id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;

    async fn find_all(&self) -> RepositoryResult<Vec<User>>;

    /// At most `limit` rows, skipping the first `offset`.
    async fn find_page(&self, offset: i64, limit: i64) -> RepositoryResult<Vec<User>>;

    async fn count(&self) -> RepositoryResult<i64>;

    /// Fails with [`RepositoryError::DuplicateKey`] when the email is taken.
    async fn create(&self, input: NewUser) -> RepositoryResult<User>;

    /// Fails with [`RepositoryError::NotFound`] when no row has `id`.
    async fn update_active(&self, id: i32, is_active: bool) -> RepositoryResult<User>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err = RepositoryError::from(SqlxError::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[test]
    fn other_driver_errors_map_to_database() {
        let err = RepositoryError::from(SqlxError::PoolTimedOut);
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
