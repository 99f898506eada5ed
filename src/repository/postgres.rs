// src/repository/postgres.rs
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, instrument};

use super::{RepositoryError, RepositoryResult, UserRepository};
use crate::models::user::{NewUser, User};

#[derive(Clone)]
pub struct PgUserRepository {
    db_pool: PgPool,
}

impl PgUserRepository {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

fn log_failure(err: sqlx::Error, op: &'static str) -> RepositoryError {
    let mapped = RepositoryError::from(err);
    if let RepositoryError::Database(ref detail) = mapped {
        error!(op, error = %detail, "User query failed");
    }
    mapped
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, username, is_active FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(|e| log_failure(e, "find_by_email"))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, username, is_active FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(|e| log_failure(e, "find_by_id"))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, username, is_active FROM users ORDER BY id ASC",
        )
        .fetch_all(&self.db_pool)
        .await
        .map_err(|e| log_failure(e, "find_all"))
    }

    #[instrument(skip(self))]
    async fn find_page(&self, offset: i64, limit: i64) -> RepositoryResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, username, is_active FROM users
             ORDER BY id ASC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db_pool)
        .await
        .map_err(|e| log_failure(e, "find_page"))
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| log_failure(e, "count"))
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn create(&self, input: NewUser) -> RepositoryResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (email, username, is_active)
             VALUES ($1, $2, $3)
             RETURNING id, email, username, is_active",
        )
        .bind(&input.email)
        .bind(&input.username)
        .bind(input.is_active)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| log_failure(e, "create"))
    }

    #[instrument(skip(self))]
    async fn update_active(&self, id: i32, is_active: bool) -> RepositoryResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET is_active = $1
             WHERE id = $2
             RETURNING id, email, username, is_active",
        )
        .bind(is_active)
        .bind(id)
        .fetch_one(&self.db_pool)
        .await
        .map_err(|e| log_failure(e, "update_active"))
    }
}
