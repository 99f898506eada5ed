// src/services/user.rs
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument};

use crate::dtos::user::{AddUserRequest, PaginatedUsers, UpdateActiveRequest};
use crate::error::AppError;
use crate::models::user::{NewUser, User};
use crate::repository::{RepositoryError, UserRepository};

/// Validation and business rules for the user endpoints. Every operation
/// reports the first violation it finds.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, input))]
    pub async fn add_user(&self, input: AddUserRequest) -> Result<(), AppError> {
        let (email, username) = match (non_blank(input.email), non_blank(input.username)) {
            (Some(email), Some(username)) => (email, username),
            _ => return Err(AppError::validation("Email and username are required")),
        };

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::validation("Email already exists"));
        }

        // A concurrent insert can still win between the lookup and the write
        let user = self
            .repository
            .create(NewUser {
                email,
                username,
                is_active: false,
            })
            .await
            .map_err(|e| match e {
                RepositoryError::DuplicateKey => AppError::validation("Email already exists"),
                other => other.into(),
            })?;

        info!(user_id = user.id, "User added");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, raw_id: &str) -> Result<User, AppError> {
        let id = parse_user_id(raw_id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    #[instrument(skip(self, input))]
    pub async fn update_active_status(&self, input: UpdateActiveRequest) -> Result<(), AppError> {
        let (raw_id, raw_active) = match (input.id, input.is_active) {
            (Some(id), Some(active)) => (id, active),
            _ => return Err(AppError::validation("ID and isActive are required")),
        };

        let Value::Bool(is_active) = raw_active else {
            return Err(AppError::validation("isActive must be a boolean"));
        };

        let id = match raw_id {
            Value::Number(n) => n
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| AppError::validation("Invalid user ID"))?,
            Value::String(s) => parse_user_id(&s)?,
            _ => return Err(AppError::validation("Invalid user ID")),
        };

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(AppError::not_found("User not found"));
        }

        self.repository.update_active(id, is_active).await?;

        info!(user_id = id, is_active, "User status updated");
        Ok(())
    }

    /// Pages past the end are not an error: they come back empty with the
    /// same `totalData` and `maxPage`.
    #[instrument(skip(self))]
    pub async fn get_users_with_pagination(
        &self,
        raw_limit: &str,
        raw_page: &str,
    ) -> Result<PaginatedUsers, AppError> {
        let invalid = || AppError::validation("Invalid limit or page parameter");

        let limit = raw_limit.trim().parse::<i64>().map_err(|_| invalid())?;
        let page = raw_page.trim().parse::<i64>().map_err(|_| invalid())?;
        if limit <= 0 || page <= 0 {
            return Err(invalid());
        }

        let offset = (page - 1).checked_mul(limit).ok_or_else(invalid)?;

        let total_data = self.repository.count().await?;
        let max_page = max_page(total_data, limit);
        let users = self.repository.find_page(offset, limit).await?;

        Ok(PaginatedUsers {
            users,
            max_page,
            total_data,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_user_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| AppError::validation("Invalid user ID"))
}

/// `ceil(total / limit)`; zero rows give zero pages. `limit` must be positive.
fn max_page(total: i64, limit: i64) -> i64 {
    let pages = total.max(0).unsigned_abs().div_ceil(limit.unsigned_abs());
    i64::try_from(pages).unwrap_or(i64::MAX)
}
