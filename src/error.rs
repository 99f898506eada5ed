// src/error.rs
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::repository::RepositoryError;
use crate::response;

pub const INTERNAL_ERROR_MSG: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let msg = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::Internal(msg) => {
                tracing::error!(%msg, "Request failed");
                if msg.is_empty() {
                    INTERNAL_ERROR_MSG.to_string()
                } else {
                    msg
                }
            }
        };

        response::error(status, msg).into_response()
    }
}

// Raw driver detail is logged by the repository and never reaches the body
impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateKey => AppError::validation("Unique constraint violation"),
            RepositoryError::NotFound => AppError::not_found("Record not found"),
            RepositoryError::Database(_) => AppError::internal("Database error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_status_classes() {
        let dup: AppError = RepositoryError::DuplicateKey.into();
        assert_eq!(dup.status_code(), StatusCode::BAD_REQUEST);

        let missing: AppError = RepositoryError::NotFound.into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let db: AppError = RepositoryError::Database("connection refused".into()).into();
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(db, AppError::Internal(ref msg) if msg == "Database error"));
    }

    #[test]
    fn empty_internal_message_falls_back_to_generic_text() {
        let response = AppError::internal("").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
