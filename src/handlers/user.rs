// src/handlers/user.rs
use axum::extract::State;
use http::StatusCode;
use tracing::instrument;

use crate::dtos::user::{AddUserRequest, PagePath, PaginatedUsers, UpdateActiveRequest, UserIdPath};
use crate::error::AppError;
use crate::extractors::{JsonBody, PathParam};
use crate::models::user::User;
use crate::response::{self, ApiResponse};
use crate::state::AppState;

// POST /users/add
#[instrument(skip(state, payload))]
pub async fn add_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<AddUserRequest>,
) -> Result<ApiResponse<()>, AppError> {
    state.users.add_user(payload).await?;
    Ok(response::success(StatusCode::OK, "Success Add User", None))
}

// GET /users
#[instrument(skip(state))]
pub async fn get_all_users(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<User>>, AppError> {
    let users = state.users.get_all_users().await?;
    Ok(response::success(StatusCode::OK, "Success", Some(users)))
}

// GET /users/{user_id}
#[instrument(skip(state))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    PathParam(path): PathParam<UserIdPath>,
) -> Result<ApiResponse<User>, AppError> {
    let user = state.users.get_user_by_id(&path.user_id).await?;
    Ok(response::success(StatusCode::OK, "Success", Some(user)))
}

// GET /users/add: the segment is read as a user id
#[instrument(skip(state))]
pub async fn get_user_add(State(state): State<AppState>) -> Result<ApiResponse<User>, AppError> {
    let user = state.users.get_user_by_id("add").await?;
    Ok(response::success(StatusCode::OK, "Success", Some(user)))
}

// PUT /users/update/active
#[instrument(skip(state, payload))]
pub async fn update_user_active_status(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<UpdateActiveRequest>,
) -> Result<ApiResponse<()>, AppError> {
    state.users.update_active_status(payload).await?;
    Ok(response::success(StatusCode::OK, "Success Update Status", None))
}

// GET /users/{limit}/{page}
#[instrument(skip(state))]
pub async fn get_users_with_pagination(
    State(state): State<AppState>,
    PathParam(path): PathParam<PagePath>,
) -> Result<ApiResponse<PaginatedUsers>, AppError> {
    let page = state
        .users
        .get_users_with_pagination(&path.limit, &path.page)
        .await?;
    Ok(response::success(StatusCode::OK, "Success", Some(page)))
}

// GET /users/update/active: the segments are read as limit and page
#[instrument(skip(state))]
pub async fn get_update_active(
    State(state): State<AppState>,
) -> Result<ApiResponse<PaginatedUsers>, AppError> {
    let page = state
        .users
        .get_users_with_pagination("update", "active")
        .await?;
    Ok(response::success(StatusCode::OK, "Success", Some(page)))
}
