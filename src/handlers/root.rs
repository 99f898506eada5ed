// src/handlers/root.rs
use http::StatusCode;

use crate::dtos::user::ServiceDescriptor;
use crate::error::AppError;
use crate::response::{self, ApiResponse};

pub const SERVICE_NAME: &str = "TechRise Backend API - User Management";

pub const ENDPOINTS: [&str; 5] = [
    "POST /users/add",
    "GET /users",
    "GET /users/:userId",
    "PUT /users/update/active",
    "GET /users/:limit/:page",
];

// GET /
pub async fn service_descriptor() -> ApiResponse<ServiceDescriptor> {
    response::success(
        StatusCode::OK,
        SERVICE_NAME,
        Some(ServiceDescriptor {
            endpoints: ENDPOINTS.to_vec(),
        }),
    )
}

// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn route_not_found() -> AppError {
    AppError::not_found("Route not found")
}

pub async fn method_not_allowed() -> ApiResponse<()> {
    response::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
