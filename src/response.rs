// src/response.rs
use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde::Serialize;

/// Uniform `{status, msg, data}` body used for every reply, success or failure.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub msg: String,
    pub data: Option<T>,
}

pub fn success<T>(status: StatusCode, msg: impl Into<String>, data: Option<T>) -> ApiResponse<T> {
    ApiResponse {
        status: status.as_u16(),
        msg: msg.into(),
        data,
    }
}

pub fn error(status: StatusCode, msg: impl Into<String>) -> ApiResponse<()> {
    ApiResponse {
        status: status.as_u16(),
        msg: msg.into(),
        data: None,
    }
}

// The HTTP status line always mirrors the envelope's status field
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
