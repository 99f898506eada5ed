// src/extractors.rs
use axum::{
    extract::{FromRequest, FromRequestParts, Json, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

pub const INVALID_JSON_MSG: &str = "Invalid JSON body";

/// `Json<T>` whose rejections (bad syntax, wrong content type) become a
/// 400 envelope instead of axum's plain-text body.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected request body");
                AppError::validation(INVALID_JSON_MSG)
            })?;

        Ok(JsonBody(data))
    }
}

/// Message sent back when a route's path segments cannot be extracted.
pub trait PathRejectionMessage {
    const MESSAGE: &'static str;
}

/// `Path<T>` whose rejections (undecodable segments, missing params)
/// become a 400 envelope carrying `T::MESSAGE`.
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + PathRejectionMessage + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(data) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Rejected path parameters");
                AppError::validation(T::MESSAGE)
            })?;

        Ok(PathParam(data))
    }
}
