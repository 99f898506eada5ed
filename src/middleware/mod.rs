// src/middleware/mod.rs
use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::error::{AppError, INTERNAL_ERROR_MSG};

pub type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}

/// Turns a handler panic into the 500 envelope.
pub fn catch_panic() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Handler panicked");

    AppError::internal(INTERNAL_ERROR_MSG).into_response()
}
