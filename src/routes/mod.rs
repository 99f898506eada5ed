pub mod users;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::root::{
    health_check, method_not_allowed, route_not_found, service_descriptor,
};
use crate::middleware;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(service_descriptor))
        .route("/health", get(health_check))
        .nest("/users", users::routes())
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(route_not_found)
}

/// Full application: routes, middleware and state.
pub fn create_app(state: AppState) -> Router {
    create_router()
        .layer(middleware::catch_panic())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}
