use axum::{
    routing::{get, post, put},
    Router,
};

use crate::handlers::root::method_not_allowed;
use crate::handlers::user::{
    add_user, get_all_users, get_update_active, get_user_add, get_user_by_id,
    get_users_with_pagination, update_user_active_status,
};
use crate::state::AppState;

/// Mounted under `/users`. `/{limit}/{page}` is registered ahead of
/// `/{user_id}` so a two-segment path always reaches pagination.
/// A GET on one of the static paths is answered as if it had matched the
/// parameter route of the same shape.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_user).get(get_user_add))
        .route("/", get(get_all_users))
        .route(
            "/update/active",
            put(update_user_active_status).get(get_update_active),
        )
        .route("/{limit}/{page}", get(get_users_with_pagination))
        .route("/{user_id}", get(get_user_by_id))
        .method_not_allowed_fallback(method_not_allowed)
}
