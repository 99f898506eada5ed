use serde::Serialize;
use sqlx::FromRow;

/// A row of the `users` table. Serializes as the public projection
/// `{id, email, username, isActive}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_active: bool,
}

/// Insert payload; `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub is_active: bool,
}
