use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::extractors::PathRejectionMessage;
use crate::models::user::User;

// Fields are optional so a missing field reaches the service's own checks
#[derive(Debug, Default, Deserialize)]
pub struct AddUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
}

/// `id` may be a number or a numeric string; `isActive` must be a JSON boolean.
/// Both are kept as raw JSON so the service can tell a wrong type from a missing field:
/// an absent key is `None`, an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActiveRequest {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub is_active: Option<Value>,
}

// Only called for keys that appear in the body, so `null` stays a value
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl PathRejectionMessage for UserIdPath {
    const MESSAGE: &'static str = "Invalid user ID";
}

#[derive(Debug, Deserialize)]
pub struct PagePath {
    pub limit: String,
    pub page: String,
}

impl PathRejectionMessage for PagePath {
    const MESSAGE: &'static str = "Invalid limit or page parameter";
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub max_page: i64,
    pub total_data: i64,
}

#[derive(Debug, Serialize)]
pub struct ServiceDescriptor {
    pub endpoints: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_keeps_null_apart_from_missing() {
        let req: UpdateActiveRequest =
            serde_json::from_value(json!({ "id": 1, "isActive": null })).unwrap();
        assert_eq!(req.id, Some(json!(1)));
        assert_eq!(req.is_active, Some(Value::Null));

        let req: UpdateActiveRequest = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(req.is_active, None);
    }
}
