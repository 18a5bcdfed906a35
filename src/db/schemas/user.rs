//! User document schema

use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Collection name for users
pub const USER_COLLECTION: &str = "users";

/// User document stored in MongoDB
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserDoc {
    /// MongoDB document ID, assigned by the store on insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Any additional client-supplied fields, persisted as-is
    #[serde(flatten)]
    pub extra: Document,
}

impl UserDoc {
    /// Create a new user document with no extra fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            _id: None,
            name: name.into(),
            email: email.into(),
            extra: Document::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_fields_enforced() {
        let result: Result<UserDoc, _> = serde_json::from_value(json!({ "name": "Alice" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_fields_preserved() {
        let user: UserDoc = serde_json::from_value(json!({
            "name": "Alice",
            "email": "alice@example.com",
            "avatar": "https://example.com/a.png"
        }))
        .unwrap();

        assert_eq!(user.extra.get_str("avatar").unwrap(), "https://example.com/a.png");

        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["avatar"], "https://example.com/a.png");
        // No _id before insert
        assert!(back.get("_id").is_none());
    }
}
