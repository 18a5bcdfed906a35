//! Blog post document schema

use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Collection name for blog posts
pub const BLOG_COLLECTION: &str = "blogs";

/// Blog post document stored in MongoDB
///
/// `authorEmail` is the field the list endpoint filters on; the wire name is
/// preserved for compatibility with existing clients.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BlogDoc {
    /// MongoDB document ID, assigned by the store on insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Post title
    pub title: String,

    /// Author's email, used for exact-match filtering
    #[serde(rename = "authorEmail")]
    pub author_email: String,

    /// Any additional client-supplied fields, persisted as-is
    #[serde(flatten)]
    pub extra: Document,
}

impl BlogDoc {
    /// Create a new blog document with no extra fields
    pub fn new(title: impl Into<String>, author_email: impl Into<String>) -> Self {
        Self {
            _id: None,
            title: title.into(),
            author_email: author_email.into(),
            extra: Document::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_field_name() {
        let blog: BlogDoc = serde_json::from_value(json!({
            "title": "A",
            "authorEmail": "a@x.com"
        }))
        .unwrap();
        assert_eq!(blog.author_email, "a@x.com");

        let back = serde_json::to_value(&blog).unwrap();
        assert_eq!(back["authorEmail"], "a@x.com");
    }

    #[test]
    fn test_missing_title_rejected() {
        let result: Result<BlogDoc, _> =
            serde_json::from_value(json!({ "authorEmail": "a@x.com" }));
        assert!(result.is_err());
    }
}
