//! Comment document schema

use bson::{oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Collection name for comments
pub const COMMENT_COLLECTION: &str = "comments";

/// Comment document stored in MongoDB
///
/// `blogId` is an opaque string reference to a blog post. It is never parsed
/// as an ObjectId and is intentionally not checked against the blogs
/// collection: a comment may reference a post that does not exist.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CommentDoc {
    /// MongoDB document ID, assigned by the store on insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,

    /// Referenced blog post, compared as an opaque string
    #[serde(rename = "blogId")]
    pub blog_id: String,

    /// Comment body
    pub text: String,

    /// Any additional client-supplied fields, persisted as-is
    #[serde(flatten)]
    pub extra: Document,
}

impl CommentDoc {
    /// Create a new comment document with no extra fields
    pub fn new(blog_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            _id: None,
            blog_id: blog_id.into(),
            text: text.into(),
            extra: Document::new(),
        }
    }
}
