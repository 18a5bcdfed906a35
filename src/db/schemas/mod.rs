//! Database schemas for WriteFlow
//!
//! Defines the MongoDB document structures for users, blogs, and comments.
//! Required fields are explicit; any additional client-supplied fields are
//! carried through a flattened document rather than dropped.

mod blog;
mod comment;
mod user;

pub use blog::{BlogDoc, BLOG_COLLECTION};
pub use comment::{CommentDoc, COMMENT_COLLECTION};
pub use user::{UserDoc, USER_COLLECTION};
