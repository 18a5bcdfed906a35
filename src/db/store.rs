//! # Store Seam
//!
//! The `Store` trait is the single seam between the HTTP surface and
//! persistence: one method per route operation, nothing else. The production
//! implementation is [`MongoStore`](super::MongoStore); `MemoryStore` backs
//! the test suite.

use std::sync::RwLock;

use async_trait::async_trait;
use bson::oid::ObjectId;
use thiserror::Error;

use super::schemas::{BlogDoc, CommentDoc, UserDoc};

/// Fixed number of posts returned by the latest-blogs listing
pub const LATEST_BLOGS_LIMIT: usize = 8;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Driver-level failure (connection, query, decode)
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Internal store failure
    #[error("internal store error: {0}")]
    Internal(String),
}

/// Collection operations backing the API routes
///
/// Every route performs exactly one of these operations. No method retries;
/// a failed call fails the request.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user, returning the store-assigned ID
    async fn insert_user(&self, user: UserDoc) -> StoreResult<ObjectId>;

    /// List all users
    async fn list_users(&self) -> StoreResult<Vec<UserDoc>>;

    /// Insert a blog post, returning the store-assigned ID
    async fn insert_blog(&self, blog: BlogDoc) -> StoreResult<ObjectId>;

    /// List blog posts, optionally filtered by exact `authorEmail` match
    async fn list_blogs(&self, author_email: Option<&str>) -> StoreResult<Vec<BlogDoc>>;

    /// Fetch one blog post by ID
    async fn get_blog(&self, id: ObjectId) -> StoreResult<Option<BlogDoc>>;

    /// The [`LATEST_BLOGS_LIMIT`] most recently inserted posts, newest first
    async fn latest_blogs(&self) -> StoreResult<Vec<BlogDoc>>;

    /// Delete one blog post by ID, returning the number deleted (0 or 1)
    async fn delete_blog(&self, id: ObjectId) -> StoreResult<u64>;

    /// Insert a comment, returning the store-assigned ID
    async fn insert_comment(&self, comment: CommentDoc) -> StoreResult<ObjectId>;

    /// List comments whose `blogId` equals the given string, newest first
    async fn comments_for_blog(&self, blog_id: &str) -> StoreResult<Vec<CommentDoc>>;
}

/// In-memory store for testing
///
/// In production the router is wired to `MongoStore`; this implementation
/// keeps insertion-ordered vectors so ordering semantics ("newest first")
/// match the ObjectId-descending sorts the Mongo store performs.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserDoc>>,
    blogs: RwLock<Vec<BlogDoc>>,
    comments: RwLock<Vec<CommentDoc>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Internal("lock poisoned".to_string())
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_user(&self, mut user: UserDoc) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        user._id = Some(id);
        self.users.write().map_err(|_| Self::poisoned())?.push(user);
        Ok(id)
    }

    async fn list_users(&self) -> StoreResult<Vec<UserDoc>> {
        Ok(self.users.read().map_err(|_| Self::poisoned())?.clone())
    }

    async fn insert_blog(&self, mut blog: BlogDoc) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        blog._id = Some(id);
        self.blogs.write().map_err(|_| Self::poisoned())?.push(blog);
        Ok(id)
    }

    async fn list_blogs(&self, author_email: Option<&str>) -> StoreResult<Vec<BlogDoc>> {
        let blogs = self.blogs.read().map_err(|_| Self::poisoned())?;
        Ok(blogs
            .iter()
            .filter(|b| author_email.map_or(true, |email| b.author_email == email))
            .cloned()
            .collect())
    }

    async fn get_blog(&self, id: ObjectId) -> StoreResult<Option<BlogDoc>> {
        let blogs = self.blogs.read().map_err(|_| Self::poisoned())?;
        Ok(blogs.iter().find(|b| b._id == Some(id)).cloned())
    }

    async fn latest_blogs(&self) -> StoreResult<Vec<BlogDoc>> {
        let blogs = self.blogs.read().map_err(|_| Self::poisoned())?;
        Ok(blogs.iter().rev().take(LATEST_BLOGS_LIMIT).cloned().collect())
    }

    async fn delete_blog(&self, id: ObjectId) -> StoreResult<u64> {
        let mut blogs = self.blogs.write().map_err(|_| Self::poisoned())?;
        match blogs.iter().position(|b| b._id == Some(id)) {
            Some(idx) => {
                blogs.remove(idx);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn insert_comment(&self, mut comment: CommentDoc) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        comment._id = Some(id);
        self.comments
            .write()
            .map_err(|_| Self::poisoned())?
            .push(comment);
        Ok(id)
    }

    async fn comments_for_blog(&self, blog_id: &str) -> StoreResult<Vec<CommentDoc>> {
        let comments = self.comments.read().map_err(|_| Self::poisoned())?;
        Ok(comments
            .iter()
            .rev()
            .filter(|c| c.blog_id == blog_id)
            .cloned()
            .collect())
    }
}
