//! MongoDB store implementation
//!
//! One long-lived [`Client`] owns the connection pool; collection handles are
//! cheap clones over it. Constructed once at startup and injected into the
//! router, released explicitly on shutdown.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures_util::StreamExt;
use mongodb::{Client, Collection, Cursor};
use serde::de::DeserializeOwned;
use tracing::{error, info};

use super::schemas::{
    BlogDoc, CommentDoc, UserDoc, BLOG_COLLECTION, COMMENT_COLLECTION, USER_COLLECTION,
};
use super::store::{Store, StoreError, StoreResult, LATEST_BLOGS_LIMIT};

/// MongoDB-backed store
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    users: Collection<UserDoc>,
    blogs: Collection<BlogDoc>,
    comments: Collection<CommentDoc>,
}

impl MongoStore {
    /// Connect to MongoDB and verify the connection with a ping
    ///
    /// An unreachable store is a startup failure, so the URI gets a bounded
    /// server-selection timeout instead of the driver's 30s default.
    pub async fn connect(uri: &str, db_name: &str) -> StoreResult<Self> {
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri).await?;
        let db = client.database(db_name);
        db.run_command(doc! { "ping": 1 }).await?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            users: db.collection(USER_COLLECTION),
            blogs: db.collection(BLOG_COLLECTION),
            comments: db.collection(COMMENT_COLLECTION),
            client,
        })
    }

    /// Release the client and its connection pool
    pub async fn shutdown(self) {
        info!("Releasing MongoDB connection");
        self.client.shutdown().await;
    }

    fn inserted_object_id(result: mongodb::results::InsertOneResult) -> StoreResult<ObjectId> {
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Internal("insert did not return an ObjectId".to_string()))
    }

    /// Drain a cursor, logging and skipping documents that fail to decode
    async fn collect_all<T>(cursor: Cursor<T>) -> Vec<T>
    where
        T: DeserializeOwned + Unpin + Send + Sync,
    {
        cursor
            .filter_map(|doc| async {
                match doc {
                    Ok(d) => Some(d),
                    Err(e) => {
                        error!("Error reading document: {}", e);
                        None
                    }
                }
            })
            .collect()
            .await
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn insert_user(&self, user: UserDoc) -> StoreResult<ObjectId> {
        let result = self.users.insert_one(user).await?;
        Self::inserted_object_id(result)
    }

    async fn list_users(&self) -> StoreResult<Vec<UserDoc>> {
        let cursor = self.users.find(doc! {}).await?;
        Ok(Self::collect_all(cursor).await)
    }

    async fn insert_blog(&self, blog: BlogDoc) -> StoreResult<ObjectId> {
        let result = self.blogs.insert_one(blog).await?;
        Self::inserted_object_id(result)
    }

    async fn list_blogs(&self, author_email: Option<&str>) -> StoreResult<Vec<BlogDoc>> {
        let filter = match author_email {
            Some(email) => doc! { "authorEmail": email },
            None => doc! {},
        };

        let cursor = self.blogs.find(filter).await?;
        Ok(Self::collect_all(cursor).await)
    }

    async fn get_blog(&self, id: ObjectId) -> StoreResult<Option<BlogDoc>> {
        Ok(self.blogs.find_one(doc! { "_id": id }).await?)
    }

    async fn latest_blogs(&self) -> StoreResult<Vec<BlogDoc>> {
        let cursor = self
            .blogs
            .find(doc! {})
            .sort(doc! { "_id": -1 })
            .limit(LATEST_BLOGS_LIMIT as i64)
            .await?;
        Ok(Self::collect_all(cursor).await)
    }

    async fn delete_blog(&self, id: ObjectId) -> StoreResult<u64> {
        let result = self.blogs.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn insert_comment(&self, comment: CommentDoc) -> StoreResult<ObjectId> {
        let result = self.comments.insert_one(comment).await?;
        Self::inserted_object_id(result)
    }

    async fn comments_for_blog(&self, blog_id: &str) -> StoreResult<Vec<CommentDoc>> {
        let cursor = self
            .comments
            .find(doc! { "blogId": blog_id })
            .sort(doc! { "_id": -1 })
            .await?;
        Ok(Self::collect_all(cursor).await)
    }
}
