//! Blog HTTP Routes
//!
//! Create, list, fetch, and delete blog posts, plus the fixed-size
//! latest-posts listing.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use bson::oid::ObjectId;
use serde::Deserialize;

use crate::db::schemas::BlogDoc;

use super::errors::{ApiError, ApiResult};
use super::response::{DeleteAck, InsertAck};
use super::server::AppState;

/// Query parameters for the blog listing
#[derive(Debug, Deserialize)]
pub struct BlogListQuery {
    /// Exact-match filter on `authorEmail`; absent or empty means no filter
    pub email: Option<String>,
}

/// Create blog routes
pub fn blog_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/blogs", post(create_blog))
        .route("/blogs", get(list_blogs))
        .route("/blogs/:id", get(get_blog))
        .route("/blogs/:id", delete(delete_blog))
        .route("/latest-blogs", get(latest_blogs))
        .with_state(state)
}

/// Parse a path parameter into an ObjectId, rejecting malformed input as a
/// client error rather than crashing the request path
fn parse_object_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId(id.to_string()))
}

/// Insert one blog post from the request body
async fn create_blog(
    State(state): State<Arc<AppState>>,
    Json(blog): Json<BlogDoc>,
) -> ApiResult<Json<InsertAck>> {
    let id = state.store.insert_blog(blog).await?;
    Ok(Json(InsertAck::new(id)))
}

/// List blog posts, filtered by `?email=` when present and non-empty
async fn list_blogs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BlogListQuery>,
) -> ApiResult<Json<Vec<BlogDoc>>> {
    let email = query.email.as_deref().filter(|e| !e.is_empty());
    let blogs = state.store.list_blogs(email).await?;
    Ok(Json(blogs))
}

/// Fetch one blog post by identifier
async fn get_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogDoc>> {
    let id = parse_object_id(&id)?;
    let blog = state.store.get_blog(id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(blog))
}

/// The most recently inserted posts, newest first, fixed limit
async fn latest_blogs(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<BlogDoc>>> {
    let blogs = state.store.latest_blogs().await?;
    Ok(Json(blogs))
}

/// Delete one blog post by identifier; deleting a missing id acknowledges
/// zero deletions instead of failing
async fn delete_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteAck>> {
    let id = parse_object_id(&id)?;
    let deleted = state.store.delete_blog(id).await?;
    Ok(Json(DeleteAck::new(deleted)))
}
