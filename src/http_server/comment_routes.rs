//! Comment HTTP Routes
//!
//! Create comments and list them per blog post. The blog reference is an
//! opaque string; no identifier parsing happens on this surface.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::db::schemas::CommentDoc;

use super::errors::ApiResult;
use super::response::InsertAck;
use super::server::AppState;

/// Create comment routes
pub fn comment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/comments", post(create_comment))
        .route("/comments/:blog_id", get(list_comments))
        .with_state(state)
}

/// Insert one comment from the request body
async fn create_comment(
    State(state): State<Arc<AppState>>,
    Json(comment): Json<CommentDoc>,
) -> ApiResult<(StatusCode, Json<InsertAck>)> {
    let id = state.store.insert_comment(comment).await?;
    Ok((StatusCode::CREATED, Json(InsertAck::new(id))))
}

/// List comments for one blog post, newest first; no matches is an empty
/// list, not an error
async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(blog_id): Path<String>,
) -> ApiResult<Json<Vec<CommentDoc>>> {
    let comments = state.store.comments_for_blog(&blog_id).await?;
    Ok(Json(comments))
}
