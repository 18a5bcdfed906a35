//! User HTTP Routes
//!
//! Create and list user records.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::db::schemas::UserDoc;

use super::errors::ApiResult;
use super::response::InsertAck;
use super::server::AppState;

/// Create user routes
pub fn user_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users", get(list_users))
        .with_state(state)
}

/// Insert one user from the request body
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<UserDoc>,
) -> ApiResult<Json<InsertAck>> {
    let id = state.store.insert_user(user).await?;
    Ok(Json(InsertAck::new(id)))
}

/// List all users, no filter, no pagination
async fn list_users(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<UserDoc>>> {
    let users = state.store.list_users().await?;
    Ok(Json(users))
}
