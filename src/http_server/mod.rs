//! # WriteFlow HTTP Server Module
//!
//! Axum-based API server. Each route performs exactly one store operation.
//!
//! # Endpoints
//!
//! - `GET /` - Liveness/welcome
//! - `POST /users`, `GET /users` - User records
//! - `POST /blogs`, `GET /blogs`, `GET /blogs/:id`, `DELETE /blogs/:id` - Blog posts
//! - `GET /latest-blogs` - Eight most recent posts
//! - `POST /comments`, `GET /comments/:blogId` - Comments per post

pub mod blog_routes;
pub mod comment_routes;
pub mod errors;
pub mod response;
pub mod server;
pub mod user_routes;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{DeleteAck, InsertAck};
pub use server::{AppState, HttpServer};
