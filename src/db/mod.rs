//! # Store Layer
//!
//! Persistence for the three record collections (users, blogs, comments).
//! The [`Store`] trait is the seam the HTTP layer depends on; [`MongoStore`]
//! is the production implementation.

pub mod mongo;
pub mod schemas;
pub mod store;

pub use mongo::MongoStore;
pub use store::{MemoryStore, Store, StoreError, StoreResult, LATEST_BLOGS_LIMIT};
