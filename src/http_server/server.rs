//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::Store;

use super::blog_routes::blog_routes;
use super::comment_routes::comment_routes;
use super::user_routes::user_routes;

/// State shared by all route handlers
pub struct AppState {
    pub store: Arc<dyn Store>,
}

/// HTTP server for the WriteFlow API
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over the given store
    pub fn new(addr: impl Into<String>, store: Arc<dyn Store>) -> Self {
        Self {
            addr: addr.into(),
            router: Self::build_router(store),
        }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(store: Arc<dyn Store>) -> Router {
        let state = Arc::new(AppState { store });

        // All origins permitted on all routes
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            // Liveness/welcome at root level
            .route("/", get(welcome_handler))
            .merge(user_routes(state.clone()))
            .merge(blog_routes(state.clone()))
            .merge(comment_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server, draining in-flight requests on shutdown
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.addr.parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid listen address {}: {}", self.addr, e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        info!("WriteFlow API listening on http://{}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Welcome/liveness handler
async fn welcome_handler() -> &'static str {
    "Hello World!"
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}
