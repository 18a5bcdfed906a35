//! WriteFlow API entry point
//!
//! Startup order: env file, config, logging, store connection (fatal on
//! failure), HTTP server. The store connection is released after the server
//! has drained.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use writeflow::config::Args;
use writeflow::db::MongoStore;
use writeflow::http_server::HttpServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("writeflow={},info", args.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("WriteFlow API starting");
    info!("Listen: {}", args.socket_addr());
    info!("MongoDB: {} (db '{}')", args.mongodb_uri, args.mongodb_db);

    let store = match MongoStore::connect(&args.mongodb_uri, &args.mongodb_db).await {
        Ok(store) => store,
        Err(e) => {
            error!("MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    let server = HttpServer::new(args.socket_addr(), Arc::new(store.clone()));
    server.start().await?;

    // Serve returned after graceful drain; release the store connection.
    store.shutdown().await;
    info!("WriteFlow API stopped");

    Ok(())
}
