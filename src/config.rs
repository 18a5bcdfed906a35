//! Process configuration
//!
//! CLI arguments and environment variable handling using clap.
//! A `.env` file is honored when present (loaded in `main`).

use clap::Parser;

/// WriteFlow API server configuration
#[derive(Parser, Debug, Clone)]
#[command(name = "writeflow")]
#[command(about = "REST backend for the WriteFlow blogging platform")]
pub struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "4000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// MongoDB connection URI (required; startup fails without it)
    #[arg(long, env = "MONGODB_URI")]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "writeflowDB")]
    pub mongodb_db: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["writeflow", "--mongodb-uri", "mongodb://localhost:27017"]);
        assert_eq!(args.port, 4000);
        assert_eq!(args.host, "0.0.0.0");
        assert_eq!(args.mongodb_db, "writeflowDB");
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_socket_addr() {
        let args = parse(&[
            "writeflow",
            "--mongodb-uri",
            "mongodb://localhost:27017",
            "--port",
            "8080",
        ]);
        assert_eq!(args.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_store_uri_is_fatal() {
        // Without the flag or its env fallback, parsing must fail before the
        // server starts.
        std::env::remove_var("MONGODB_URI");
        let result = Args::try_parse_from(["writeflow"]);
        assert!(result.is_err());
    }
}
