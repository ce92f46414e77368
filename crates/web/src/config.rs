//! # Web Configuration Module
//!
//! Loads the frontend's configuration from environment variables, with
//! defaults where sensible.
//!
//! ## Environment Variables
//!
//! - `WEB_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `WEB_PORT`: The port to listen on (default: 3000)
//! - `GRAPHQL_ENDPOINT`: URL of the external appointment API (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `WEB_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `WEB_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

/// Configuration for the slotbook web frontend.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Host address for the web server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the web server to listen on
    pub port: u16,

    /// URL of the external GraphQL appointment API
    pub graphql_endpoint: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl WebConfig {
    /// Creates a new WebConfig from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `GRAPHQL_ENDPOINT` is not set or `WEB_PORT`
    /// cannot be parsed as a u16.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("WEB_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid WEB_PORT value")?;

        // External API settings
        let graphql_endpoint = env::var("GRAPHQL_ENDPOINT")
            .wrap_err("GRAPHQL_ENDPOINT environment variable must be set")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("WEB_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("WEB_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            graphql_endpoint,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:3000").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
