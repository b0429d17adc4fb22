//! # API Configuration Module
//!
//! Loads the server configuration from environment variables.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3001)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `BOOKING_SERIALIZE_SLOT_WRITES`: Serialise writes to the same slot (default: false)

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: Level,
    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,
    /// Request timeout in seconds
    pub request_timeout: u64,
    /// Holds a per-slot lock across the conflict check and the write.
    pub serialize_slot_writes: bool,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// Fails when `DATABASE_URL` is unset or `API_PORT` is not a valid port.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("API_PORT") {
            Some(port) => port.trim().parse().wrap_err("Invalid API_PORT value")?,
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre::eyre!("DATABASE_URL environment variable must be set"))?;

        let log_level = parse_log_level(lookup("LOG_LEVEL").as_deref().unwrap_or("info"));

        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECONDS);

        let serialize_slot_writes = lookup("BOOKING_SERIALIZE_SLOT_WRITES")
            .map(|value| matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
            serialize_slot_writes,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_log_level(raw: &str) -> Level {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
