//! # Database Configuration
//!
//! Connection and logging settings, read from environment variables:
//!
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DB_MAX_CONNECTIONS`: pool size (default: 5)
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL database connection string
    pub database_url: String,

    /// Upper bound on pooled connections
    pub max_connections: u32,

    /// Log level for the application
    pub log_level: Level,
}

impl DbConfig {
    /// Loads configuration from the environment.
    ///
    /// # Errors
    ///
    /// - `DATABASE_URL` is not set
    /// - `DB_MAX_CONNECTIONS` is not a valid `u32`
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .wrap_err("Invalid DB_MAX_CONNECTIONS value")?;

        let log_level =
            parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            database_url,
            max_connections,
            log_level,
        })
    }
}

/// Unrecognised values fall back to `INFO`.
pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
