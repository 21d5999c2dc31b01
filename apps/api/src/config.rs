use anyhow::{Context, Result};

use crate::boards::greenhouse::DEFAULT_API_URL;

/// Process configuration loaded from environment variables.
/// Every variable is optional; scoring tables are not configured here.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub greenhouse_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            greenhouse_api_url: lookup("GREENHOUSE_API_URL")
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}
