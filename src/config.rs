// src/config.rs
//
// Runtime configuration
//
// Built once by the binary and handed to the wiring code. Library code never
// reads the environment directly.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the movie catalogue API (without the `/movies` suffix)
    pub api_url: String,
    /// Optional bearer token sent with every catalogue request
    pub api_token: Option<String>,
    /// SQLite file backing the local cache
    pub database_path: PathBuf,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            database_path: PathBuf::from("moviehub.db"),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_token.is_none());
        assert_eq!(config.http_timeout, Duration::from_secs(30));
    }
}
