use std::time::Duration;

use crate::client::DEFAULT_TIMEOUT;

/// Consumer configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ConsumerConfig {
    /// Provider base URL (default `http://localhost:8080`). Env var: `PROVIDER_URL`.
    pub provider_url: String,
    /// Request timeout (default 10s). Env var: `CONSUMER_TIMEOUT_MS`.
    pub timeout: Duration,
}

impl ConsumerConfig {
    pub fn from_env() -> Self {
        Self {
            provider_url: std::env::var("PROVIDER_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_owned()),
            timeout: std::env::var("CONSUMER_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}
