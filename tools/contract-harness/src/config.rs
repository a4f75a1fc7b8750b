//! Contract harness configuration loaded from environment variables.

use std::time::Duration;

use workshop_contract::STATE_CHANGE_PATH;

/// Configuration for a verification run.
///
/// Loaded from env vars after `dotenv::dotenv().ok()`.
/// All values have safe defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ContractHarnessConfig {
    /// Provider-state endpoint path (`STATE_CHANGE_PATH`).
    /// default: `"/pactStateChange"`
    pub state_change_path: String,

    /// Per-request timeout in milliseconds (`HARNESS_TIMEOUT_MS`).
    /// default: `5000`
    pub timeout: Duration,
}

impl Default for ContractHarnessConfig {
    fn default() -> Self {
        Self {
            state_change_path: STATE_CHANGE_PATH.to_owned(),
            timeout: Duration::from_millis(5000),
        }
    }
}

impl ContractHarnessConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            state_change_path: std::env::var("STATE_CHANGE_PATH")
                .unwrap_or(defaults.state_change_path),
            timeout: std::env::var("HARNESS_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
        }
    }
}
