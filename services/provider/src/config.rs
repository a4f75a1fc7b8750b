use workshop_contract::state::DEFAULT_DATA_COUNT;

/// Provider service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// TCP port for the HTTP server (default 8080). Env var: `PROVIDER_PORT`.
    pub provider_port: u16,
    /// Initial data count (default 1000). Env var: `PROVIDER_DATA_COUNT`.
    pub data_count: u32,
    /// Mount `POST /pactStateChange` (default false). Env var:
    /// `PROVIDER_STATE_CHANGE_ENABLED`. Only verification runs should set this.
    pub state_change_enabled: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            provider_port: 8080,
            data_count: DEFAULT_DATA_COUNT,
            state_change_enabled: false,
        }
    }
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            provider_port: lookup("PROVIDER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.provider_port),
            data_count: lookup("PROVIDER_DATA_COUNT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.data_count),
            state_change_enabled: lookup("PROVIDER_STATE_CHANGE_ENABLED")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.state_change_enabled),
        }
    }
}
