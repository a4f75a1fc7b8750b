use serde::{Deserialize, Serialize};

/// Data count a fresh provider starts with.
pub const DEFAULT_DATA_COUNT: u32 = 1000;

/// Named provider states that contract interactions can be verified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderState {
    DataAvailable,
    NoData,
}

impl ProviderState {
    pub const ALL: [ProviderState; 2] = [Self::DataAvailable, Self::NoData];

    pub fn label(self) -> &'static str {
        match self {
            Self::DataAvailable => "data count > 0",
            Self::NoData => "data count == 0",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }

    /// Counter value the provider must hold while in this state.
    pub fn data_count(self) -> u32 {
        match self {
            Self::DataAvailable => DEFAULT_DATA_COUNT,
            Self::NoData => 0,
        }
    }
}

/// Body of `POST /pactStateChange`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateChangeRequest {
    pub state: String,
}
