use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Constant carried in the `test` field of every snapshot.
pub const TEST_MARKER: &str = "NO";

/// Body of a successful `GET /provider.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderResponse {
    pub test: String,
    #[serde(with = "crate::timestamp")]
    pub valid_date: DateTime<FixedOffset>,
    pub count: i64,
}

impl ProviderResponse {
    pub fn snapshot(now: DateTime<FixedOffset>, count: u32) -> Self {
        Self {
            test: TEST_MARKER.to_owned(),
            valid_date: now,
            count: i64::from(count),
        }
    }
}

/// Body of a 400 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
