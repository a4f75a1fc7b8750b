use chrono::{DateTime, FixedOffset};
use serde_json::{Value, json};

use workshop_contract::response::ProviderResponse;
use workshop_contract::timestamp;

use crate::error::ConsumerError;

/// Values the consumer derives from one provider call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerResult {
    pub ratio: i64,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl ConsumerResult {
    /// Result used for every non-200 provider answer.
    pub fn degraded() -> Self {
        Self {
            ratio: 0,
            timestamp: None,
        }
    }

    /// `ratio = 100 / count` (integer division), `timestamp = validDate`.
    pub fn from_response(resp: &ProviderResponse) -> Result<Self, ConsumerError> {
        if resp.count <= 0 {
            return Err(ConsumerError::MalformedResponse(format!(
                "count must be positive, got {}",
                resp.count
            )));
        }
        Ok(Self {
            ratio: 100 / resp.count,
            timestamp: Some(resp.valid_date),
        })
    }

    pub fn is_degraded(&self) -> bool {
        self.timestamp.is_none()
    }

    pub fn to_json(&self) -> Value {
        json!({
            "ratio": self.ratio,
            "timestamp": self.timestamp.as_ref().map(timestamp::format_offset),
        })
    }
}
