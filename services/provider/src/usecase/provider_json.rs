use chrono::{DateTime, FixedOffset};

use workshop_contract::response::ProviderResponse;

use crate::domain::repository::DataAvailability;
use crate::domain::types::validate_request;
use crate::error::ProviderError;

pub struct GetProviderJsonUseCase<R: DataAvailability> {
    pub store: R,
}

impl<R: DataAvailability> GetProviderJsonUseCase<R> {
    /// Answer with a snapshot stamped `now`. The requested date is only
    /// validated, never echoed back.
    pub fn execute(
        &self,
        valid_date: Option<&str>,
        now: DateTime<FixedOffset>,
    ) -> Result<ProviderResponse, ProviderError> {
        let count = self.store.count();
        validate_request(valid_date, count)?;
        Ok(ProviderResponse::snapshot(now, count))
    }
}
