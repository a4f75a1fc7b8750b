use chrono::NaiveDateTime;

use workshop_contract::timestamp;

use crate::error::ProviderError;

/// Validate a `GET /provider.json` request against the current data count.
///
/// Checks short-circuit in this order: the parameter must be present and
/// non-empty, data must be available, then the parameter must parse as a
/// local date-time. An empty counter therefore answers 404 whatever the
/// date looks like.
pub fn validate_request(
    valid_date: Option<&str>,
    data_count: u32,
) -> Result<NaiveDateTime, ProviderError> {
    let raw = valid_date
        .filter(|v| !v.is_empty())
        .ok_or(ProviderError::ParameterRequired)?;
    if data_count == 0 {
        return Err(ProviderError::NoData);
    }
    timestamp::parse_local(raw).ok_or_else(|| ProviderError::InvalidParameter(raw.to_owned()))
}
