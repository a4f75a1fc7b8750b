//! HTTP client for the provider's `GET /provider.json`.
//!
//! One request per call, no retries. Any status other than 200 is folded into
//! a degraded [`ConsumerResult`]; only transport failures and undecodable 200
//! bodies reach the caller as errors.

use std::time::Duration;

use reqwest::{StatusCode, Url};
use tracing::{debug, info};

use workshop_contract::response::ProviderResponse;
use workshop_contract::{PROVIDER_JSON_PATH, VALID_DATE_PARAM};

use crate::error::ConsumerError;
use crate::outcome::ConsumerResult;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ProviderClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProviderClient {
    pub fn new(base_url: &str) -> Result<Self, ConsumerError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ConsumerError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    fn provider_url(&self, valid_date: Option<&str>) -> Result<Url, ConsumerError> {
        let endpoint = format!("{}{}", self.base_url, PROVIDER_JSON_PATH);
        let url = match valid_date.filter(|d| !d.is_empty()) {
            Some(date) => Url::parse_with_params(&endpoint, &[(VALID_DATE_PARAM, date)]),
            None => Url::parse(&endpoint),
        };
        url.map_err(|e| ConsumerError::InvalidUrl(format!("{endpoint}: {e}")))
    }

    /// Fetch the provider snapshot. `Ok(None)` means the provider answered
    /// with something other than 200.
    pub async fn load_provider_json(
        &self,
        valid_date: Option<&str>,
    ) -> Result<Option<ProviderResponse>, ConsumerError> {
        let url = self.provider_url(valid_date)?;
        let resp = self.http.get(url).send().await?;
        let status = resp.status();

        if status != StatusCode::OK {
            match resp.text().await {
                Ok(body) => debug!(status = status.as_u16(), %body, "provider returned no data"),
                Err(e) => debug!(
                    status = status.as_u16(),
                    error = %e,
                    "provider returned no data, body unreadable"
                ),
            }
            return Ok(None);
        }

        let body = resp.bytes().await?;
        debug!(
            status = status.as_u16(),
            body = %String::from_utf8_lossy(&body),
            "provider response"
        );
        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| ConsumerError::MalformedResponse(e.to_string()))
    }

    /// Call the provider and derive the ratio and timestamp.
    pub async fn fetch_and_process_data(
        &self,
        valid_date: Option<&str>,
    ) -> Result<ConsumerResult, ConsumerError> {
        let result = match self.load_provider_json(valid_date).await? {
            Some(resp) => ConsumerResult::from_response(&resp)?,
            None => ConsumerResult::degraded(),
        };
        info!(
            ratio = result.ratio,
            timestamp = ?result.timestamp,
            degraded = result.is_degraded(),
            "processed provider data"
        );
        Ok(result)
    }
}
