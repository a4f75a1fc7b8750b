//! HTTP request runner — establishes the provider state, sends one
//! interaction's request and checks the response.

use reqwest::{Client, Method, Url};
use serde_json::json;

use workshop_contract::interaction::Interaction;

use crate::config::ContractHarnessConfig;

/// Result of running a single interaction.
pub struct RunResult {
    pub expected_status: u16,
    pub actual_status: Option<u16>,
    /// Headers that were expected but missing or had the wrong value.
    pub header_mismatches: Vec<String>,
    /// Body fields that did not match the example or their matcher.
    pub body_mismatches: Vec<String>,
    /// Set when the state change or request could not be sent.
    pub error: Option<String>,
}

impl RunResult {
    fn failed(expected_status: u16, error: String) -> Self {
        Self {
            expected_status,
            actual_status: None,
            header_mismatches: Vec::new(),
            body_mismatches: Vec::new(),
            error: Some(error),
        }
    }

    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.actual_status == Some(self.expected_status)
            && self.header_mismatches.is_empty()
            && self.body_mismatches.is_empty()
    }
}

pub struct Runner {
    client: Client,
    base_url: String,
    state_change_path: String,
}

impl Runner {
    pub fn new(base_url: &str, config: &ContractHarnessConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder().timeout(config.timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_owned(),
            state_change_path: config.state_change_path.clone(),
        })
    }

    /// Put the provider into the named state via its state-change endpoint.
    async fn set_state(&self, label: &str) -> Result<(), String> {
        let url = format!("{}{}", self.base_url, self.state_change_path);
        let resp = self
            .client
            .post(&url)
            .json(&json!({ "state": label }))
            .send()
            .await
            .map_err(|e| format!("state change {label:?}: {e}"))?;
        if !resp.status().is_success() {
            return Err(format!(
                "state change {label:?}: provider answered {}",
                resp.status()
            ));
        }
        tracing::debug!(state = label, "provider state set");
        Ok(())
    }

    pub async fn run(&self, interaction: &Interaction) -> RunResult {
        let expected_status = interaction.expect.status;

        if let Some(label) = &interaction.given {
            if let Err(e) = self.set_state(label).await {
                return RunResult::failed(expected_status, e);
            }
        }

        let request = &interaction.request;
        let method = match Method::from_bytes(request.method.to_uppercase().as_bytes()) {
            Ok(m) => m,
            Err(_) => {
                return RunResult::failed(
                    expected_status,
                    format!("unknown HTTP method: {}", request.method),
                );
            }
        };

        let endpoint = format!("{}{}", self.base_url, request.path);
        let url = if request.query.is_empty() {
            Url::parse(&endpoint)
        } else {
            Url::parse_with_params(&endpoint, &request.query)
        };
        let url = match url {
            Ok(u) => u,
            Err(e) => return RunResult::failed(expected_status, format!("{endpoint}: {e}")),
        };

        let mut req = self.client.request(method, url);
        for (k, v) in &request.headers {
            req = req.header(k, v);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return RunResult::failed(expected_status, e.to_string()),
        };

        let actual_status = resp.status().as_u16();
        let headers = resp.headers().clone();

        // Check expected headers (subset match).
        let mut header_mismatches = Vec::new();
        for (name, expected_val) in &interaction.expect.headers {
            match headers.get(name.as_str()) {
                Some(actual_val) if actual_val.to_str().unwrap_or("") == expected_val => {}
                Some(actual_val) => {
                    header_mismatches.push(format!(
                        "{name}: expected {:?}, got {:?}",
                        expected_val,
                        actual_val.to_str().unwrap_or("<non-utf8>")
                    ));
                }
                None => {
                    header_mismatches.push(format!("{name}: missing (expected {expected_val:?})"));
                }
            }
        }

        // Check expected body (example plus matchers).
        let body_mismatches = if interaction.expect.body.is_some() {
            let body_text = resp.text().await.unwrap_or_default();
            let actual_body: serde_json::Value =
                serde_json::from_str(&body_text).unwrap_or(serde_json::Value::Null);
            interaction.check_body(&actual_body)
        } else {
            Vec::new()
        };

        RunResult {
            expected_status,
            actual_status: Some(actual_status),
            header_mismatches,
            body_mismatches,
            error: None,
        }
    }
}
