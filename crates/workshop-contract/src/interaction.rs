//! Contract interaction format and response matching.
//!
//! Each file at `contracts/http/{service}/{id}.json` describes one interaction:
//! the provider state it requires, the request the consumer sends and the
//! response it relies on. Consumer tests stub the provider from the example
//! response; the contract harness replays the request against a real provider
//! and checks the response with [`check_body`].

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::ContractError;
use crate::timestamp;

/// A single request/response interaction loaded from a contract file.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// Service name used for filtering (`provider`).
    pub service: String,
    /// Unique identifier within the service (matches the filename stem).
    pub id: String,
    /// Human-readable description shown in test output.
    pub description: String,
    /// Provider state label to establish before replaying the request.
    pub given: Option<String>,
    pub request: Request,
    pub expect: Expect,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub query: BTreeMap<String, String>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Expect {
    /// Expected HTTP status code.
    pub status: u16,
    /// Expected response headers (subset match — extra headers are allowed).
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Example body. Absent means the body is not inspected.
    pub body: Option<Value>,
    /// Per-field rules replacing exact comparison for top-level body fields.
    #[serde(default)]
    pub matchers: BTreeMap<String, Matcher>,
}

/// Rule a body field must satisfy instead of equalling the example value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Matcher {
    /// A string in the canonical offset timestamp format.
    Datetime,
    /// Any JSON integer.
    Integer,
    /// Any value of the same JSON type as the example.
    Type,
}

impl Matcher {
    fn accepts(self, example: &Value, actual: &Value) -> bool {
        match self {
            Self::Datetime => actual
                .as_str()
                .is_some_and(|s| timestamp::parse_offset(s).is_ok()),
            Self::Integer => actual.is_i64() || actual.is_u64(),
            Self::Type => same_type(example, actual),
        }
    }
}

fn same_type(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

impl Interaction {
    pub fn load(path: &Path) -> Result<Self, ContractError> {
        let content = fs::read_to_string(path).map_err(|source| ContractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ContractError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check an actual response body against this interaction's expectation.
    pub fn check_body(&self, actual: &Value) -> Vec<String> {
        match &self.expect.body {
            Some(expected) => check_body(expected, actual, &self.expect.matchers),
            None => Vec::new(),
        }
    }
}

/// Load every `*.json` interaction in `dir`, sorted by id.
pub fn load_dir(dir: &Path) -> Result<Vec<Interaction>, ContractError> {
    let entries = fs::read_dir(dir).map_err(|source| ContractError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut interactions = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            interactions.push(Interaction::load(&path)?);
        }
    }

    interactions.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(interactions)
}

/// Compare `actual` to the `expected` example. Objects are matched field by
/// field (extra actual fields are allowed); fields named in `matchers` are
/// checked by rule instead of equality. Returns one message per mismatch.
pub fn check_body(
    expected: &Value,
    actual: &Value,
    matchers: &BTreeMap<String, Matcher>,
) -> Vec<String> {
    let (Some(expected_fields), Some(actual_fields)) = (expected.as_object(), actual.as_object())
    else {
        return if expected == actual {
            Vec::new()
        } else {
            vec![format!("body: expected {expected}, got {actual}")]
        };
    };

    let mut mismatches = Vec::new();
    for (name, example) in expected_fields {
        let Some(value) = actual_fields.get(name) else {
            mismatches.push(format!("body.{name}: missing"));
            continue;
        };
        match matchers.get(name) {
            Some(rule) if !rule.accepts(example, value) => {
                mismatches.push(format!("body.{name}: {value} does not satisfy {rule:?}"));
            }
            Some(_) => {}
            None if example != value => {
                mismatches.push(format!("body.{name}: expected {example}, got {value}"));
            }
            None => {}
        }
    }
    mismatches
}
