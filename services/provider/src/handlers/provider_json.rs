use axum::{
    Json,
    extract::{RawQuery, State},
};
use chrono::Local;
use serde::Deserialize;

use workshop_contract::VALID_DATE_PARAM;
use workshop_contract::response::ProviderResponse;

use crate::error::ProviderError;
use crate::state::AppState;
use crate::usecase::provider_json::GetProviderJsonUseCase;

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderJsonQuery {
    pub valid_date: Option<String>,
}

// ── GET /provider.json ───────────────────────────────────────────────────────

pub async fn get_provider_json(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<ProviderResponse>, ProviderError> {
    let valid_date = raw_query.as_deref().and_then(valid_date_param);

    let usecase = GetProviderJsonUseCase {
        store: state.data_store(),
    };
    let snapshot = usecase.execute(valid_date.as_deref(), Local::now().fixed_offset())?;
    Ok(Json(snapshot))
}

/// Extract `validDate` from a raw query string. Keys `serde_qs` cannot
/// decode must not hide it, so a failed decode falls back to plain
/// form-urlencoded pairs.
fn valid_date_param(raw_query: &str) -> Option<String> {
    match serde_qs::from_str::<ProviderJsonQuery>(raw_query) {
        Ok(query) => query.valid_date,
        Err(e) => {
            tracing::debug!(error = %e, "query string not decodable, reading validDate alone");
            url::form_urlencoded::parse(raw_query.as_bytes())
                .find(|(key, _)| key == VALID_DATE_PARAM)
                .map(|(_, value)| value.into_owned())
        }
    }
}
