use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::{info, warn};

use workshop_contract::state::StateChangeRequest;

use crate::state::AppState;
use crate::usecase::state_change::ChangeStateUseCase;

// ── POST /pactStateChange ────────────────────────────────────────────────────

pub async fn change_state(
    State(state): State<AppState>,
    Json(body): Json<StateChangeRequest>,
) -> Json<Value> {
    let usecase = ChangeStateUseCase {
        store: state.data_store(),
    };
    match usecase.execute(&body.state) {
        Some(applied) => info!(
            state = applied.label(),
            count = applied.data_count(),
            "provider state changed"
        ),
        None => warn!(state = %body.state, "unknown provider state, counter unchanged"),
    }
    Json(json!({}))
}
