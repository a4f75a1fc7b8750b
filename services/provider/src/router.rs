use axum::{
    Router,
    routing::{get, post},
};

use workshop_contract::{PROVIDER_JSON_PATH, STATE_CHANGE_PATH};
use workshop_core::health::{healthz, readyz};
use workshop_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{provider_json::get_provider_json, state_change::change_state};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Data
        .route(PROVIDER_JSON_PATH, get(get_provider_json));

    // Test-only provider states
    if state.state_change_enabled {
        router = router.route(STATE_CHANGE_PATH, post(change_state));
    }

    router
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
