use axum_test::TestServer;

use workshop_provider::router::build_router;
use workshop_provider::state::AppState;

pub const VALID_DATE: &str = "2024-01-01T10:00:00";

/// Build a test server around a fresh store holding `count`, with the
/// provider-state endpoint mounted. The returned state shares that store.
pub fn test_server(count: u32) -> (TestServer, AppState) {
    let state = AppState::new(count, true);
    let server = TestServer::new(build_router(state.clone())).unwrap();
    (server, state)
}
