use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use workshop_provider::domain::repository::DataAvailability;
use workshop_provider::router::build_router;
use workshop_provider::state::AppState;

use crate::helpers::{VALID_DATE, test_server};

#[tokio::test]
async fn should_switch_to_no_data_state() {
    let (server, state) = test_server(1000);

    let resp = server
        .post("/pactStateChange")
        .json(&json!({ "state": "data count == 0" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>(), json!({}));
    assert_eq!(state.store.count(), 0);

    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", VALID_DATE)
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_switch_back_to_data_state() {
    let (server, state) = test_server(0);

    server
        .post("/pactStateChange")
        .json(&json!({ "state": "data count > 0" }))
        .await;

    assert_eq!(state.store.count(), 1000);
}

#[tokio::test]
async fn should_ignore_unknown_state() {
    let (server, state) = test_server(7);

    let resp = server
        .post("/pactStateChange")
        .json(&json!({ "state": "something else" }))
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(state.store.count(), 7);
}

#[tokio::test]
async fn should_not_mount_state_change_by_default() {
    let server = TestServer::new(build_router(AppState::new(1000, false))).unwrap();

    let resp = server
        .post("/pactStateChange")
        .json(&json!({ "state": "data count == 0" }))
        .expect_failure()
        .await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}
