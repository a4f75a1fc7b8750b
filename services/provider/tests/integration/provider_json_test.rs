use axum::http::StatusCode;
use chrono::{Local, Utc};
use serde_json::{Value, json};

use workshop_contract::response::ProviderResponse;
use workshop_provider::domain::repository::DataAvailability;

use crate::helpers::{VALID_DATE, test_server};

#[tokio::test]
async fn should_return_snapshot_for_valid_date() {
    let (server, _) = test_server(100);

    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", VALID_DATE)
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.header("content-type"), "application/json");
    let body: Value = resp.json();
    assert_eq!(body["test"], "NO");
    assert_eq!(body["count"], 100);
}

#[tokio::test]
async fn should_stamp_current_time_with_offset() {
    let (server, _) = test_server(1000);
    let before = Utc::now().timestamp();

    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", "1999-12-31T23:59:59.999")
        .await;

    let body: ProviderResponse = resp.json();
    let stamped = body.valid_date.timestamp();
    assert!(stamped >= before - 1 && stamped <= Utc::now().timestamp());
    assert_eq!(body.valid_date.offset(), Local::now().fixed_offset().offset());
}

#[tokio::test]
async fn should_reject_missing_valid_date() {
    let (server, _) = test_server(1000);

    let resp = server.get("/provider.json").await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>(), json!({ "error": "validDate is required" }));
}

#[tokio::test]
async fn should_reject_empty_valid_date() {
    let (server, _) = test_server(1000);

    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", "")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>(), json!({ "error": "validDate is required" }));
}

#[tokio::test]
async fn should_reject_unparsable_valid_date() {
    let (server, _) = test_server(1000);

    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", "This is not a date")
        .await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.json::<Value>(),
        json!({ "error": "'This is not a date' is not a date" })
    );
}

#[tokio::test]
async fn should_return_empty_not_found_without_data() {
    let (server, _) = test_server(0);

    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", VALID_DATE)
        .await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
    assert!(resp.text().is_empty());
}

#[tokio::test]
async fn should_return_not_found_without_data_even_for_bad_date() {
    let (server, _) = test_server(0);

    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", "not-a-date")
        .await;

    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_read_counter_changes_between_requests() {
    let (server, state) = test_server(1000);

    state.store.set_count(4);
    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", VALID_DATE)
        .await;
    assert_eq!(resp.json::<Value>()["count"], 4);

    state.store.set_count(0);
    let resp = server
        .get("/provider.json")
        .add_query_param("validDate", VALID_DATE)
        .await;
    assert_eq!(resp.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_tag_responses_with_request_id() {
    let (server, _) = test_server(1000);

    let resp = server.get("/healthz").await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn should_reject_loosely_shaped_valid_dates() {
    let (server, _) = test_server(1000);

    for date in [
        "2024-1-1T1:2:3",
        " 2024-01-01T10:00:00",
        "2024-01-01T10:00:60",
        "+2024-01-01T10:00:00",
        "2024-01-01T10:00:00.1234567891",
    ] {
        let resp = server
            .get("/provider.json")
            .add_query_param("validDate", date)
            .await;

        assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST, "{date:?}");
        assert_eq!(
            resp.json::<Value>(),
            json!({ "error": format!("'{date}' is not a date") })
        );
    }
}

#[tokio::test]
async fn should_accept_valid_date_next_to_malformed_key() {
    let (server, _) = test_server(1000);

    let resp = server
        .get("/provider.json?validDate=2024-01-01T10:00:00&x[=1")
        .await;

    assert_eq!(resp.status_code(), StatusCode::OK);
    assert_eq!(resp.json::<Value>()["count"], 1000);
}

#[tokio::test]
async fn should_still_require_valid_date_beside_malformed_key() {
    let (server, _) = test_server(1000);

    let resp = server.get("/provider.json?x[=1").await;

    assert_eq!(resp.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<Value>(), json!({ "error": "validDate is required" }));
}
