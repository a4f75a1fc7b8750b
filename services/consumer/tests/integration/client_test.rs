use std::time::Duration;

use mockito::{Matcher, Server};

use workshop_consumer::client::ProviderClient;
use workshop_consumer::error::ConsumerError;
use workshop_contract::timestamp;
use workshop_testing::server::{black_hole, truncated_reply, unused_url};

use crate::helpers::{snapshot_body, stub_provider};

#[tokio::test]
async fn can_process_the_json_payload_from_the_provider() {
    let date = "2013-08-16T15:31:20+10:00";
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/provider.json")
        .match_query(Matcher::Regex("validDate=.+".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(snapshot_body(date, 100))
        .create_async()
        .await;

    let result = ProviderClient::new(&server.url())
        .unwrap()
        .fetch_and_process_data(Some("2024-01-01T10:00:00"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.ratio, 1);
    assert_eq!(result.timestamp, Some(timestamp::parse_offset(date).unwrap()));
}

#[tokio::test]
async fn should_use_integer_division_for_ratio() {
    let mut server = Server::new_async().await;
    stub_provider(&mut server, 200, &snapshot_body("2024-01-01T10:00:00+00:00", 7)).await;

    let result = ProviderClient::new(&server.url())
        .unwrap()
        .fetch_and_process_data(Some("2024-01-01T10:00:00"))
        .await
        .unwrap();

    assert_eq!(result.ratio, 14);
}

#[tokio::test]
async fn should_degrade_on_every_non_ok_status() {
    for status in [400, 404, 500, 503] {
        let mut server = Server::new_async().await;
        stub_provider(&mut server, status, r#"{"error": "nope"}"#).await;

        let result = ProviderClient::new(&server.url())
            .unwrap()
            .fetch_and_process_data(Some("2024-01-01T10:00:00"))
            .await
            .unwrap();

        assert_eq!(result.ratio, 0, "status {status}");
        assert!(result.timestamp.is_none(), "status {status}");
    }
}

#[tokio::test]
async fn should_reject_zero_count_without_panicking() {
    let mut server = Server::new_async().await;
    stub_provider(&mut server, 200, &snapshot_body("2024-01-01T10:00:00+00:00", 0)).await;

    let result = ProviderClient::new(&server.url())
        .unwrap()
        .fetch_and_process_data(Some("2024-01-01T10:00:00"))
        .await;

    assert!(
        matches!(result, Err(ConsumerError::MalformedResponse(_))),
        "expected MalformedResponse, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_undecodable_body() {
    let mut server = Server::new_async().await;
    stub_provider(&mut server, 200, r#"{"test": "NO", "validDate": "yesterday", "count": 1}"#)
        .await;

    let result = ProviderClient::new(&server.url())
        .unwrap()
        .fetch_and_process_data(Some("2024-01-01T10:00:00"))
        .await;

    assert!(matches!(result, Err(ConsumerError::MalformedResponse(_))));
}

#[tokio::test]
async fn should_omit_query_when_no_date_given() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/provider.json")
        .match_query(Matcher::Exact(String::new()))
        .with_status(400)
        .with_body(r#"{"error": "validDate is required"}"#)
        .create_async()
        .await;

    let result = ProviderClient::new(&server.url())
        .unwrap()
        .fetch_and_process_data(None)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_degraded());
}

#[tokio::test]
async fn should_propagate_connection_refused_as_transport_error() {
    let url = unused_url().await;

    let result = ProviderClient::new(&url)
        .unwrap()
        .fetch_and_process_data(Some("2024-01-01T10:00:00"))
        .await;

    assert!(
        matches!(result, Err(ConsumerError::Transport(_))),
        "expected Transport, got {result:?}"
    );
}

#[tokio::test]
async fn should_propagate_timeout_as_transport_error() {
    let url = black_hole().await;

    let result = ProviderClient::with_timeout(&url, Duration::from_millis(200))
        .unwrap()
        .fetch_and_process_data(Some("2024-01-01T10:00:00"))
        .await;

    let err = result.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn should_degrade_when_error_body_breaks_off() {
    let base_url = truncated_reply(400).await;

    let result = ProviderClient::new(&base_url)
        .unwrap()
        .fetch_and_process_data(Some("2024-01-01T10:00:00"))
        .await
        .unwrap();

    assert!(result.is_degraded());
}
