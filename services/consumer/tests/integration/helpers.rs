use mockito::{Matcher, ServerGuard};

/// Stub `GET /provider.json` (any query) with a canned answer.
pub async fn stub_provider(server: &mut ServerGuard, status: usize, body: &str) {
    server
        .mock("GET", "/provider.json")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;
}

pub fn snapshot_body(valid_date: &str, count: i64) -> String {
    format!(r#"{{"test": "NO", "validDate": "{valid_date}", "count": {count}}}"#)
}
