//! Test helper utilities for API crate integration tests.

// Each test binary uses a different subset of these helpers
#![expect(dead_code)]

use heimdahl_api::{ClientConfig, HeimdahlClient};
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// API key used by every test client.
pub const TEST_API_KEY: &str = "pk_test_key";

/// Start a mock Heimdahl server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a client whose base URL is `{mock}/v1`.
pub fn client_with_mock(mock: &MockServer) -> HeimdahlClient {
    let url = Url::parse(&format!("{}/v1", mock.uri())).unwrap();
    HeimdahlClient::with_config(ClientConfig::new(TEST_API_KEY).with_base_url(url)).unwrap()
}

/// `count` records with sequential ids starting at `first_id`.
pub fn records(first_id: usize, count: usize) -> Vec<Value> {
    (first_id..first_id + count)
        .map(|id| json!({ "id": id, "amount": id * 10 }))
        .collect()
}

/// Read a numeric query parameter from a received request.
pub fn query_u32(request: &Request, name: &str) -> Option<u32> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .and_then(|(_, v)| v.parse().ok())
}

/// Respond to `page`/`pageSize` requests from a data set of `total` records.
///
/// Records are wrapped under `key` when given, otherwise returned as a bare array.
pub fn paged_responder(
    total: usize,
    key: Option<&'static str>,
) -> impl Fn(&Request) -> ResponseTemplate + Send + Sync + 'static {
    move |request: &Request| {
        let page = query_u32(request, "page").unwrap_or(0) as usize;
        let page_size = query_u32(request, "pageSize").unwrap_or(10) as usize;
        let start = (page * page_size).min(total);
        let end = (start + page_size).min(total);
        let batch = Value::from(records(start, end - start));
        let body = match key {
            Some(key) => json!({ key: batch }),
            None => batch,
        };
        ResponseTemplate::new(200).set_body_json(body)
    }
}

/// Mount a paged data set on `endpoint_path`.
pub async fn mock_paged(
    server: &MockServer,
    endpoint_path: &str,
    total: usize,
    key: Option<&'static str>,
) {
    Mock::given(method("GET"))
        .and(path(endpoint_path))
        .respond_with(paged_responder(total, key))
        .mount(server)
        .await;
}

/// Mock any GET with a fixed status and body.
pub async fn mock_status(server: &MockServer, status_code: u16, body: &str) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status_code).set_body_string(body))
        .mount(server)
        .await;
}

/// Page indices and sizes of all received requests, in order.
pub async fn received_pages(server: &MockServer) -> Vec<(u32, u32)> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|r| {
            (
                query_u32(r, "page").unwrap_or(u32::MAX),
                query_u32(r, "pageSize").unwrap_or(u32::MAX),
            )
        })
        .collect()
}
