// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yare::parameterized;

fn client(base: &str, token: Option<&str>) -> ApiClient {
    ApiClient::new(&TrackerConfig {
        api_base_url: base.to_string(),
        auth_token: token.map(str::to_string),
        ..TrackerConfig::default()
    })
    .unwrap()
}

#[parameterized(
    bare_host = { "http://localhost:8000", "http://localhost:8000/api/transcripts/jobs/job-1/events" },
    trailing_slash = { "http://localhost:8000/", "http://localhost:8000/api/transcripts/jobs/job-1/events" },
    path_prefix = { "https://example.com/backend/", "https://example.com/backend/api/transcripts/jobs/job-1/events" },
)]
fn job_url_appends_job_path(base: &str, expected: &str) {
    let url = client(base, None).job_url("job-1", Endpoint::Events).unwrap();
    assert_eq!(url.as_str(), expected);
}

#[test]
fn job_url_encodes_id_as_single_segment() {
    let url = client("http://localhost:8000", None)
        .job_url("a/b c", Endpoint::Status)
        .unwrap();
    assert_eq!(
        url.as_str(),
        "http://localhost:8000/api/transcripts/jobs/a%2Fb%20c/status"
    );
}

#[parameterized(
    not_a_url = { "localhost:8000 nope" },
    wrong_scheme = { "ftp://example.com" },
    mailto = { "mailto:ops@example.com" },
)]
fn new_rejects_unusable_base(base: &str) {
    let result = ApiClient::new(&TrackerConfig {
        api_base_url: base.to_string(),
        ..TrackerConfig::default()
    });
    assert!(matches!(result, Err(TransportError::InvalidUrl(_))));
}

#[tokio::test]
async fn get_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/transcripts/jobs/job-1/status"))
        .and(header("authorization", "Bearer secret"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    client(&server.uri(), Some("secret"))
        .get("job-1", Endpoint::Status, "application/json")
        .await
        .unwrap();
}

#[tokio::test]
async fn get_without_token_sends_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(path("/api/transcripts/jobs/job-1/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&server)
        .await;

    client(&server.uri(), None)
        .get("job-1", Endpoint::Status, "application/json")
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn get_maps_error_status() {
    // Nothing mounted, so every path is a 404
    let server = MockServer::start().await;

    let result = client(&server.uri(), None)
        .get("missing", Endpoint::Status, "application/json")
        .await;

    assert!(matches!(result, Err(TransportError::Status(404))));
}

#[tokio::test]
async fn get_maps_refused_connection() {
    // Bind then drop to get a port with nothing listening
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client(&format!("http://{}", addr), None)
        .get("job-1", Endpoint::Status, "application/json")
        .await;

    assert!(matches!(result, Err(TransportError::Connect(_))));
}
