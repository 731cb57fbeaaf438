/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for gdc-adapter tests

#![allow(dead_code)]

use std::path::PathBuf;

use gdc_adapter::{ClientIdentity, GdcClient};
use rsa::RsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const CLIENT_KEY: &str = "CK1";
pub const TOKEN_PATH: &str = "/v1.0/auth/access-token";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Public half of the `rsa_pkcs1.pem` / `rsa_pkcs8.pem` fixtures
pub fn public_key() -> RsaPublicKey {
    RsaPublicKey::read_public_key_pem_file(fixture_path("rsa_public.pem")).unwrap()
}

pub fn identity(server: &MockServer, key_file: &str) -> ClientIdentity {
    ClientIdentity::new(server.uri(), CLIENT_KEY, fixture_path(key_file))
}

pub fn test_client(server: &MockServer) -> GdcClient {
    GdcClient::new(identity(server, "rsa_pkcs1.pem")).unwrap()
}

/// Mount the token endpoint returning `token`, expected `times` times
pub async fn mount_token(server: &MockServer, token: &str, times: u64) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "accessToken": token,
            "expiresIn": 900,
            "type": "Bearer",
        })))
        .expect(times)
        .mount(server)
        .await;
}

pub fn header<'a>(request: &'a Request, name: &str) -> &'a str {
    request
        .headers
        .get(name)
        .unwrap_or_else(|| panic!("missing header {name}"))
        .to_str()
        .unwrap()
}

/// Requests received on `path`, in arrival order
pub async fn requests_to(server: &MockServer, request_path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|request| request.url.path() == request_path)
        .collect()
}

/// Rebuild the canonical string from what the server actually received
pub fn received_canonical(request: &Request, access_token: &str) -> String {
    let path_and_query = match request.url.query() {
        Some(query) => format!("{}?{}", request.url.path(), query),
        None => request.url.path().to_string(),
    };
    format!(
        "{}|{}|{}|{}",
        header(request, "X-Timestamp"),
        access_token,
        path_and_query,
        hex::encode(&request.body)
    )
}
