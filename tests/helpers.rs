// Shared test helpers for mock WHOIS servers and clients.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;

use email_domain_check::WhoisClient;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used by every test client.
pub const TEST_API_KEY: &str = "test-api-key";

/// Path the mock lookup endpoint is mounted on.
pub const WHOIS_PATH: &str = "/whoisserver/WhoisService";

/// Request body the client must send for `domain`.
pub fn expected_request(domain: &str) -> Value {
    json!({
        "apiKey": TEST_API_KEY,
        "domainName": domain,
        "outputFormat": "JSON",
        "rdap": 0,
        "preferFresh": 1
    })
}

/// Starts a mock server that answers one lookup for `domain` with `status` and `body`.
///
/// The request body is matched exactly, and exactly one call is expected
/// (verified when the server is dropped).
#[allow(dead_code)] // Used by other test files
pub async fn mock_whois(domain: &str, status: u16, body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(WHOIS_PATH))
        .and(body_json(expected_request(domain)))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Starts a mock server that fails the test if it receives any request.
#[allow(dead_code)] // Used by other test files
pub async fn mock_whois_never_called() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    server
}

/// Full endpoint URL on the mock server.
pub fn endpoint_for(server: &MockServer) -> String {
    format!("{}{}", server.uri(), WHOIS_PATH)
}

/// Client pointed at the mock server.
#[allow(dead_code)] // Used by other test files
pub fn client_for(server: &MockServer) -> WhoisClient {
    WhoisClient::new(
        Arc::new(reqwest::Client::new()),
        endpoint_for(server),
        TEST_API_KEY,
    )
}

/// A WhoisXML-shaped response with organization only on the registry registrant.
#[allow(dead_code)] // Used by other test files
pub fn registry_only_org_body() -> Value {
    json!({
        "WhoisRecord": {
            "domainName": "example.com",
            "registrant": {"country": "UNITED STATES"},
            "estimatedDomainAge": 11000,
            "registryData": {
                "registrant": {"organization": "Example Corp"},
                "createdDate": "1995-08-14T04:00:00Z",
                "updatedDate": "2024-08-14T07:01:34Z",
                "expiresDate": "2025-08-13T04:00:00Z",
                "status": "clientDeleteProhibited clientTransferProhibited",
                "nameServers": {
                    "hostNames": ["ns1.example.com", "ns2.example.com"]
                },
                "rawText": "Domain Name: EXAMPLE.COM"
            }
        }
    })
}
