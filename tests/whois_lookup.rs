//! Integration tests for the WHOIS client against a mock lookup endpoint.

mod helpers;

use std::time::Duration;

use email_domain_check::{
    check_domain_whois, Config, ErrorType, Language, WhoisClient, WhoisError, WhoisLookup,
};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{client_for, endpoint_for, mock_whois, registry_only_org_body, TEST_API_KEY};

#[tokio::test]
async fn test_lookup_sends_fixed_payload_and_resolves_fallbacks() {
    let server = mock_whois("example.com", 200, registry_only_org_body()).await;
    let client = client_for(&server);

    let lookup = client.lookup("example.com").await.expect("lookup should succeed");
    let WhoisLookup::Found(report) = lookup else {
        panic!("expected a found record");
    };

    assert_eq!(report.organization.as_deref(), Some("Example Corp"));
    assert_eq!(report.country.as_deref(), Some("UNITED STATES"));
    assert_eq!(report.created_date.as_deref(), Some("1995-08-14T04:00:00Z"));
    assert_eq!(
        report.status.as_deref(),
        Some("clientDeleteProhibited clientTransferProhibited")
    );
    assert_eq!(report.name_servers, vec!["ns1.example.com", "ns2.example.com"]);
    assert_eq!(report.estimated_domain_age, Some(11000));
    assert_eq!(report.raw_text.as_deref(), Some("Domain Name: EXAMPLE.COM"));
}

#[tokio::test]
async fn test_check_returns_true_for_registry_organization() {
    let server = mock_whois("example.com", 200, registry_only_org_body()).await;
    let client = client_for(&server);

    let mut out = Vec::new();
    let trusted = check_domain_whois(&client, "example.com", Language::En, &mut out)
        .await
        .expect("check should succeed");
    let text = String::from_utf8(out).unwrap();

    assert!(trusted);
    assert!(text.contains("🏢 Registrant organization: Example Corp"));
    assert!(text.contains("🧑‍💻 Name servers: ns1.example.com, ns2.example.com"));
    assert!(!text.contains("Domain Name: EXAMPLE.COM"), "raw text is not printed");
}

#[tokio::test]
async fn test_check_joins_plain_name_server_list() {
    let body = json!({
        "WhoisRecord": {"registryData": {"nameServers": ["ns3.example.com"]}}
    });
    let server = mock_whois("example.net", 200, body).await;
    let client = client_for(&server);

    let mut out = Vec::new();
    let trusted = check_domain_whois(&client, "example.net", Language::En, &mut out)
        .await
        .expect("check should succeed");
    let text = String::from_utf8(out).unwrap();

    assert!(!trusted, "no organization means no trust");
    assert!(text.contains("🧑‍💻 Name servers: ns3.example.com\n"));
    assert!(text.contains("🏢 Registrant organization: unknown"));
}

#[tokio::test]
async fn test_check_untrusted_when_only_other_fields_present() {
    let body = json!({
        "WhoisRecord": {
            "registrant": {"country": "JP"},
            "createdDate": "2001-01-01",
            "status": "active",
            "estimatedDomainAge": 8000
        }
    });
    let server = mock_whois("example.jp", 200, body).await;
    let client = client_for(&server);

    let trusted = check_domain_whois(&client, "example.jp", Language::Ja, &mut Vec::new())
        .await
        .expect("check should succeed");
    assert!(!trusted);
}

#[tokio::test]
async fn test_lookup_http_404_is_a_failure_outcome() {
    let body = json!({"code": 404, "messages": "Domain not found"});
    let server = mock_whois("missing.example", 404, body.clone()).await;
    let client = client_for(&server);

    let lookup = client
        .lookup("missing.example")
        .await
        .expect("status is not an error");
    assert_eq!(
        lookup,
        WhoisLookup::HttpFailure {
            status: 404,
            body: body.to_string(),
        }
    );
    assert!(!lookup.is_trusted());
}

#[tokio::test]
async fn test_check_http_404_prints_status_and_body() {
    let body = json!({"code": 404, "messages": "Domain not found"});
    let server = mock_whois("missing.example", 404, body).await;
    let client = client_for(&server);

    let mut out = Vec::new();
    let trusted = check_domain_whois(&client, "missing.example", Language::En, &mut out)
        .await
        .expect("HTTP failures are reported, not raised");
    let text = String::from_utf8(out).unwrap();

    assert!(!trusted);
    assert!(text.contains("❌ WHOIS lookup failed: HTTP 404"));
    assert!(text.contains("Domain not found"));
    assert!(!text.contains("Registrant organization"), "no report on failure");
}

#[tokio::test]
async fn test_check_http_failure_returns_false() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let mut out = Vec::new();
    let trusted = check_domain_whois(&client, "example.com", Language::Ja, &mut out)
        .await
        .expect("HTTP failures are reported, not raised");
    let text = String::from_utf8(out).unwrap();

    assert!(!trusted);
    assert!(text.contains("❌ WHOIS検索失敗: HTTP 503"));
    assert!(text.contains("Service Unavailable"));
}

#[tokio::test]
async fn test_non_json_body_is_an_error_not_false() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client
        .lookup("example.com")
        .await
        .expect_err("HTML is not a WHOIS response");
    assert!(matches!(err, WhoisError::Decode(_)));
    assert_eq!(err.error_type(), ErrorType::WhoisResponseDecodeError);

    let err = check_domain_whois(&client, "example.com", Language::En, &mut Vec::new())
        .await
        .expect_err("decode failures propagate");
    assert!(err.downcast_ref::<WhoisError>().is_some());
}

#[tokio::test]
async fn test_service_error_message_yields_empty_report() {
    let body = json!({
        "ErrorMessage": {"errorCode": "WHOIS_01", "msg": "API key is wrong"}
    });
    let server = mock_whois("example.com", 200, body).await;
    let client = client_for(&server);

    let lookup = client.lookup("example.com").await.expect("lookup should succeed");
    assert!(!lookup.is_trusted());
}

#[tokio::test]
async fn test_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        api_key: TEST_API_KEY.to_string(),
        endpoint: endpoint_for(&server),
        timeout_seconds: 1,
        ..Default::default()
    };
    let client = WhoisClient::from_config(&config).expect("client should build");

    let err = client
        .lookup("slow.example")
        .await
        .expect_err("request should time out");
    assert!(matches!(err, WhoisError::Transport { .. }));
    assert_eq!(err.error_type(), ErrorType::HttpRequestTimeoutError);
}

#[tokio::test]
async fn test_unreachable_endpoint_surfaces_as_connect_error() {
    let client = WhoisClient::new(
        std::sync::Arc::new(reqwest::Client::new()),
        "http://127.0.0.1:9/whoisserver/WhoisService",
        TEST_API_KEY,
    );

    let err = client
        .lookup("example.com")
        .await
        .expect_err("nothing listens on the discard port");
    assert_eq!(err.error_type(), ErrorType::HttpRequestConnectError);
}
