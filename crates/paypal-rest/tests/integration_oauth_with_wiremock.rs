//! Integration tests for the OAuth token endpoint using wiremock

mod common;

use assert_matches::assert_matches;
use paypal_rest::{Client, Error};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn request_access_token_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        // base64("test-client-id:test-client-secret")
        .and(header(
            "authorization",
            "Basic dGVzdC1jbGllbnQtaWQ6dGVzdC1jbGllbnQtc2VjcmV0",
        ))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"scope":"openid","access_token":"A21AAF","token_type":"Bearer","app_id":"APP-80W2","expires_in":32400}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let token = client
        .oauth()
        .request_access_token()
        .await
        .expect("Token request failed");

    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.bearer_token(), "A21AAF");
    assert_eq!(token.expires_in, 32400);

    mock_server.verify().await;
}

#[tokio::test]
async fn identity_error_body_becomes_identity_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"error":"invalid_client","error_description":"Client Authentication failed","error_uri":"https://developer.paypal.com/docs/api/#identity"}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let error = client.oauth().request_access_token().await.unwrap_err();

    match &error {
        Error::Identity { details, failure } => {
            assert_eq!(details.error, "invalid_client");
            assert_eq!(
                details.error_description.as_deref(),
                Some("Client Authentication failed")
            );
            assert_eq!(failure.status.as_u16(), 401);
        }
        other => panic!("expected Identity error, got {other:?}"),
    }
    assert_eq!(error.error_name(), Some("invalid_client"));
    assert_eq!(
        error.help_link(),
        Some("https://developer.paypal.com/docs/api/#identity")
    );
}

#[tokio::test]
async fn non_identity_failure_body_stays_generic() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = common::test_client(&mock_server.uri());
    let error = client.oauth().request_access_token().await.unwrap_err();

    assert_matches!(error, Error::Http(_));
    assert!(error.is_retry_eligible());
}

#[tokio::test]
async fn missing_credentials_fail_before_any_network_call() {
    let mock_server = MockServer::start().await;

    // No mock mounted: a request reaching the server would 404, but the
    // call must fail on configuration before sending anything.
    let client = Client::builder()
        .endpoint(mock_server.uri())
        .build()
        .unwrap();

    let error = client.oauth().request_access_token().await.unwrap_err();
    assert_matches!(error, Error::MissingConfig(ref key) if key == "client_id");

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}
