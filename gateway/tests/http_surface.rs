use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{Value, json};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use broker::{BrokerConfig, SessionBroker};
use gateway::{AppState, LIVENESS_MESSAGE, router};

fn server_against(sessions_url: String) -> TestServer {
    let mut config = BrokerConfig::with_api_key("sk-test-key").unwrap();
    config.sessions_url = sessions_url;
    let state = AppState {
        broker: Arc::new(SessionBroker::new(config)),
    };
    TestServer::new(router(state)).unwrap()
}

#[tokio::test]
async fn liveness_is_independent_of_upstream() {
    // No upstream at all; the root route must still answer.
    let server = server_against("http://127.0.0.1:9/unreachable".to_string());

    let res = server.get("/").await;
    assert_eq!(res.status_code().as_u16(), 200);
    let body: Value = res.json();
    assert_eq!(body, json!({"message": LIVENESS_MESSAGE}));
}

#[tokio::test]
async fn session_success_relays_raw_response_and_key() {
    let upstream = MockServer::start().await;
    let upstream_body = json!({
        "id": "sess_123",
        "voice": "alloy",
        "client_secret": {"value": "abc123", "expires_at": 1735689600}
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream_body.clone()))
        .mount(&upstream)
        .await;

    let server = server_against(upstream.uri());
    let res = server.post("/session").await;

    assert_eq!(res.status_code().as_u16(), 200);
    let body: Value = res.json();
    assert_eq!(body["ephemeral_key_value"], "abc123");
    assert_eq!(body["raw_openai_response"], upstream_body);
}

#[tokio::test]
async fn upstream_auth_failure_mirrors_status_in_detail() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"error": {"message": "invalid api key"}})),
        )
        .mount(&upstream)
        .await;

    let server = server_against(upstream.uri());
    let res = server.post("/session").await;

    assert_eq!(res.status_code().as_u16(), 401);
    let body: Value = res.json();
    assert!(
        body["detail"].as_str().unwrap().contains("invalid api key"),
        "detail was: {}",
        body["detail"]
    );
}

#[tokio::test]
async fn upstream_crash_with_plain_body_surfaces_raw_text() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server exploded"))
        .mount(&upstream)
        .await;

    let server = server_against(upstream.uri());
    let res = server.post("/session").await;

    assert_eq!(res.status_code().as_u16(), 500);
    let body: Value = res.json();
    assert!(body["detail"].as_str().unwrap().contains("server exploded"));
}

#[tokio::test]
async fn missing_credential_field_is_internal_error() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "sess_123"})))
        .mount(&upstream)
        .await;

    let server = server_against(upstream.uri());
    let res = server.post("/session").await;

    assert_eq!(res.status_code().as_u16(), 500);
    let body: Value = res.json();
    assert_eq!(
        body["detail"],
        "Ephemeral key not found in 'client_secret.value' in OpenAI's response."
    );
}

#[tokio::test]
async fn unconfigured_key_is_internal_error_without_upstream_call() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let mut config = BrokerConfig::with_api_key("sk-test-key").unwrap();
    config.api_key = String::new();
    config.sessions_url = upstream.uri();
    let state = AppState {
        broker: Arc::new(SessionBroker::new(config)),
    };
    let server = TestServer::new(router(state)).unwrap();

    let res = server.post("/session").await;
    assert_eq!(res.status_code().as_u16(), 500);
    let body: Value = res.json();
    assert_eq!(body["detail"], "OpenAI API Key not configured on the server.");
}
