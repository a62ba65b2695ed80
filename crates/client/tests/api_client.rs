//! Integration tests for the API client against a mock backend.
//!
//! These exercise the real request path (URLs, bearer header, body shapes,
//! error mapping) with a wiremock HTTP server instead of the actual backend.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use mandazap_client::ApiClient;
use mandazap_shared::{ApiError, InstanceStatus};

fn user_json() -> serde_json::Value {
    json!({
        "id": "user-1",
        "email": "ana@mandazap.dev",
        "name": "Ana Souza",
        "provider": "local",
        "createdAt": "2026-01-10T12:00:00.000Z",
        "updatedAt": "2026-01-10T12:00:00.000Z"
    })
}

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "ana@mandazap.dev",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_json(),
            "access_token": "jwt-abc"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new().with_base_url(server.uri());
    let response = client.login("ana@mandazap.dev", "secret123").await.unwrap();

    assert_eq!(response.access_token, "jwt-abc");
    assert_eq!(response.user.name, "Ana Souza");
}

#[tokio::test]
async fn authenticated_requests_carry_the_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/whatsapp/instances"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "inst-1",
            "name": "Vendas",
            "status": "disconnected",
            "userId": "user-1",
            "createdAt": "2026-01-10T12:00:00.000Z",
            "updatedAt": "2026-01-10T12:00:00.000Z"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new()
        .with_base_url(server.uri())
        .with_bearer_token(Some("jwt-abc".to_string()));

    let instances = client.list_instances().await.unwrap();
    assert_eq!(instances.len(), 1);
    assert_eq!(instances[0].status, InstanceStatus::Disconnected);
}

#[tokio::test]
async fn unauthorized_is_surfaced_with_the_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "statusCode": 401,
            "message": "Unauthorized"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new()
        .with_base_url(server.uri())
        .with_bearer_token(Some("expired".to_string()));

    let err = client.profile().await.unwrap_err();
    assert!(err.is_unauthorized(), "expected a 401, got {err:?}");
}

#[tokio::test]
async fn connect_posts_without_a_body_and_reads_the_ack() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/whatsapp/instances/inst-1/connect"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new()
        .with_base_url(server.uri())
        .with_bearer_token(Some("jwt-abc".to_string()));

    let ack = client.connect_instance("inst-1").await.unwrap();
    assert!(ack.success);
}

#[tokio::test]
async fn send_message_posts_recipient_and_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/whatsapp/instances/inst-1/send-message"))
        .and(body_json(json!({
            "to": "5511987654321",
            "message": "oi, tudo bem?"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "row-9",
            "messageId": "wa-9",
            "fromMe": true,
            "text": "oi, tudo bem?",
            "type": "text",
            "timestamp": "2026-01-10T15:30:00.000Z",
            "contactId": "contact-1",
            "instanceId": "inst-1",
            "contact": {
                "id": "contact-1",
                "jid": "5511987654321@s.whatsapp.net",
                "name": "Ana",
                "number": "5511987654321",
                "instanceId": "inst-1",
                "createdAt": "2026-01-10T12:00:00.000Z",
                "updatedAt": "2026-01-10T12:00:00.000Z"
            },
            "createdAt": "2026-01-10T15:30:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new()
        .with_base_url(server.uri())
        .with_bearer_token(Some("jwt-abc".to_string()));

    let sent = client
        .send_message("inst-1", "5511987654321", "oi, tudo bem?")
        .await
        .unwrap();

    assert!(sent.from_me);
    assert_eq!(sent.message_id, "wa-9");
}

#[tokio::test]
async fn error_bodies_keep_their_message_for_display() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/whatsapp/instances"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "statusCode": 400,
            "message": "name must be unique",
            "error": "Bad Request"
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new()
        .with_base_url(server.uri())
        .with_bearer_token(Some("jwt-abc".to_string()));

    match client.create_instance("Vendas").await.unwrap_err() {
        ApiError::Http { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(
                mandazap_shared::try_error_message(&body).as_deref(),
                Some("name must be unique")
            );
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}
