// tests/support/helpers.rs
use super::mocks::InMemoryParticipants;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use axum::response::Response;
use loteria_api::application::{
    dto::{Capability, TokenSubject},
    ports::security::TokenManager,
    services::ApplicationServices,
};
use loteria_api::domain::participant::{
    CardNumber, Participant, ParticipantId, ParticipantName, ParticipantReadRepository,
    ParticipantWriteRepository, PhoneNumber, RaffleId,
};
use loteria_api::infrastructure::security::token::JwtTokenManager;
use loteria_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

pub fn token_manager() -> JwtTokenManager {
    JwtTokenManager::new(TEST_SECRET, Duration::from_secs(600)).expect("token manager")
}

/// Bearer token carrying `participants:manage`.
pub async fn admin_token() -> String {
    token_manager()
        .issue(
            TokenSubject::new("admin@loteria.test")
                .with_capability(Capability::new("participants", "manage")),
        )
        .await
        .expect("issue admin token")
        .token
}

/// Valid bearer token without any capability.
pub async fn visitor_token() -> String {
    token_manager()
        .issue(TokenSubject::new("visitor@loteria.test"))
        .await
        .expect("issue visitor token")
        .token
}

pub fn participant(id: i32, name: &str, raffle: i32, card: Option<i32>) -> Participant {
    Participant {
        id: ParticipantId::new(id).unwrap(),
        name: ParticipantName::new(name).unwrap(),
        phone: Some(PhoneNumber::new("555-0101").unwrap()),
        raffle_id: RaffleId::new(raffle).unwrap(),
        card_number: card.map(|c| CardNumber::new(c).unwrap()),
    }
}

pub fn seeded_store() -> Arc<InMemoryParticipants> {
    Arc::new(InMemoryParticipants::seeded(vec![
        participant(1, "Rosa", 10, Some(7)),
        participant(2, "Chuy", 11, None),
    ]))
}

pub fn build_services(
    read: Arc<dyn ParticipantReadRepository>,
    write: Arc<dyn ParticipantWriteRepository>,
) -> Arc<ApplicationServices> {
    let token_manager: Arc<dyn TokenManager> = Arc::new(token_manager());
    Arc::new(ApplicationServices::new(read, write, token_manager))
}

pub fn make_router_with_store(store: Arc<InMemoryParticipants>) -> axum::Router {
    let read: Arc<dyn ParticipantReadRepository> = store.clone();
    let write: Arc<dyn ParticipantWriteRepository> = store;
    build_router(HttpState {
        services: build_services(read, write),
    })
}

/// Router over a fresh seeded store, returned together with that store.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryParticipants>) {
    let store = seeded_store();
    (make_router_with_store(Arc::clone(&store)), store)
}

pub fn request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    content_type: &str,
    body: &Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
