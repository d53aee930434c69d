// Integration tests for `ApiClient` using wiremock.
#![allow(clippy::unwrap_used)]

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use savor_api::models::{SendMessagePayload, VoucherPayload};
use savor_api::transport::TransportConfig;
use savor_api::{ApiClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base = server.uri().parse().unwrap();
    let client = ApiClient::new(base, &TransportConfig::default()).unwrap();
    (server, client)
}

fn envelope(data: serde_json::Value) -> serde_json::Value {
    json!({ "success": true, "message": null, "data": data })
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_vouchers_unwraps_envelope() {
    let (server, client) = setup().await;

    let body = envelope(json!([
        {
            "_id": "64a1",
            "code": "WELCOME10",
            "description": "10% off your first order",
            "discount_type": "percentage",
            "discount_value": 10.0,
            "min_order_amount": 50000.0,
            "max_discount_amount": 20000.0,
            "start_date": "2025-01-01",
            "end_date": "2025-12-31",
            "usage_limit": 100,
            "used_count": 7,
            "restaurant_id": "r1"
        },
        {
            "_id": "64a2",
            "code": "FLAT5K",
            "discount_type": "fixed",
            "discount_value": 5000.0,
            "start_date": "2025-01-01",
            "end_date": "2025-06-30"
        },
    ]));

    Mock::given(method("GET"))
        .and(path("/api/vouchers/restaurant/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let vouchers = client.list_vouchers("r1").await.unwrap();

    assert_eq!(vouchers.len(), 2);
    assert_eq!(vouchers[0].id, "64a1");
    assert_eq!(vouchers[0].code, "WELCOME10");
    assert_eq!(vouchers[0].used_count, 7);
    // Absent optional fields fall back to defaults.
    assert_eq!(vouchers[1].description, None);
    assert_eq!(vouchers[1].used_count, 0);
    assert_eq!(vouchers[1].usage_limit, None);
}

#[tokio::test]
async fn test_create_voucher_posts_payload() {
    let (server, client) = setup().await;

    let payload = VoucherPayload {
        code: "SUMMER20".into(),
        description: "20% off in July".into(),
        discount_type: "percentage".into(),
        discount_value: 20.0,
        min_order_amount: 100_000.0,
        max_discount_amount: Some(25_000.0),
        start_date: "2025-07-01".into(),
        end_date: "2025-07-31".into(),
        usage_limit: Some(50),
        restaurant_id: "r1".into(),
    };

    let created = envelope(json!({
        "_id": "64b7",
        "code": "SUMMER20",
        "description": "20% off in July",
        "discount_type": "percentage",
        "discount_value": 20.0,
        "min_order_amount": 100000.0,
        "max_discount_amount": 25000.0,
        "start_date": "2025-07-01",
        "end_date": "2025-07-31",
        "usage_limit": 50,
        "used_count": 0,
        "restaurant_id": "r1"
    }));

    Mock::given(method("POST"))
        .and(path("/api/vouchers"))
        .and(body_json(&payload))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .mount(&server)
        .await;

    let voucher = client.create_voucher(&payload).await.unwrap();
    assert_eq!(voucher.id, "64b7");
    assert_eq!(voucher.used_count, 0);
}

#[tokio::test]
async fn test_delete_voucher() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/api/vouchers/64a1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "success": true, "message": "deleted", "data": null })),
        )
        .mount(&server)
        .await;

    client.delete_voucher("64a1").await.unwrap();
}

#[tokio::test]
async fn test_revenue_period_query() {
    let (server, client) = setup().await;

    let body = envelope(json!([
        { "label": "2025-06", "revenue": 1200000.0, "order_count": 41 },
        { "label": "2025-07", "revenue": 1850000.0, "order_count": 58 },
    ]));

    Mock::given(method("GET"))
        .and(path("/api/revenue/r1"))
        .and(query_param("period", "monthly"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let points = client.revenue("r1", "monthly").await.unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1].label, "2025-07");
    assert_eq!(points[1].order_count, 58);
}

#[tokio::test]
async fn test_send_message() {
    let (server, client) = setup().await;

    let body = envelope(json!({
        "_id": "m9",
        "conversation_id": "c3",
        "sender_role": "restaurant",
        "text": "Your order is on its way",
        "sent_at": "2025-08-01T10:00:00Z"
    }));

    Mock::given(method("POST"))
        .and(path("/api/chat/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let payload = SendMessagePayload {
        conversation_id: "c3".into(),
        sender_role: "restaurant".into(),
        text: "Your order is on its way".into(),
    };
    let msg = client.send_message(&payload).await.unwrap();
    assert_eq!(msg.id, "m9");
    assert_eq!(msg.sender_role.as_deref(), Some("restaurant"));
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let (server, client) = setup().await;

    let body = envelope(json!({
        "token": "jwt-token",
        "user": { "_id": "u1", "name": "Mario", "role": "restaurant", "restaurant_id": "r1" }
    }));

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let login = client
        .login("mario@example.com", &SecretString::from("hunter2"))
        .await
        .unwrap();

    assert_eq!(login.token, "jwt-token");
    assert_eq!(login.user.id, "u1");
    assert_eq!(login.user.role.as_deref(), Some("restaurant"));
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_bad_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let result = client
        .login("mario@example.com", &SecretString::from("wrong"))
        .await;

    match result {
        Err(Error::Authentication { ref message }) => {
            assert_eq!(message, "Invalid email or password");
        }
        other => panic!("expected Authentication error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_expired_session_maps_to_session_expired() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = client.list_vouchers("r1").await;
    assert!(
        matches!(result, Err(Error::SessionExpired)),
        "expected SessionExpired, got: {result:?}"
    );
}

#[tokio::test]
async fn test_rejected_envelope_maps_to_api_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/vouchers"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Voucher code already exists"
        })))
        .mount(&server)
        .await;

    let payload = VoucherPayload {
        code: "DUP".into(),
        description: "duplicate".into(),
        discount_type: "fixed".into(),
        discount_value: 1000.0,
        min_order_amount: 1000.0,
        max_discount_amount: None,
        start_date: "2025-01-01".into(),
        end_date: "2025-01-31".into(),
        usage_limit: None,
        restaurant_id: "r1".into(),
    };

    match client.create_voucher(&payload).await {
        Err(Error::Api {
            ref message,
            status,
        }) => {
            assert_eq!(message, "Voucher code already exists");
            assert_eq!(status, 400);
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_keeps_raw_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    match client.list_vouchers("r1").await {
        Err(Error::Deserialization { ref body, .. }) => {
            assert!(body.contains("gateway"));
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
