//! Integration tests for the HTTP surface.
//!
//! Drives the full router (middleware included) with `oneshot` requests.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use payments_hex::{PaymentProcessor, inbound::HttpServer};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> axum::Router {
    HttpServer::new(PaymentProcessor::new()).router()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_healthz_returns_ok() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_echo_wraps_payload() {
    let payload = json!({ "hello": "world", "nested": { "n": [1, 2, 3] } });

    let response = app()
        .oneshot(post_json("/api/v1/payments/echo", &payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "received": payload }));
}

#[tokio::test]
async fn test_echo_accepts_empty_object() {
    let response = app()
        .oneshot(post_json("/api/v1/payments/echo", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "received": {} }));
}

#[tokio::test]
async fn test_echo_rejects_non_object() {
    let response = app()
        .oneshot(post_json("/api/v1/payments/echo", "[1, 2, 3]"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_echo_returns_payload_verbatim() {
    let payload = r#"{"z":1,"a":12345678901234567890123,"m":0.1000000000000000055511151231257827}"#;

    let response = app()
        .oneshot(post_json("/api/v1/payments/echo", payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        format!(r#"{{"received":{}}}"#, payload)
    );
}

#[tokio::test]
async fn test_malformed_body_is_json_bad_request() {
    for uri in ["/api/v1/payments", "/api/v1/payments/echo"] {
        let response = app().oneshot(post_json(uri, "{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{}", uri);
        let json = body_json(response).await;
        assert_eq!(json["code"], 400);
        assert!(!json["error"].as_str().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_payment_accepted() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/payments",
            r#"{"payerId":"alice","payeeId":"bob","amount":10.00,"currency":"USD"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ACCEPTED");
    let reference = json["reference"].as_str().unwrap();
    assert!(reference.starts_with("REF-"));
    assert!(reference.len() > "REF-".len());
}

#[tokio::test]
async fn test_payment_empty_payer_is_bad_request() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/payments",
            r#"{"payerId":"","payeeId":"bob","amount":10.00,"currency":"USD"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "payerId is required", "code": 400 })
    );
}

#[tokio::test]
async fn test_payment_zero_amount_is_bad_request() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/payments",
            r#"{"payerId":"alice","payeeId":"bob","amount":0,"currency":"USD"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "amount must be > 0");
}

#[tokio::test]
async fn test_payment_missing_currency_is_bad_request() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/payments",
            r#"{"payerId":"alice","payeeId":"bob","amount":"5.25"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "currency is required");
}

#[tokio::test]
async fn test_payment_many_digit_amount_accepted() {
    for amount in ["1234567890.123456789", "0.0000000000000000000000000001"] {
        let body = format!(
            r#"{{"payerId":"alice","payeeId":"bob","amount":{},"currency":"USD"}}"#,
            amount
        );
        let response = app()
            .oneshot(post_json("/api/v1/payments", &body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "amount {}", amount);
        assert_eq!(body_json(response).await["status"], "ACCEPTED");
    }
}

#[tokio::test]
async fn test_payment_unrepresentable_amount_is_bad_request() {
    let response = app()
        .oneshot(post_json(
            "/api/v1/payments",
            r#"{"payerId":"alice","payeeId":"bob","amount":1e-30,"currency":"USD"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("exactly representable"), "{}", error);
    assert_ne!(error, "amount must be > 0");
}

#[tokio::test]
async fn test_identical_payments_get_distinct_references() {
    let app = app();
    let body = r#"{"payerId":"alice","payeeId":"bob","amount":1,"currency":"EUR"}"#;

    let first = body_json(
        app.clone()
            .oneshot(post_json("/api/v1/payments", body))
            .await
            .unwrap(),
    )
    .await;
    let second = body_json(
        app.clone()
            .oneshot(post_json("/api/v1/payments", body))
            .await
            .unwrap(),
    )
    .await;

    assert_ne!(first["reference"], second["reference"]);
}

#[tokio::test]
async fn test_openapi_document_served() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"].get("/api/v1/payments").is_some());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
