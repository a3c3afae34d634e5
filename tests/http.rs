use axum::body::{to_bytes, Body, Bytes};
use axum::Router;
use http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;
use user_input::backend::router::get_router;
use user_input::config::Config;

fn app() -> Router {
    get_router(&Config::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn post_validate(body: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(request).await
}

#[tokio::test]
async fn health_is_ok() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn valid_input_is_sanitized() {
    let (status, body) = post_validate(r#"{"name": "  Ada ", "email": "ADA@Example.com"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({"name": "Ada", "email": "ada@example.com"}));
}

#[tokio::test]
async fn every_violation_is_reported() {
    let (status, body) = post_validate(r#"{"name": "", "email": "bad"}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({
            "error": "Validation failed",
            "errors": [
                {"field": "name", "code": "missing_name", "message": "Name is required"},
                {"field": "email", "code": "invalid_email_format", "message": "Invalid email format"}
            ]
        })
    );
}

#[tokio::test]
async fn missing_fields_are_validation_errors() {
    let (status, body) = post_validate("{}").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn markup_only_name_is_rejected() {
    let (status, body) = post_validate(r#"{"name": "<b></b>", "email": "ada@example.com"}"#).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["errors"][0]["code"], "missing_name");
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn malformed_payloads_are_bad_requests() {
    let payloads = vec![
        "not json",
        r#"{"name": 5, "email": "ada@example.com"}"#,
        r#""Ada <ada@example.com>""#,
    ];

    for payload in payloads {
        let (status, body) = post_validate(payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "Payload: {}", payload);
        assert_eq!(body, b"Validation failed", "Payload: {}", payload);
    }
}

#[tokio::test]
async fn missing_content_type_is_a_bad_request() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/validate")
        .body(Body::from(r#"{"name": "Ada", "email": "ada@example.com"}"#))
        .unwrap();

    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn repeated_requests_get_identical_answers() {
    let payload = r#"{"name": "Ada", "email": "not-an-email"}"#;

    let first = post_validate(payload).await;
    let second = post_validate(payload).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn stalled_request_times_out() {
    let config = Config {
        request_timeout: Duration::from_millis(1),
        ..Default::default()
    };

    // The body never yields, so the handler waits until the timeout fires
    let stalled = futures::stream::pending::<Result<Bytes, std::io::Error>>();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/validate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from_stream(stalled))
        .unwrap();

    let response = get_router(&config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"Request timed out");
}

#[cfg(debug_assertions)]
#[tokio::test]
async fn preflight_allows_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/validate")
        .header(header::ORIGIN, "https://forms.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert!(response.status().is_success());

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}
