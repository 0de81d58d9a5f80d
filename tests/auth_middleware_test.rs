//! Integration tests for the API key middleware.
//!
//! Drives the full router through `oneshot` requests and checks status codes
//! and JSON bodies for each Authorization header shape.

use api_key_service::app;
use axum::{
    body::Body,
    http::{Request, StatusCode, header::AUTHORIZATION},
    response::Response,
};
use serde_json::Value;
use tower::ServiceExt;

async fn whoami(auth: Option<&str>) -> Response {
    let mut builder = Request::builder().uri("/api/v1/whoami");
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }
    let request = builder.body(Body::empty()).expect("request build");

    app().oneshot(request).await.expect("request execution")
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body extraction");
    serde_json::from_slice(&body).expect("json deserialization")
}

#[tokio::test]
async fn health_needs_no_key() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("request build");

    let response = app().oneshot(request).await.expect("request execution");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn missing_header_is_unauthorized() {
    let response = whoami(None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "no_auth_header");
    assert_eq!(body["error"]["message"], "no authorization header included");
}

#[tokio::test]
async fn empty_header_is_unauthorized() {
    let response = whoami(Some("")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_scheme_is_bad_request() {
    let response = whoami(Some("Bearer sometoken")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "malformed_auth_header");
    assert_eq!(body["error"]["message"], "malformed authorization header");
}

#[tokio::test]
async fn scheme_without_key_is_bad_request() {
    let response = whoami(Some("ApiKey")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn whitespace_only_header_is_bad_request() {
    let response = whoami(Some("   ")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "malformed_auth_header");
}

#[tokio::test]
async fn valid_key_reaches_handler() {
    let response = whoami(Some("ApiKey abc")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["scheme"], "ApiKey");
    // sha256("abc")
    assert_eq!(
        body["key_fingerprint"],
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[tokio::test]
async fn spacing_and_trailing_tokens_do_not_change_key() {
    let plain = body_json(whoami(Some("ApiKey key1")).await).await;
    let spaced = body_json(whoami(Some("ApiKey    key1")).await).await;
    let trailing = body_json(whoami(Some("ApiKey key1 key2")).await).await;

    assert_eq!(plain["key_fingerprint"], spaced["key_fingerprint"]);
    assert_eq!(plain["key_fingerprint"], trailing["key_fingerprint"]);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/api/v1/missing")
        .header(AUTHORIZATION, "ApiKey abc")
        .body(Body::empty())
        .expect("request build");

    let response = app().oneshot(request).await.expect("request execution");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
