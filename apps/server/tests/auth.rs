mod common;

use axum::http::Method;
use common::{body_json, build_test_app, send, token_for};
use tempfile::tempdir;

#[tokio::test]
async fn protected_routes_require_a_bearer_token() {
    let tmp = tempdir().unwrap();
    let (app, _state) = build_test_app(&tmp).await;

    let response = send(&app, Method::GET, "/api/investments", None, None).await;
    assert_eq!(response.status(), 401);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn garbage_tokens_are_rejected() {
    let tmp = tempdir().unwrap();
    let (app, _state) = build_test_app(&tmp).await;

    let response = send(
        &app,
        Method::GET,
        "/api/investments",
        Some("not-a-real-token"),
        None,
    )
    .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn tokens_signed_with_another_secret_are_rejected() {
    let tmp = tempdir().unwrap();
    let (app, _state) = build_test_app(&tmp).await;

    #[derive(serde::Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        exp: usize,
    }
    let forged = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &Claims {
            sub: "user-1",
            exp: 4_000_000_000,
        },
        &jsonwebtoken::EncodingKey::from_secret(b"someone-elses-secret"),
    )
    .unwrap();

    let response = send(&app, Method::GET, "/api/investments", Some(&forged), None).await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn valid_token_grants_access() {
    let tmp = tempdir().unwrap();
    let (app, _state) = build_test_app(&tmp).await;

    let token = token_for("user-1");
    let response = send(&app, Method::GET, "/api/investments", Some(&token), None).await;
    assert_eq!(response.status(), 200);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn symbol_lookup_is_public() {
    let tmp = tempdir().unwrap();
    let (app, _state) = build_test_app(&tmp).await;

    let response = send(&app, Method::GET, "/api/symbols?q=tata", None, None).await;
    assert_eq!(response.status(), 200);
}
