#![cfg(feature = "ssr")]

use cyberdev_portfolio::contact::{router, ApiError, ContactReply, CONTACT_ENDPOINT, SUCCESS_MESSAGE};
use serde_json::json;

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
async fn spawn_test_server() -> String {
    let app = router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

async fn post_contact(base: &str, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{base}{CONTACT_ENDPOINT}"))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn complete_submission_succeeds() {
    let base = spawn_test_server().await;
    let resp = post_contact(
        &base,
        json!({
            "name": "Trinity",
            "email": "trinity@nebuchadnezzar.io",
            "message": "There is no spoon"
        }),
    )
    .await;

    assert_eq!(resp.status(), 200);
    let body: ContactReply = resp.json().await.unwrap();
    assert!(body.success);
    assert_eq!(body.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn blank_fields_are_rejected() {
    let base = spawn_test_server().await;
    let resp = post_contact(
        &base,
        json!({ "name": "", "email": "trinity@nebuchadnezzar.io", "message": "hi" }),
    )
    .await;

    assert_eq!(resp.status(), 400);
    let body: ApiError = resp.json().await.unwrap();
    assert_eq!(body.error, "All fields are required");
}

#[tokio::test]
async fn absent_fields_are_rejected_like_blank_ones() {
    let base = spawn_test_server().await;
    let resp = post_contact(&base, json!({ "name": "Trinity" })).await;

    assert_eq!(resp.status(), 400);
    let body: ApiError = resp.json().await.unwrap();
    assert_eq!(body.error, "All fields are required");
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let base = spawn_test_server().await;
    let resp = post_contact(
        &base,
        json!({ "name": "Trinity", "email": "not-an-email", "message": "hi" }),
    )
    .await;

    assert_eq!(resp.status(), 400);
    let body: ApiError = resp.json().await.unwrap();
    assert_eq!(body.error, "Invalid email format");
}

#[tokio::test]
async fn garbled_body_is_a_client_error() {
    let base = spawn_test_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{base}{CONTACT_ENDPOINT}"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_client_error(), "{}", resp.status());
}

#[tokio::test]
async fn endpoint_is_stateless_across_submissions() {
    let base = spawn_test_server().await;
    for _ in 0..2 {
        let resp = post_contact(
            &base,
            json!({
                "name": "Trinity",
                "email": "trinity@nebuchadnezzar.io",
                "message": "again"
            }),
        )
        .await;
        assert_eq!(resp.status(), 200);
    }
}

#[tokio::test]
async fn unknown_routes_are_not_found() {
    let base = spawn_test_server().await;
    let resp = reqwest::get(format!("{base}/api/unknown")).await.unwrap();
    assert_eq!(resp.status(), 404);
}
