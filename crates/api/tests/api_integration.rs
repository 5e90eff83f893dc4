//! API integration tests.
//!
//! These tests drive the full router over an in-memory store.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use socialgraph_api::{AppState, middleware::layered, router as api_router};
use socialgraph_core::{GraphPolicy, MemoryRelationStore};
use tower::ServiceExt;

fn create_test_app_with_policy(policy: GraphPolicy) -> Router {
    let state = AppState::new(Arc::new(MemoryRelationStore::new()), policy);
    layered(api_router().with_state(state))
}

fn create_test_app() -> Router {
    create_test_app_with_policy(GraphPolicy::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, json)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

async fn befriend(app: &Router, a: &str, b: &str) {
    let (status, _) = post(app, "/add-friends", json!({ "friends": [a, b] })).await;
    assert_eq!(status, StatusCode::CREATED, "befriend {a} {b}");
}

#[tokio::test]
async fn test_add_friends_and_list() {
    let app = create_test_app();

    let (status, body) = post(
        &app,
        "/add-friends",
        json!({ "friends": ["andy@example.com", "john@example.com"] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = post(
        &app,
        "/get-list-friends",
        json!({ "email": "john@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "friends": ["andy@example.com"], "count": 1 })
    );
}

#[tokio::test]
async fn test_add_friends_twice_fails_in_either_order() {
    let app = create_test_app();
    befriend(&app, "andy@example.com", "john@example.com").await;

    for [a, b] in [
        ["andy@example.com", "john@example.com"],
        ["john@example.com", "andy@example.com"],
    ] {
        let (status, body) = post(&app, "/add-friends", json!({ "friends": [a, b] })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": format!("{a} and {b} are already friends") })
        );
    }
}

#[tokio::test]
async fn test_add_friends_rejects_bad_requests() {
    let app = create_test_app();

    let cases = [
        (json!({ "friends": ["andy@example.com"] }), "request invalid"),
        (
            json!({ "friends": ["andy@example.com", "andy@example.com"] }),
            "request invalid",
        ),
        (
            json!({ "friends": ["andy", "john@example.com"] }),
            "email invalid format",
        ),
        (json!({ "friend": [] }), "invalid request body"),
    ];

    for (request, message) in cases {
        let (status, body) = post(&app, "/add-friends", request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{message}");
        assert_eq!(body, json!({ "error": message }));
    }
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = create_test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/get-list-friends")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "error": "invalid request body" }));
}

#[tokio::test]
async fn test_unknown_user_has_no_friends() {
    let app = create_test_app();

    let (status, body) = post(
        &app,
        "/get-list-friends",
        json!({ "email": "ghost@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "friends": [], "count": 0 }));
}

#[tokio::test]
async fn test_mutual_friends() {
    let app = create_test_app();
    befriend(&app, "andy@example.com", "common@example.com").await;
    befriend(&app, "john@example.com", "common@example.com").await;
    befriend(&app, "andy@example.com", "lisa@example.com").await;

    let (status, body) = post(
        &app,
        "/get-mutual-list-friends",
        json!({ "friends": ["andy@example.com", "john@example.com"] }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "friends": ["common@example.com"], "count": 1 })
    );
}

#[tokio::test]
async fn test_subscribe_is_idempotent() {
    let app = create_test_app();
    let body = json!({ "requestor": "lisa@example.com", "target": "john@example.com" });

    let (status, _) = post(&app, "/subscribe", body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = post(&app, "/subscribe", body).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = post(
        &app,
        "/get-list-users-receive-update",
        json!({ "sender": "john@example.com", "text": "Hello World" }),
    )
    .await;
    assert_eq!(body["recipients"], json!(["lisa@example.com"]));
}

#[tokio::test]
async fn test_block_prevents_friendship_and_subscription() {
    let app = create_test_app();

    let (status, body) = post(
        &app,
        "/block",
        json!({ "requestor": "andy@example.com", "target": "john@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "success": true }));

    let (status, _) = post(
        &app,
        "/add-friends",
        json!({ "friends": ["andy@example.com", "john@example.com"] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post(
        &app,
        "/subscribe",
        json!({ "requestor": "john@example.com", "target": "andy@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_self_block_and_self_subscribe_are_rejected() {
    let app = create_test_app();
    let request = json!({ "requestor": "andy@example.com", "target": "andy@example.com" });

    for uri in ["/block", "/subscribe"] {
        let (status, body) = post(&app, uri, request.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, json!({ "error": "request invalid" }), "{uri}");
    }
}

#[tokio::test]
async fn test_subscribe_rejects_non_email() {
    let app = create_test_app();

    let (status, body) = post(
        &app,
        "/subscribe",
        json!({ "requestor": "lisa", "target": "lisa" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "email invalid format" }));
}

#[tokio::test]
async fn test_users_receive_update_union() {
    let app = create_test_app();
    befriend(&app, "john@example.com", "f1@example.com").await;
    befriend(&app, "john@example.com", "f2@example.com").await;
    post(
        &app,
        "/subscribe",
        json!({ "requestor": "sub1@example.com", "target": "john@example.com" }),
    )
    .await;

    let (status, body) = post(
        &app,
        "/get-list-users-receive-update",
        json!({
            "sender": "john@example.com",
            "text": "Hello m1@example.com and f1@example.com, from john@example.com"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "recipients": [
                "f1@example.com",
                "f2@example.com",
                "sub1@example.com",
                "m1@example.com"
            ]
        })
    );
}

#[tokio::test]
async fn test_block_suppresses_delivery_to_friend_and_mention() {
    let app = create_test_app();
    befriend(&app, "john@example.com", "andy@example.com").await;
    post(
        &app,
        "/block",
        json!({ "requestor": "andy@example.com", "target": "john@example.com" }),
    )
    .await;

    let (status, body) = post(
        &app,
        "/get-list-users-receive-update",
        json!({ "sender": "john@example.com", "text": "ping andy@example.com" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipients"], json!([]));
}

#[tokio::test]
async fn test_create_and_list_users() {
    let app = create_test_app();

    let (status, _) = post(&app, "/create-user", json!({ "email": "andy@example.com" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&app, "/create-user", json!({ "email": "andy@example.com" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "User already exists: andy@example.com" })
    );

    let (status, body) = send(&app, "GET", "/list-users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "users": ["andy@example.com"], "count": 1 })
    );
}

#[tokio::test]
async fn test_registered_policy_rejects_unknown_users() {
    let app = create_test_app_with_policy(GraphPolicy {
        require_registered_users: true,
    });

    let (status, body) = post(
        &app,
        "/get-list-friends",
        json!({ "email": "ghost@example.com" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "User not found: ghost@example.com" })
    );

    post(&app, "/create-user", json!({ "email": "andy@example.com" })).await;
    post(&app, "/create-user", json!({ "email": "john@example.com" })).await;
    befriend(&app, "andy@example.com", "john@example.com").await;
}

#[tokio::test]
async fn test_unknown_route_returns_not_found() {
    let app = create_test_app();

    let (status, _) = send(&app, "GET", "/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
