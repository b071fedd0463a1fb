use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use super::{json_body, TestApp};
use crate::server::{
    controller::message::RECENT_MESSAGE_LIMIT,
    model::message::ChannelMessage,
    testing::{FakeGateway, GatewayCall, MESSAGE_CHANNEL},
};

fn history(count: usize) -> Vec<ChannelMessage> {
    // Newest first, as Discord returns them
    (0..count)
        .rev()
        .map(|i| ChannelMessage {
            author: format!("user{}", i),
            content: format!("message {}", i),
        })
        .collect()
}

/// Tests reading the message channel history.
///
/// Verifies that history is requested from the message channel with the fixed limit and
/// returned oldest first.
///
/// Expected: 200 with messages in chronological order
#[tokio::test]
async fn returns_recent_messages_oldest_first() {
    let app = TestApp::new(FakeGateway::new().with_history(history(3)));

    let response = app.get("/messages").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!([
            {"author": "user0", "content": "message 0"},
            {"author": "user1", "content": "message 1"},
            {"author": "user2", "content": "message 2"},
        ])
    );
    assert_eq!(
        app.gateway.calls(),
        vec![GatewayCall::History {
            channel_id: MESSAGE_CHANNEL,
            limit: RECENT_MESSAGE_LIMIT,
        }]
    );
}

/// Tests that the response never exceeds the message limit.
///
/// Expected: the 25 newest messages, oldest of them first
#[tokio::test]
async fn caps_messages_at_limit() {
    let app = TestApp::new(FakeGateway::new().with_history(history(30)));

    let body = json_body(app.get("/messages").await).await;
    let messages = body.as_array().unwrap();

    assert_eq!(messages.len(), RECENT_MESSAGE_LIMIT as usize);
    assert_eq!(messages[0]["author"], "user5");
    assert_eq!(messages[24]["author"], "user29");
}

#[tokio::test]
async fn returns_empty_list_for_empty_channel() {
    let app = TestApp::new(FakeGateway::new());

    let response = app.get("/messages").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!([]));
}

/// Tests a history read failure.
///
/// Expected: 500 with the explanatory message and an `[API ERROR]` log entry
#[tokio::test]
async fn reports_history_failure() {
    let app = TestApp::new(FakeGateway::new().failing_history());

    let response = app.get("/messages").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Could not load messages."})
    );
    assert!(app.log.entries()[0].starts_with("[API ERROR]"));
}

#[tokio::test]
async fn sends_text_to_message_channel() {
    let app = TestApp::new(FakeGateway::new());

    let response = app.post("/messages/send", r#"{"text": "Hello from the dashboard"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"status": "sent"}));
    assert_eq!(
        app.gateway.sends(),
        vec![(MESSAGE_CHANNEL, "Hello from the dashboard".to_string())]
    );
}

/// Tests that blank or missing text is rejected.
///
/// Verifies an empty string, whitespace only and a missing field.
///
/// Expected: 400 for each body, no message sent
#[tokio::test]
async fn rejects_blank_text() {
    let app = TestApp::new(FakeGateway::new());

    for body in [r#"{"text": ""}"#, r#"{"text": "   "}"#, "{}"] {
        let response = app.post("/messages/send", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(json_body(response).await["error"].is_string());
    }

    assert!(app.gateway.calls().is_empty());
}

/// Tests request bodies the JSON extractor rejects.
///
/// Verifies an empty body without a content type, an empty JSON body, malformed JSON and a
/// non-string `text` all get the JSON error shape of every other failure.
///
/// Expected: 400 with an `error` string for each request, no message sent
#[tokio::test]
async fn rejects_malformed_body_as_bad_request() {
    let app = TestApp::new(FakeGateway::new());

    let without_content_type = app
        .send(
            Request::builder()
                .method("POST")
                .uri("/messages/send")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    assert_eq!(without_content_type.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(without_content_type).await["error"].is_string());

    for body in ["", "not json", r#"{"text": 5}"#] {
        let response = app.post("/messages/send", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {}", body);
        assert!(json_body(response).await["error"].is_string());
    }

    assert!(app.gateway.calls().is_empty());
}

/// Tests a send failure.
///
/// Expected: generic 500 and an `[API ERROR]` log entry
#[tokio::test]
async fn reports_send_failure() {
    let app = TestApp::new(FakeGateway::new().failing_sends());

    let response = app.post("/messages/send", r#"{"text": "hi"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"error": "Internal server error"})
    );
    assert!(app.log.entries()[0].starts_with("[API ERROR] Could not send message"));
}
