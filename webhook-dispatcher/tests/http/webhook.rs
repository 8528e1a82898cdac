use crate::context::TestServer;
use http::{Method, StatusCode};
use serde_json::json;

#[tokio::test]
async fn test_recognized_events() {
    let server = TestServer::new().await;

    let cases = [
        (
            json!({
                "event": "charge:pending",
                "payload": [
                    { "id": "sub-1", "customer": { "id": "cust-1" } },
                    { "id": "sub-2", "customer": { "id": "cust-2" } }
                ]
            }),
            "Notified Customer cust-1\r\nNotified Customer cust-2",
        ),
        (
            json!({
                "event": "charge:retry",
                "payload": [{ "subscription": { "id": "sub-1" }, "response": { "successful": false } }]
            }),
            "Purchase for sub-1 queued for retry.",
        ),
        (
            json!({
                "event": "charge:successful",
                "payload": [{ "subscription": { "id": "sub-1" }, "response": { "successful": true } }]
            }),
            "Purchase for sub-1 successful, queued for next cycle.",
        ),
        (
            json!({
                "event": "charge:failed",
                "payload": [{ "subscription": { "id": "sub-1" }, "response": { "successful": false } }]
            }),
            "Purchase for sub-1 failed, abandoned.",
        ),
        (
            json!({ "event": "card:expiring", "payload": [{ "id": "123" }] }),
            "Card for customer #123 expiring within 30 days.",
        ),
        (
            json!({ "event": "card:expired", "payload": [{ "id": "123" }] }),
            "Card for customer #123 expired.",
        ),
    ];

    for (payload, expected) in cases {
        let response = server
            .send_request(Method::POST, &payload.to_string())
            .await;

        assert_eq!(response.code, StatusCode::OK);
        assert_eq!(response.body, expected);
        assert!(response
            .content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("text/plain")));
    }
}

#[tokio::test]
async fn test_invalid_request_type() {
    let server = TestServer::new().await;

    let response = server.send_request(Method::GET, "").await;
    assert_eq!(response.code, StatusCode::OK);
    assert_eq!(response.body, "Invalid request type.");

    let response = server.send_request(Method::PUT, "not json").await;
    assert_eq!(response.code, StatusCode::OK);
    assert_eq!(response.body, "Invalid request type.");
}

#[tokio::test]
async fn test_unknown_event() {
    let server = TestServer::new().await;

    let response = server
        .send_request(Method::POST, r#"{"event":"bogus"}"#)
        .await;
    assert_eq!(response.code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, r#"Unknown event. Raw data: {"event":"bogus"}"#);

    let response = server.send_request(Method::POST, r#"{}"#).await;
    assert_eq!(response.code, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Unknown event. Raw data: {}");
}

#[tokio::test]
async fn test_malformed_json() {
    let server = TestServer::new().await;

    let response = server.send_request(Method::POST, "not json").await;
    assert_eq!(response.code, StatusCode::OK);
    assert!(response
        .body
        .starts_with("Format Exception - unable to parse JSON: "));

    let strict = TestServer::with_env(vec![("MALFORMED_PAYLOAD_STATUS", "400")]).await;
    let response = strict.send_request(Method::POST, "not json").await;
    assert_eq!(response.code, StatusCode::BAD_REQUEST);
    assert!(response
        .body
        .starts_with("Format Exception - unable to parse JSON: "));
}

#[tokio::test]
async fn test_repeated_delivery_is_identical() {
    let server = TestServer::new().await;
    let payload = r#"{"event":"card:expired","payload":[{"id":"1"},{"id":"2"}]}"#;

    let first = server.send_request(Method::POST, payload).await;
    let second = server.send_request(Method::POST, payload).await;

    assert_eq!(first, second);
    assert_eq!(
        first.body,
        "Card for customer #1 expired.\r\nCard for customer #2 expired."
    );
}
