//! End-to-end contact submissions: the request handler in front of the
//! real outbox backend.

use termfolio::api::{self, ApiResponse};
use termfolio::contact::{OutboxSubmitter, SubmittedMessage};

fn submit(outbox: &mut OutboxSubmitter, body: &str) -> ApiResponse {
    api::handle_request(api::CONTACT_PATH, body, outbox)
}

#[test]
fn accepted_message_lands_in_the_outbox_with_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let mut outbox = OutboxSubmitter::new(dir.path().join("outbox.jsonl"));
    let response = submit(
        &mut outbox,
        r#"{"name":"Ada Lovelace","email":"ada@example.com","message":"Hello!"}"#,
    );
    assert_eq!(response.status, 201);
    let record: SubmittedMessage = serde_json::from_str(&response.body).unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.name, "Ada Lovelace");

    let stored = std::fs::read_to_string(outbox.path()).unwrap();
    let line: SubmittedMessage = serde_json::from_str(stored.lines().next().unwrap()).unwrap();
    assert_eq!(line, record);
}

#[test]
fn ids_increment_per_accepted_message() {
    let dir = tempfile::tempdir().unwrap();
    let mut outbox = OutboxSubmitter::new(dir.path().join("outbox.jsonl"));
    for expected in 1u64..=3 {
        let response = submit(
            &mut outbox,
            r#"{"name":"Ada","email":"ada@example.com","message":"again"}"#,
        );
        let record: SubmittedMessage = serde_json::from_str(&response.body).unwrap();
        assert_eq!(record.id, expected);
    }
    // A rejected submission does not consume an id.
    let bad = submit(&mut outbox, r#"{"name":"","email":"","message":""}"#);
    assert_eq!(bad.status, 400);
    let response = submit(
        &mut outbox,
        r#"{"name":"Ada","email":"ada@example.com","message":"after"}"#,
    );
    let record: SubmittedMessage = serde_json::from_str(&response.body).unwrap();
    assert_eq!(record.id, 4);
}

#[test]
fn bad_requests_return_the_documented_error_shape() {
    let dir = tempfile::tempdir().unwrap();
    let mut outbox = OutboxSubmitter::new(dir.path().join("outbox.jsonl"));
    for body in [
        "",
        "not json",
        r#"{"name":"Ada"}"#,
        r#"{"name":"Ada","email":"bad","message":"hi"}"#,
        r#"{"name":"  ","email":"ada@example.com","message":"hi"}"#,
    ] {
        let response = submit(&mut outbox, body);
        assert_eq!(response.status, 400, "body: {body:?}");
        let error: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert!(error["message"].is_string());
    }
    assert!(!outbox.path().exists());
}
