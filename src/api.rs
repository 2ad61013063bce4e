//! The contact submission endpoint as a pure request handler.
//!
//! Mirrors the `POST /api/contact` contract: a valid JSON body yields
//! `201` with the stored record, anything else yields `400` with a
//! `{"message": ...}` error body. Keeping the handler free of transport
//! concerns lets the mail app and tests drive it directly.

use serde_json::json;

use crate::contact::{ContactMessage, ContactSubmitter};

pub const CONTACT_PATH: &str = "/api/contact";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn created(body: String) -> Self {
        Self { status: 201, body }
    }

    fn bad_request(message: &str) -> Self {
        Self {
            status: 400,
            body: json!({ "message": message }).to_string(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            body: json!({ "message": "not found" }).to_string(),
        }
    }
}

/// Route a request to its handler. The contact endpoint is the only
/// route; anything else is a 404.
pub fn handle_request(
    path: &str,
    body: &str,
    submitter: &mut dyn ContactSubmitter,
) -> ApiResponse {
    if path == CONTACT_PATH {
        handle_contact_request(body, submitter)
    } else {
        ApiResponse::not_found()
    }
}

/// Handle a contact submission body against the given delivery backend.
pub fn handle_contact_request(
    body: &str,
    submitter: &mut dyn ContactSubmitter,
) -> ApiResponse {
    let message: ContactMessage = match serde_json::from_str(body) {
        Ok(message) => message,
        Err(err) => {
            tracing::debug!(error = %err, "malformed contact payload");
            return ApiResponse::bad_request("invalid request body");
        }
    };
    if let Err(err) = message.validate() {
        return ApiResponse::bad_request(&err.to_string());
    }
    match submitter.submit(&message) {
        Ok(record) => match serde_json::to_string(&record) {
            Ok(body) => ApiResponse::created(body),
            Err(err) => {
                tracing::error!(error = %err, "failed to encode contact record");
                ApiResponse::bad_request("internal encoding error")
            }
        },
        Err(err) => ApiResponse::bad_request(&err.to_string()),
    }
}
