//! Contact message validation and delivery.
//!
//! The mail app collects a name, reply address and body, validates them
//! and hands the result to a `ContactSubmitter`. The default submitter
//! appends accepted messages to a JSON-lines outbox file so nothing is
//! lost when the desktop runs without a network backend.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("message is required")]
    MissingMessage,
    #[error("could not deliver message: {0}")]
    Delivery(#[from] std::io::Error),
    #[error("could not encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The form payload as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }
}

/// A validated message with its assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedMessage {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Delivery backend for contact messages. Injected into the mail app so
/// tests can capture submissions instead of touching the filesystem.
pub trait ContactSubmitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<SubmittedMessage, ContactError>;
}

/// Appends accepted messages to a JSON-lines file.
pub struct OutboxSubmitter {
    path: PathBuf,
    next_id: u64,
}

impl OutboxSubmitter {
    pub fn new(path: PathBuf) -> Self {
        Self { path, next_id: 1 }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl ContactSubmitter for OutboxSubmitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<SubmittedMessage, ContactError> {
        message.validate()?;
        let record = SubmittedMessage {
            id: self.next_id,
            name: message.name.trim().to_string(),
            email: message.email.trim().to_string(),
            message: message.message.trim().to_string(),
            created_at: Utc::now(),
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(&record)?;
        writeln!(file, "{line}")?;
        self.next_id += 1;
        tracing::info!(id = record.id, "contact message queued to outbox");
        Ok(record)
    }
}

/// Cheap shape check, not RFC validation: something before and after an
/// `@`, and a dot in the domain part.
fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
