//! Mailer doubles

use async_trait::async_trait;
use parking_lot::Mutex;
use yamdb_core::traits::{Mailer, OutgoingMail};
use yamdb_core::DomainError;

/// Keeps every sent message in memory
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages sent so far, oldest first
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent.lock().clone()
    }

    /// The confirmation code from the newest message addressed to `recipient`
    pub fn last_code_for(&self, recipient: &str) -> Option<String> {
        self.sent
            .lock()
            .iter()
            .rev()
            .find(|m| m.recipient == recipient)
            .and_then(|m| extract_code(&m.body))
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError> {
        self.sent.lock().push(mail.clone());
        Ok(())
    }
}

/// Rejects every message
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _mail: &OutgoingMail) -> Result<(), DomainError> {
        Err(DomainError::DeliveryError("mail transport unavailable".to_string()))
    }
}

/// Pull the code out of a confirmation message body
pub fn extract_code(body: &str) -> Option<String> {
    body.lines()
        .find_map(|line| line.strip_prefix(crate::services::auth::CODE_LINE_PREFIX))
        .map(|code| code.trim().to_string())
}
