//! Console mail backend: messages become log events

use async_trait::async_trait;
use tracing::info;
use yamdb_core::{DomainError, Mailer, OutgoingMail};

/// Logs every message instead of sending it
#[derive(Debug, Clone)]
pub struct ConsoleMailer {
    from: String,
}

impl ConsoleMailer {
    pub fn new(from: impl Into<String>) -> Self {
        Self { from: from.into() }
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError> {
        info!(
            from = %self.from,
            to = %mail.recipient,
            subject = %mail.subject,
            body = %mail.body,
            "Outgoing mail"
        );
        Ok(())
    }
}
