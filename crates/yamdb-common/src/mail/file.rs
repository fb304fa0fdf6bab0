//! File mail backend: one file per message in a directory

use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tracing::{debug, instrument};
use uuid::Uuid;
use yamdb_core::{DomainError, Mailer, OutgoingMail};

/// Writes each message to `<dir>/<timestamp>-<uuid>.eml`; names sort in send order
#[derive(Debug, Clone)]
pub struct FileMailer {
    from: String,
    dir: PathBuf,
}

impl FileMailer {
    pub fn new(from: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            from: from.into(),
            dir: dir.into(),
        }
    }

    fn render(&self, mail: &OutgoingMail) -> String {
        format!(
            "From: {}\nTo: {}\nSubject: {}\nDate: {}\n\n{}\n",
            self.from,
            mail.recipient,
            mail.subject,
            Utc::now().to_rfc2822(),
            mail.body
        )
    }
}

#[async_trait]
impl Mailer for FileMailer {
    #[instrument(skip(self, mail), fields(to = %mail.recipient))]
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| DomainError::DeliveryError(format!("{}: {e}", self.dir.display())))?;

        let path = self.dir.join(format!(
            "{}-{}.eml",
            Utc::now().format("%Y%m%d-%H%M%S%.6f"),
            Uuid::new_v4()
        ));

        tokio::fs::write(&path, self.render(mail))
            .await
            .map_err(|e| DomainError::DeliveryError(format!("{}: {e}", path.display())))?;

        debug!(path = %path.display(), "Mail written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mail() -> OutgoingMail {
        OutgoingMail {
            recipient: "reader@example.com".to_string(),
            subject: "Confirmation code".to_string(),
            body: "Your code: ABC123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_writes_one_file_per_message() {
        let dir = std::env::temp_dir().join(format!("yamdb-mail-{}", Uuid::new_v4()));
        let mailer = FileMailer::new("noreply@yamdb.local", &dir);

        mailer.send(&mail()).await.unwrap();
        mailer.send(&mail()).await.unwrap();

        let mut entries = std::fs::read_dir(&dir).unwrap().collect::<Vec<_>>();
        assert_eq!(entries.len(), 2);

        let path = entries.pop().unwrap().unwrap().path();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("To: reader@example.com"));
        assert!(content.contains("Your code: ABC123"));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_unwritable_dir_is_delivery_error() {
        // A regular file cannot be used as the output directory
        let file = std::env::temp_dir().join(format!("yamdb-mail-{}", Uuid::new_v4()));
        std::fs::write(&file, b"occupied").unwrap();

        let mailer = FileMailer::new("noreply@yamdb.local", &file);
        let result = mailer.send(&mail()).await;
        assert!(matches!(result, Err(DomainError::DeliveryError(_))));

        std::fs::remove_file(&file).unwrap();
    }
}
