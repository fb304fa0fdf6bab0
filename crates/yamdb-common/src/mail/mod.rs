//! Mail delivery backends

mod console;
mod file;

pub use console::ConsoleMailer;
pub use file::FileMailer;

use std::sync::Arc;

use yamdb_core::Mailer;

use crate::config::{MailBackend, MailConfig};

/// Build the mailer selected by configuration
pub fn build_mailer(config: &MailConfig) -> Arc<dyn Mailer> {
    match config.backend {
        MailBackend::Console => Arc::new(ConsoleMailer::new(config.from.clone())),
        MailBackend::File => Arc::new(FileMailer::new(config.from.clone(), config.file_dir.clone())),
    }
}
