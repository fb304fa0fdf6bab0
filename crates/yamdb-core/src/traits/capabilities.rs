//! Outbound capabilities the services depend on

use async_trait::async_trait;

use crate::entities::User;
use crate::error::DomainError;

/// A message to be delivered out-of-band
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Delivers mail. Failures are reported as [`DomainError::DeliveryError`].
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), DomainError>;
}

/// Issues signed bearer tokens bound to a user
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User) -> Result<String, DomainError>;
}
