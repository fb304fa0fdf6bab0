//! Confirmation code record issued by signup

use chrono::{DateTime, Utc};

/// The hashed code currently valid for a user.
///
/// Each signup replaces the previous record, so only the most recently
/// mailed code can be exchanged for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationCode {
    pub user_id: i64,
    pub code_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ConfirmationCode {
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
