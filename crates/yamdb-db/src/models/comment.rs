//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A comment joined with its author username
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: i64,
    pub review_id: i64,
    pub author_id: i64,
    pub author_username: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
}
