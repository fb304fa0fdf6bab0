//! Review database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A review joined with its title name and author username
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub title_id: i64,
    pub title_name: String,
    pub author_id: i64,
    pub author_username: String,
    pub text: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}
