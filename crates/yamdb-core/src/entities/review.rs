//! Review entity - a user's scored opinion of a title

use chrono::{DateTime, Utc};

use crate::value_objects::Score;

/// A stored review, carrying the denormalized names it is displayed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub id: i64,
    pub title_id: i64,
    pub title_name: String,
    pub author_id: i64,
    pub author_username: String,
    pub text: String,
    pub score: Score,
    pub pub_date: DateTime<Utc>,
}

/// A review to be stored; at most one per (title, author)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub title_id: i64,
    pub author_id: i64,
    pub text: String,
    pub score: Score,
}
