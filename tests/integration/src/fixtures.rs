//! Test fixtures and data generators
//!
//! Request and response shapes used by the end-to-end tests. The tests run
//! against a shared database, so every name carries a unique suffix.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A short random suffix for usernames, slugs and title names
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..10].to_string()
}

/// Signup request
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user_{suffix}"),
            email: format!("user_{suffix}@example.com"),
        }
    }
}

/// Token request
#[derive(Debug, Serialize)]
pub struct TokenRequest {
    pub username: String,
    pub confirmation_code: String,
}

/// Token response
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub role: String,
}

/// Category or genre request
#[derive(Debug, Clone, Serialize)]
pub struct TaxonRequest {
    pub name: String,
    pub slug: String,
}

impl TaxonRequest {
    pub fn unique(prefix: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("{prefix} {suffix}"),
            slug: format!("{prefix}-{suffix}"),
        }
    }
}

/// Category or genre response
#[derive(Debug, Deserialize)]
pub struct TaxonResponse {
    pub name: String,
    pub slug: String,
}

/// Create title request
#[derive(Debug, Serialize)]
pub struct CreateTitleRequest {
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub genre: Vec<String>,
    pub category: Option<String>,
}

impl CreateTitleRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Title {}", unique_suffix()),
            year: Some(1979),
            description: None,
            genre: Vec::new(),
            category: None,
        }
    }
}

/// Title response
#[derive(Debug, Deserialize)]
pub struct TitleResponse {
    pub id: i64,
    pub name: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub genre: Vec<TaxonResponse>,
    pub category: Option<TaxonResponse>,
}

/// Create review request
#[derive(Debug, Serialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub score: i32,
}

/// Review response
#[derive(Debug, Deserialize)]
pub struct ReviewResponse {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author: String,
    pub score: i32,
    pub pub_date: String,
}

/// Comment request
#[derive(Debug, Serialize)]
pub struct CommentRequest {
    pub text: String,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub pub_date: String,
    pub review: i64,
}

/// Paginated list envelope
#[derive(Debug, Deserialize)]
pub struct Paginated<T> {
    pub count: i64,
    pub page: u32,
    pub page_size: u32,
    pub results: Vec<T>,
}
