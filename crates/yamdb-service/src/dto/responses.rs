//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use yamdb_core::traits::{Page, PageRequest};
use yamdb_core::Role;

// ============================================================================
// Pagination
// ============================================================================

/// Page-number paginated list body
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// Total number of matching records across all pages
    pub count: i64,
    pub page: u32,
    pub page_size: u32,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(results: Vec<T>, count: i64, request: PageRequest) -> Self {
        Self {
            count,
            page: request.page,
            page_size: request.page_size,
            results,
        }
    }

    /// Convert a repository page, mapping each item into its response form
    pub fn from_page<U, F>(page: Page<U>, request: PageRequest, f: F) -> Self
    where
        F: FnMut(U) -> T,
    {
        let page = page.map(f);
        Self::new(page.items, page.total, request)
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Signup echoes the accepted pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponse {
    pub username: String,
    pub email: String,
}

/// Issued bearer token
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// User record as shown to its owner and to administrators
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub role: Role,
}

// ============================================================================
// Catalog Responses
// ============================================================================

/// Category or genre
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonResponse {
    pub name: String,
    pub slug: String,
}

/// Title with embedded taxonomy and computed rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleResponse {
    pub id: i64,
    pub name: String,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub description: Option<String>,
    pub genre: Vec<TaxonResponse>,
    pub category: Option<TaxonResponse>,
}

// ============================================================================
// Review Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewResponse {
    pub id: i64,
    /// Name of the reviewed title
    pub title: String,
    pub text: String,
    /// Username of the author
    pub author: String,
    pub score: i32,
    pub pub_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub text: String,
    pub author: String,
    pub pub_date: DateTime<Utc>,
    /// Id of the parent review
    pub review: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_shape() {
        let request = PageRequest::new(Some(2), Some(1));
        let page = Page::new(vec![1, 2], 7);
        let response = PaginatedResponse::from_page(page, request, |n| n * 10);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 7);
        assert_eq!(json["page"], 2);
        assert_eq!(json["page_size"], 1);
        assert_eq!(json["results"], serde_json::json!([10, 20]));
    }

    #[test]
    fn test_title_without_rating_serializes_null() {
        let title = TitleResponse {
            id: 1,
            name: "Solaris".to_string(),
            year: Some(1972),
            rating: None,
            description: None,
            genre: vec![],
            category: None,
        };
        let json = serde_json::to_value(&title).unwrap();
        assert!(json["rating"].is_null());
        assert!(json["category"].is_null());
        assert_eq!(json["genre"], serde_json::json!([]));
    }

    #[test]
    fn test_user_role_lowercase() {
        let user = UserResponse {
            username: "mod".to_string(),
            email: "mod@example.com".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            bio: String::new(),
            role: Role::Moderator,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "moderator");
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
