//! Request DTOs for API endpoints
//!
//! All body DTOs implement `Deserialize` and `Validate` for shape checks.
//! Rules that need domain knowledge (reserved usernames, slug alphabet,
//! score range, release year) are enforced by the services.

use serde::Deserialize;
use validator::Validate;
use yamdb_core::Role;

// ============================================================================
// Auth Requests
// ============================================================================

/// Signup request: register (or re-request a code for) a username/email pair
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,
}

/// Exchange a confirmation code for a bearer token
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Confirmation code is required"))]
    pub confirmation_code: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Self-profile update. A `role` key, if sent, is ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    pub last_name: Option<String>,

    pub bio: Option<String>,
}

/// Administrative user creation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    pub last_name: String,

    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub role: Role,
}

/// Administrative partial user update; unlike the self-profile form, `role` applies
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: Option<String>,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 254, message = "Email must be at most 254 characters")
    )]
    pub email: Option<String>,

    #[validate(length(max = 150, message = "First name must be at most 150 characters"))]
    pub first_name: Option<String>,

    #[validate(length(max = 150, message = "Last name must be at most 150 characters"))]
    pub last_name: Option<String>,

    pub bio: Option<String>,

    pub role: Option<Role>,
}

impl From<UpdateProfileRequest> for UpdateUserRequest {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            bio: request.bio,
            role: None,
        }
    }
}

// ============================================================================
// Catalog Requests
// ============================================================================

/// Create a category or genre
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaxonRequest {
    #[validate(length(min = 1, max = 256, message = "Name must be 1-256 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Slug must be 1-50 characters"))]
    pub slug: String,
}

/// Create a title; genres and category are referenced by slug
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTitleRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    pub year: Option<i32>,

    pub description: Option<String>,

    #[serde(default)]
    pub genre: Vec<String>,

    pub category: Option<String>,
}

/// Partial title update; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTitleRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    pub year: Option<i32>,

    pub description: Option<String>,

    pub genre: Option<Vec<String>>,

    pub category: Option<String>,
}

// ============================================================================
// Review Requests
// ============================================================================

/// Create a review
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReviewRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,

    pub score: i32,
}

/// Partial review update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: Option<String>,

    pub score: Option<i32>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create a comment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: String,
}

/// Partial comment update
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, message = "Text must not be empty"))]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let ok = SignupRequest {
            username: "reader".to_string(),
            email: "reader@example.com".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = SignupRequest {
            username: "reader".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_profile_update_ignores_role() {
        let request: UpdateProfileRequest =
            serde_json::from_str(r#"{"bio": "hi", "role": "admin"}"#).unwrap();
        let update = UpdateUserRequest::from(request);
        assert_eq!(update.bio.as_deref(), Some("hi"));
        assert!(update.role.is_none());
    }

    #[test]
    fn test_admin_update_parses_role() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"role": "moderator"}"#).unwrap();
        assert_eq!(request.role, Some(Role::Moderator));
    }

    #[test]
    fn test_create_user_defaults() {
        let request: CreateUserRequest =
            serde_json::from_str(r#"{"username": "u", "email": "u@example.com"}"#).unwrap();
        assert_eq!(request.role, Role::User);
        assert!(request.first_name.is_empty());
    }

    #[test]
    fn test_title_request_defaults_to_no_genres() {
        let request: CreateTitleRequest = serde_json::from_str(r#"{"name": "Solaris"}"#).unwrap();
        assert!(request.genre.is_empty());
        assert!(request.category.is_none());
    }

    #[test]
    fn test_title_name_only_needs_content() {
        let mut request: CreateTitleRequest =
            serde_json::from_str(r#"{"name": "Solaris"}"#).unwrap();
        request.name = "x".repeat(1000);
        assert!(request.validate().is_ok());

        request.name.clear();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_review_text_rejected() {
        let request = CreateReviewRequest {
            text: String::new(),
            score: 5,
        };
        assert!(request.validate().is_err());
    }
}
