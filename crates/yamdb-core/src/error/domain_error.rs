//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Genre not found: {0}")]
    GenreNotFound(String),

    #[error("Title not found: {0}")]
    TitleNotFound(i64),

    #[error("Review not found: {0}")]
    ReviewNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Username 'me' is reserved")]
    ReservedUsername,

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Score {0} is out of range: expected 1 to 10")]
    ScoreOutOfRange(i32),

    #[error("Year {year} is in the future: max {max}")]
    YearInFuture { year: i32, max: i32 },

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("Invalid confirmation code")]
    InvalidConfirmationCode,

    // =========================================================================
    // Authentication / Authorization Errors
    // =========================================================================
    #[error("Authentication credentials were not provided")]
    NotAuthenticated,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameTaken,

    #[error("Email already in use")]
    EmailTaken,

    #[error("You have already reviewed this title")]
    DuplicateReview,

    #[error("Category with this slug already exists")]
    CategoryExists,

    #[error("Genre with this slug already exists")]
    GenreExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Mail delivery failed: {0}")]
    DeliveryError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::GenreNotFound(_) => "UNKNOWN_GENRE",
            Self::TitleNotFound(_) => "UNKNOWN_TITLE",
            Self::ReviewNotFound(_) => "UNKNOWN_REVIEW",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidUsername(_) => "INVALID_USERNAME",
            Self::ReservedUsername => "RESERVED_USERNAME",
            Self::InvalidSlug(_) => "INVALID_SLUG",
            Self::ScoreOutOfRange(_) => "SCORE_OUT_OF_RANGE",
            Self::YearInFuture { .. } => "YEAR_IN_FUTURE",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidConfirmationCode => "INVALID_CONFIRMATION_CODE",

            // Auth
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::Forbidden(_) => "FORBIDDEN",

            // Conflict
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::EmailTaken => "EMAIL_TAKEN",
            Self::DuplicateReview => "DUPLICATE_REVIEW",
            Self::CategoryExists => "CATEGORY_EXISTS",
            Self::GenreExists => "GENRE_EXISTS",

            // Infrastructure
            Self::DeliveryError(_) => "DELIVERY_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::GenreNotFound(_)
                | Self::TitleNotFound(_)
                | Self::ReviewNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidUsername(_)
                | Self::ReservedUsername
                | Self::InvalidSlug(_)
                | Self::ScoreOutOfRange(_)
                | Self::YearInFuture { .. }
                | Self::InvalidRole(_)
                | Self::InvalidConfirmationCode
        )
    }

    /// Check if the caller must authenticate first
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Forbidden(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::UsernameTaken
                | Self::EmailTaken
                | Self::DuplicateReview
                | Self::CategoryExists
                | Self::GenreExists
        )
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::DeliveryError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound("alice".to_string());
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::DuplicateReview;
        assert_eq!(err.code(), "DUPLICATE_REVIEW");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::TitleNotFound(1).is_not_found());
        assert!(DomainError::GenreNotFound("drama".to_string()).is_not_found());
        assert!(!DomainError::EmailTaken.is_not_found());
    }

    #[test]
    fn test_categories_are_disjoint() {
        let err = DomainError::NotAuthenticated;
        assert!(err.is_authentication());
        assert!(!err.is_authorization());

        let err = DomainError::Forbidden("not the author".to_string());
        assert!(err.is_authorization());
        assert!(!err.is_authentication());

        assert!(DomainError::InvalidConfirmationCode.is_validation());
        assert!(!DomainError::InvalidConfirmationCode.is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::YearInFuture { year: 2100, max: 2024 };
        assert_eq!(err.to_string(), "Year 2100 is in the future: max 2024");

        let err = DomainError::ScoreOutOfRange(11);
        assert_eq!(err.to_string(), "Score 11 is out of range: expected 1 to 10");
    }
}
