//! Application error types
//!
//! Unified error handling shared by the service and HTTP layers.

use yamdb_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    ///
    /// Uniqueness conflicts are reported as 400, like any other rejected input.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidToken | Self::TokenExpired => 401,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authentication() {
                    401
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() || e.is_conflict() {
                    400
                } else {
                    500
                }
            }
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// Lower an application error back into the domain vocabulary.
///
/// Used where infrastructure helpers (token signing, hashing) are called
/// through a domain port.
impl From<AppError> for DomainError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => e,
            AppError::InvalidToken | AppError::TokenExpired => Self::NotAuthenticated,
            AppError::Validation(msg) => Self::ValidationError(msg),
            AppError::Database(msg) => Self::DatabaseError(msg),
            other => Self::InternalError(format!("{other:#}")),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidToken.status_code(), 401);
        assert_eq!(AppError::TokenExpired.status_code(), 401);
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Database("down".to_string()).status_code(), 500);
        assert_eq!(AppError::Config("bad port".to_string()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(AppError::from(DomainError::TitleNotFound(1)).status_code(), 404);
        assert_eq!(AppError::from(DomainError::NotAuthenticated).status_code(), 401);
        assert_eq!(
            AppError::from(DomainError::Forbidden("x".to_string())).status_code(),
            403
        );
        assert_eq!(AppError::from(DomainError::UsernameTaken).status_code(), 400);
        assert_eq!(AppError::from(DomainError::InvalidConfirmationCode).status_code(), 400);
        assert_eq!(
            AppError::from(DomainError::DeliveryError("x".to_string())).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(AppError::from(DomainError::DuplicateReview).error_code(), "DUPLICATE_REVIEW");
    }

    #[test]
    fn test_lowering_to_domain() {
        let err: DomainError = AppError::from(DomainError::EmailTaken).into();
        assert!(matches!(err, DomainError::EmailTaken));

        let err: DomainError = AppError::TokenExpired.into();
        assert!(matches!(err, DomainError::NotAuthenticated));

        let err: DomainError = AppError::Internal(anyhow::anyhow!("boom")).into();
        assert!(matches!(err, DomainError::InternalError(_)));
    }
}
