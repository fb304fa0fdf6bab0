//! User entity - represents a platform account

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{validate_username, Role};

/// Maximum length of an email address
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum length of first and last names
pub const NAME_MAX_LENGTH: usize = 150;

/// User entity representing a reviewer, moderator or administrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub role: Role,
    /// Staff accounts are administrators regardless of their role
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user has administrator rights
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.role == Role::Admin
    }

    /// Check if user is a moderator
    #[inline]
    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }

    /// Check if this record matches a signup pair exactly
    pub fn matches(&self, username: &str, email: &str) -> bool {
        self.username == username && self.email == email
    }

    /// Check an edited record against the same limits as [`NewUser::validate`]
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_username(&self.username)?;
        validate_email_length(&self.email)?;
        validate_name_length("first_name", &self.first_name)?;
        validate_name_length("last_name", &self.last_name)
    }
}

/// Values for a user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
    pub role: Role,
    pub is_staff: bool,
}

impl NewUser {
    /// A plain user created by the signup handshake
    pub fn signup(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: normalize_email(&email.into()),
            first_name: String::new(),
            last_name: String::new(),
            bio: String::new(),
            role: Role::User,
            is_staff: false,
        }
    }

    /// Check username, email and name limits
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_username(&self.username)?;
        validate_email_length(&self.email)?;
        validate_name_length("first_name", &self.first_name)?;
        validate_name_length("last_name", &self.last_name)
    }
}

/// Lower-case an email address for storage and comparison
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_email_length(email: &str) -> Result<(), DomainError> {
    if email.is_empty() || email.chars().count() > EMAIL_MAX_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "email must be 1-{EMAIL_MAX_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_name_length(field: &str, value: &str) -> Result<(), DomainError> {
    if value.chars().count() > NAME_MAX_LENGTH {
        return Err(DomainError::ValidationError(format!(
            "{field} must be at most {NAME_MAX_LENGTH} characters"
        )));
    }
    Ok(())
}
