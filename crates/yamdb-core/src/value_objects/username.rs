//! Username validation

use crate::error::DomainError;

/// Maximum length of a username
pub const USERNAME_MAX_LENGTH: usize = 150;

/// Username reserved for the self-profile endpoint
pub const RESERVED_USERNAME: &str = "me";

/// Validate a username.
///
/// Letters and digits from any script are allowed, along with `_ . @ + -`.
/// The literal `me` is reserved.
pub fn validate_username(username: &str) -> Result<(), DomainError> {
    if username == RESERVED_USERNAME {
        return Err(DomainError::ReservedUsername);
    }

    let length = username.chars().count();
    if length == 0 || length > USERNAME_MAX_LENGTH {
        return Err(DomainError::InvalidUsername(format!(
            "must be 1-{USERNAME_MAX_LENGTH} characters"
        )));
    }

    if let Some(c) = username.chars().find(|&c| !is_username_char(c)) {
        return Err(DomainError::InvalidUsername(format!(
            "character '{c}' is not allowed"
        )));
    }

    Ok(())
}

fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-')
}
