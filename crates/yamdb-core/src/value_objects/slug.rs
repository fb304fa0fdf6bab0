//! URL slug validation for categories and genres

use crate::error::DomainError;

/// Maximum length of a slug
pub const SLUG_MAX_LENGTH: usize = 50;

/// Validate a slug: 1-50 ASCII letters, digits, hyphens or underscores
pub fn validate_slug(slug: &str) -> Result<(), DomainError> {
    if slug.is_empty() || slug.len() > SLUG_MAX_LENGTH {
        return Err(DomainError::InvalidSlug(format!(
            "slug must be 1-{SLUG_MAX_LENGTH} characters"
        )));
    }

    if !slug
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
    {
        return Err(DomainError::InvalidSlug(format!(
            "'{slug}' may only contain letters, digits, hyphens and underscores"
        )));
    }

    Ok(())
}
