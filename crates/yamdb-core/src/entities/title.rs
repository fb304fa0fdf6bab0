//! Title entity - a catalog work (film, book, song...)

use crate::error::DomainError;
use crate::value_objects::Rating;

use super::{Category, Genre};

/// A catalog work with its resolved category, genres and derived rating
#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub id: i64,
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    /// `None` once the category has been deleted
    pub category: Option<Category>,
    pub genres: Vec<Genre>,
    /// Mean review score; `None` while the title has no reviews
    pub rating: Option<Rating>,
}

/// Fully resolved write payload for creating or replacing a title
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleDraft {
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub genre_ids: Vec<i64>,
}

impl TitleDraft {
    /// Validate the draft against the current calendar year
    pub fn validate(&self, current_year: i32) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::ValidationError(
                "name must not be empty".to_string(),
            ));
        }
        if let Some(year) = self.year {
            validate_year(year, current_year)?;
        }
        Ok(())
    }
}

/// Reject release years later than the current year
pub fn validate_year(year: i32, current_year: i32) -> Result<(), DomainError> {
    if year > current_year {
        return Err(DomainError::YearInFuture {
            year,
            max: current_year,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, year: Option<i32>) -> TitleDraft {
        TitleDraft {
            name: name.to_string(),
            year,
            ..Default::default()
        }
    }

    #[test]
    fn test_current_year_allowed() {
        assert!(draft("Solaris", Some(2024)).validate(2024).is_ok());
        assert!(draft("Solaris", Some(1972)).validate(2024).is_ok());
    }

    #[test]
    fn test_future_year_rejected() {
        let err = draft("Solaris", Some(2025)).validate(2024).unwrap_err();
        assert!(matches!(
            err,
            DomainError::YearInFuture { year: 2025, max: 2024 }
        ));
    }

    #[test]
    fn test_year_is_optional() {
        assert!(draft("Untitled", None).validate(2024).is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(draft("", None).validate(2024).is_err());
    }

    #[test]
    fn test_long_name_accepted() {
        let name = "Ё".repeat(1000);
        assert!(draft(&name, Some(2001)).validate(2024).is_ok());
    }
}
