//! Shared shape of the two catalog taxonomies (categories and genres)

use crate::error::DomainError;
use crate::value_objects::validate_slug;

/// Maximum length of a category or genre name
pub const TAXON_NAME_MAX_LENGTH: usize = 256;

/// Which taxonomy a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaxonKind {
    Category,
    Genre,
}

impl TaxonKind {
    /// Human-readable singular label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Genre => "genre",
        }
    }

    /// Storage table holding this taxonomy
    pub const fn table(self) -> &'static str {
        match self {
            Self::Category => "categories",
            Self::Genre => "genres",
        }
    }

    pub fn not_found(self, slug: impl Into<String>) -> DomainError {
        match self {
            Self::Category => DomainError::CategoryNotFound(slug.into()),
            Self::Genre => DomainError::GenreNotFound(slug.into()),
        }
    }

    pub fn already_exists(self) -> DomainError {
        match self {
            Self::Category => DomainError::CategoryExists,
            Self::Genre => DomainError::GenreExists,
        }
    }
}

/// A named, slug-addressed catalog label.
///
/// Categories and genres are structurally identical; this trait lets
/// storage and services handle both with one generic implementation.
pub trait Taxon: Clone + Send + Sync + 'static {
    const KIND: TaxonKind;

    fn from_parts(id: i64, name: String, slug: String) -> Self;
    fn id(&self) -> i64;
    fn name(&self) -> &str;
    fn slug(&self) -> &str;
}

/// Values for a taxon that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaxon {
    pub name: String,
    pub slug: String,
}

impl NewTaxon {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let length = self.name.chars().count();
        if length == 0 || length > TAXON_NAME_MAX_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "name must be 1-{TAXON_NAME_MAX_LENGTH} characters"
            )));
        }
        validate_slug(&self.slug)
    }
}
