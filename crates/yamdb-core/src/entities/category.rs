//! Category entity

use super::taxon::{Taxon, TaxonKind};

/// Classification bucket for titles (film, book, song...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Taxon for Category {
    const KIND: TaxonKind = TaxonKind::Category;

    fn from_parts(id: i64, name: String, slug: String) -> Self {
        Self { id, name, slug }
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn slug(&self) -> &str {
        &self.slug
    }
}
