//! Genre entity

use super::taxon::{Taxon, TaxonKind};

/// Genre label; a title may carry several
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Taxon for Genre {
    const KIND: TaxonKind = TaxonKind::Genre;

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
