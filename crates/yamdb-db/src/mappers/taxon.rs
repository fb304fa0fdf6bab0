//! Taxon model -> entity mapper

use yamdb_core::{Genre, Taxon};

use crate::models::{TaxonModel, TitleGenreModel};

/// Build a category or genre from its row
pub fn taxon_from_model<T: Taxon>(model: TaxonModel) -> T {
    T::from_parts(model.id, model.name, model.slug)
}

impl From<TitleGenreModel> for Genre {
    fn from(model: TitleGenreModel) -> Self {
        Genre {
            id: model.id,
            name: model.name,
            slug: model.slug,
        }
    }
}
