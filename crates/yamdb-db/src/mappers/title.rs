//! Title model -> entity mapper

use yamdb_core::{Category, Genre, Rating, Title};

use crate::models::TitleModel;

/// Assemble a title from its joined row and separately loaded genres
pub fn title_with_genres(model: TitleModel, genres: Vec<Genre>) -> Title {
    let category = match (model.category_id, model.category_name, model.category_slug) {
        (Some(id), Some(name), Some(slug)) => Some(Category { id, name, slug }),
        _ => None,
    };

    Title {
        id: model.id,
        name: model.name,
        year: model.year,
        description: model.description,
        category,
        genres,
        rating: model.rating.map(Rating::from_average),
    }
}
