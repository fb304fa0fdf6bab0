//! Category and genre database models

use sqlx::FromRow;

/// Row of the `categories` or `genres` table
#[derive(Debug, Clone, FromRow)]
pub struct TaxonModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A genre joined through `title_genres`
#[derive(Debug, Clone, FromRow)]
pub struct TitleGenreModel {
    pub title_id: i64,
    pub id: i64,
    pub name: String,
    pub slug: String,
}
