//! Title database model

use sqlx::FromRow;

/// A title joined with its category and aggregated rating
#[derive(Debug, Clone, FromRow)]
pub struct TitleModel {
    pub id: i64,
    pub name: String,
    pub year: Option<i32>,
    pub description: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub category_slug: Option<String>,
    /// `AVG(score)`; NULL when there are no reviews
    pub rating: Option<f64>,
}
