//! Path parameter extractors
//!
//! Type-safe extraction of numeric ids and slugs from nested routes.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

/// Path extractor whose rejection is an [`ApiError`]
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ApiPath(inner))
    }
}

/// `/titles/:title_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TitlePath {
    pub title_id: i64,
}

/// `/titles/:title_id/reviews/:review_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReviewPath {
    pub title_id: i64,
    pub review_id: i64,
}

/// `/titles/:title_id/reviews/:review_id/comments/:comment_id`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CommentPath {
    pub title_id: i64,
    pub review_id: i64,
    pub comment_id: i64,
}

/// `/users/:username`
#[derive(Debug, Clone, Deserialize)]
pub struct UsernamePath {
    pub username: String,
}

/// `/categories/:slug`, `/genres/:slug`
#[derive(Debug, Clone, Deserialize)]
pub struct SlugPath {
    pub slug: String,
}
