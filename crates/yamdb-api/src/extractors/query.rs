//! Filter query extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use yamdb_core::traits::TitleQuery;

use crate::response::ApiError;

/// Query-string extractor whose rejection is an [`ApiError`]
#[derive(Debug, Clone, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(inner) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;
        Ok(ApiQuery(inner))
    }
}

/// `?search=` substring filter for user and taxonomy listings
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: Option<String>,
}

impl SearchParams {
    /// The search term, ignoring blank values
    pub fn term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

/// Title listing filters
#[derive(Debug, Default, Deserialize)]
pub struct TitleFilterParams {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<TitleFilterParams> for TitleQuery {
    fn from(params: TitleFilterParams) -> Self {
        let non_empty = |value: Option<String>| value.filter(|s| !s.is_empty());
        Self {
            name: non_empty(params.name),
            year: params.year,
            genre: non_empty(params.genre),
            category: non_empty(params.category),
        }
    }
}
