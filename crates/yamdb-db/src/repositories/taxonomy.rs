//! PostgreSQL implementation of TaxonomyRepository
//!
//! Categories and genres live in identically shaped tables; one generic
//! repository serves both, picking the table from the taxon kind.

use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;
use tracing::instrument;

use yamdb_core::{
    Category, Genre, NewTaxon, Page, PageRequest, RepoResult, Taxon, TaxonomyRepository,
};

use crate::mappers::taxon_from_model;
use crate::models::TaxonModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL repository for one taxonomy
pub struct PgTaxonomyRepository<T> {
    pool: PgPool,
    _taxon: PhantomData<fn() -> T>,
}

/// Categories repository
pub type PgCategoryRepository = PgTaxonomyRepository<Category>;

/// Genres repository
pub type PgGenreRepository = PgTaxonomyRepository<Genre>;

impl<T: Taxon> PgTaxonomyRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _taxon: PhantomData,
        }
    }

    fn table() -> &'static str {
        T::KIND.table()
    }
}

impl<T> Clone for PgTaxonomyRepository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _taxon: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Taxon> TaxonomyRepository<T> for PgTaxonomyRepository<T> {
    #[instrument(skip(self), fields(kind = T::KIND.label()))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<T>> {
        let result = sqlx::query_as::<_, TaxonModel>(&format!(
            "SELECT id, name, slug FROM {} WHERE slug = $1",
            Self::table()
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(taxon_from_model))
    }

    #[instrument(skip(self), fields(kind = T::KIND.label()))]
    async fn find_by_slugs(&self, slugs: &[String]) -> RepoResult<Vec<T>> {
        if slugs.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, TaxonModel>(&format!(
            "SELECT id, name, slug FROM {} WHERE slug = ANY($1) ORDER BY name",
            Self::table()
        ))
        .bind(slugs)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(taxon_from_model).collect())
    }

    #[instrument(skip(self), fields(kind = T::KIND.label()))]
    async fn list(&self, search: Option<&str>, page: PageRequest) -> RepoResult<Page<T>> {
        let filter = "($1::text IS NULL OR strpos(lower(name), lower($1)) > 0)";

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {} WHERE {filter}",
            Self::table()
        ))
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, TaxonModel>(&format!(
            "SELECT id, name, slug FROM {} WHERE {filter} ORDER BY name LIMIT $2 OFFSET $3",
            Self::table()
        ))
        .bind(search)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(taxon_from_model).collect(),
            total,
        ))
    }

    #[instrument(skip(self), fields(kind = T::KIND.label()))]
    async fn create(&self, taxon: &NewTaxon) -> RepoResult<T> {
        let model = sqlx::query_as::<_, TaxonModel>(&format!(
            "INSERT INTO {} (name, slug) VALUES ($1, $2) RETURNING id, name, slug",
            Self::table()
        ))
        .bind(&taxon.name)
        .bind(&taxon.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| T::KIND.already_exists()))?;

        Ok(taxon_from_model(model))
    }

    #[instrument(skip(self), fields(kind = T::KIND.label()))]
    async fn delete_by_slug(&self, slug: &str) -> RepoResult<bool> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE slug = $1", Self::table()))
            .bind(slug)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
