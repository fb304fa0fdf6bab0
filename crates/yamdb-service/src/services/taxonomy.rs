//! Category and genre service
//!
//! Both taxonomies expose the same three operations (list, create, delete by
//! slug), so one generic service handles them, parameterized by the taxon type.

use tracing::{info, instrument};
use validator::Validate;
use yamdb_core::traits::{PageRequest, TaxonomyRepository};
use yamdb_core::{require, Action, Actor, Category, Genre, NewTaxon, Resource, Taxon};

use crate::dto::{CreateTaxonRequest, PaginatedResponse, TaxonResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A taxon whose repository can be found in the [`ServiceContext`]
pub trait CatalogTaxon: Taxon {
    fn repository(ctx: &ServiceContext) -> &dyn TaxonomyRepository<Self>;
}

impl CatalogTaxon for Category {
    fn repository(ctx: &ServiceContext) -> &dyn TaxonomyRepository<Self> {
        ctx.category_repo()
    }
}

impl CatalogTaxon for Genre {
    fn repository(ctx: &ServiceContext) -> &dyn TaxonomyRepository<Self> {
        ctx.genre_repo()
    }
}

/// Taxonomy service for categories or genres
pub struct TaxonomyService<'a, T> {
    ctx: &'a ServiceContext,
    _kind: std::marker::PhantomData<fn() -> T>,
}

impl<'a, T: CatalogTaxon> TaxonomyService<'a, T> {
    /// Create a new TaxonomyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            _kind: std::marker::PhantomData,
        }
    }

    fn repo(&self) -> &dyn TaxonomyRepository<T> {
        T::repository(self.ctx)
    }

    /// List entries, optionally filtered by a name substring. Open to everyone.
    #[instrument(skip(self), fields(kind = T::KIND.label()))]
    pub async fn list(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<TaxonResponse>> {
        let found = self.repo().list(search, page).await?;
        Ok(PaginatedResponse::from_page(found, page, |t| {
            TaxonResponse::from_taxon(&t)
        }))
    }

    /// Create an entry (administrators only)
    #[instrument(skip(self, request), fields(kind = T::KIND.label(), slug = %request.slug))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateTaxonRequest,
    ) -> ServiceResult<TaxonResponse> {
        require(actor, Action::Create, Resource::Catalog)?;
        request.validate()?;

        let new_taxon = NewTaxon::new(request.name, request.slug);
        new_taxon.validate()?;

        let created = self.repo().create(&new_taxon).await?;
        info!(id = created.id(), "Taxon created");
        Ok(TaxonResponse::from_taxon(&created))
    }

    /// Delete an entry by slug (administrators only)
    #[instrument(skip(self), fields(kind = T::KIND.label()))]
    pub async fn delete(&self, actor: &Actor, slug: &str) -> ServiceResult<()> {
        require(actor, Action::Delete, Resource::Catalog)?;

        if !self.repo().delete_by_slug(slug).await? {
            return Err(T::KIND.not_found(slug).into());
        }
        info!(slug, "Taxon deleted");
        Ok(())
    }
}
