//! Title service
//!
//! Catalog works. Writes reference their category and genres by slug; the
//! slugs are resolved here so storage only ever sees ids.

use chrono::{Datelike, Utc};
use tracing::{info, instrument};
use validator::Validate;
use yamdb_core::traits::{PageRequest, TitleQuery};
use yamdb_core::{
    require, Action, Actor, DomainError, Resource, Taxon, Title, TitleDraft,
};

use crate::dto::{CreateTitleRequest, PaginatedResponse, TitleResponse, UpdateTitleRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Title service
pub struct TitleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TitleService<'a> {
    /// Create a new TitleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List titles matching the filters. Open to everyone.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        query: &TitleQuery,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<TitleResponse>> {
        let found = self.ctx.title_repo().list(query, page).await?;
        Ok(PaginatedResponse::from_page(found, page, TitleResponse::from))
    }

    /// Fetch one title with its rating. Open to everyone.
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<TitleResponse> {
        Ok(TitleResponse::from(self.load(id).await?))
    }

    /// Create a title (administrators only)
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateTitleRequest,
    ) -> ServiceResult<TitleResponse> {
        require(actor, Action::Create, Resource::Catalog)?;
        request.validate()?;

        let draft = TitleDraft {
            name: request.name,
            year: request.year,
            description: request.description,
            category_id: self.resolve_category(request.category.as_deref()).await?,
            genre_ids: self.resolve_genres(&request.genre).await?,
        };
        draft.validate(current_year())?;

        let id = self.ctx.title_repo().create(&draft).await?;
        info!(title_id = id, "Title created");

        self.get(id).await
    }

    /// Partially update a title (administrators only)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        id: i64,
        request: UpdateTitleRequest,
    ) -> ServiceResult<TitleResponse> {
        require(actor, Action::Update, Resource::Catalog)?;
        request.validate()?;
        let current = self.load(id).await?;

        let mut draft = TitleDraft {
            name: current.name,
            year: current.year,
            description: current.description,
            category_id: current.category.map(|c| c.id),
            genre_ids: current.genres.iter().map(Taxon::id).collect(),
        };
        if let Some(name) = request.name {
            draft.name = name;
        }
        if let Some(year) = request.year {
            draft.year = Some(year);
        }
        if let Some(description) = request.description {
            draft.description = Some(description);
        }
        if let Some(category) = request.category.as_deref() {
            draft.category_id = self.resolve_category(Some(category)).await?;
        }
        if let Some(genres) = request.genre.as_deref() {
            draft.genre_ids = self.resolve_genres(genres).await?;
        }
        draft.validate(current_year())?;

        if !self.ctx.title_repo().update(id, &draft).await? {
            return Err(DomainError::TitleNotFound(id).into());
        }
        info!(title_id = id, "Title updated");

        self.get(id).await
    }

    /// Delete a title with all its reviews and comments (administrators only)
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, id: i64) -> ServiceResult<()> {
        require(actor, Action::Delete, Resource::Catalog)?;

        if !self.ctx.title_repo().delete(id).await? {
            return Err(DomainError::TitleNotFound(id).into());
        }
        info!(title_id = id, "Title deleted");
        Ok(())
    }

    async fn load(&self, id: i64) -> ServiceResult<Title> {
        self.ctx
            .title_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::TitleNotFound(id).into())
    }

    async fn resolve_category(&self, slug: Option<&str>) -> ServiceResult<Option<i64>> {
        let Some(slug) = slug else {
            return Ok(None);
        };
        let category = self
            .ctx
            .category_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::ValidationError(format!("unknown category '{slug}'")))?;
        Ok(Some(category.id))
    }

    async fn resolve_genres(&self, slugs: &[String]) -> ServiceResult<Vec<i64>> {
        let mut wanted: Vec<String> = slugs.to_vec();
        wanted.sort();
        wanted.dedup();

        let found = self.ctx.genre_repo().find_by_slugs(&wanted).await?;
        if let Some(missing) = wanted
            .iter()
            .find(|slug| !found.iter().any(|g| &g.slug == *slug))
        {
            return Err(DomainError::ValidationError(format!("unknown genre '{missing}'")).into());
        }

        Ok(found.iter().map(Taxon::id).collect())
    }
}

fn current_year() -> i32 {
    Utc::now().year()
}
