//! Review service
//!
//! Reviews are nested under a title. Each user may review a title once;
//! editing an existing review is never blocked by that rule.

use tracing::{info, instrument};
use validator::Validate;
use yamdb_core::traits::PageRequest;
use yamdb_core::{require, Action, Actor, DomainError, NewReview, Resource, Review, Score};

use crate::dto::{CreateReviewRequest, PaginatedResponse, ReviewResponse, UpdateReviewRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Review service
pub struct ReviewService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReviewService<'a> {
    /// Create a new ReviewService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List a title's reviews, newest first
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        title_id: i64,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<ReviewResponse>> {
        self.ensure_title(title_id).await?;
        let found = self.ctx.review_repo().list_by_title(title_id, page).await?;
        Ok(PaginatedResponse::from_page(found, page, ReviewResponse::from))
    }

    /// Fetch one review of a title
    #[instrument(skip(self))]
    pub async fn get(&self, title_id: i64, review_id: i64) -> ServiceResult<ReviewResponse> {
        Ok(ReviewResponse::from(self.load(title_id, review_id).await?))
    }

    /// Review a title as the calling user
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        title_id: i64,
        request: CreateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        require(actor, Action::Create, Resource::Review { author_id: None })?;
        let author_id = actor.principal().ok_or(DomainError::NotAuthenticated)?.id;
        request.validate()?;
        let score = Score::new(request.score)?;

        self.ensure_title(title_id).await?;

        // The unique (title, author) constraint is authoritative; this only
        // answers early in the common case.
        if self
            .ctx
            .review_repo()
            .exists_for_author(title_id, author_id)
            .await?
        {
            return Err(DomainError::DuplicateReview.into());
        }

        let review = self
            .ctx
            .review_repo()
            .create(&NewReview {
                title_id,
                author_id,
                text: request.text,
                score,
            })
            .await?;
        info!(review_id = review.id, score = score.get(), "Review created");

        Ok(ReviewResponse::from(review))
    }

    /// Edit text and/or score (author, moderator or administrator)
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        title_id: i64,
        review_id: i64,
        request: UpdateReviewRequest,
    ) -> ServiceResult<ReviewResponse> {
        let mut review = self.load(title_id, review_id).await?;
        require(
            actor,
            Action::Update,
            Resource::Review {
                author_id: Some(review.author_id),
            },
        )?;
        request.validate()?;

        if let Some(score) = request.score {
            review.score = Score::new(score)?;
        }
        if let Some(text) = request.text {
            review.text = text;
        }

        let saved = self.ctx.review_repo().update(&review).await?;
        info!(review_id, "Review updated");
        Ok(ReviewResponse::from(saved))
    }

    /// Delete a review and its comments (author, moderator or administrator)
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: &Actor, title_id: i64, review_id: i64) -> ServiceResult<()> {
        let review = self.load(title_id, review_id).await?;
        require(
            actor,
            Action::Delete,
            Resource::Review {
                author_id: Some(review.author_id),
            },
        )?;

        if !self.ctx.review_repo().delete(review.id).await? {
            return Err(DomainError::ReviewNotFound(review_id).into());
        }
        info!(review_id, "Review deleted");
        Ok(())
    }

    async fn ensure_title(&self, title_id: i64) -> ServiceResult<()> {
        match self.ctx.title_repo().find_by_id(title_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::TitleNotFound(title_id).into()),
        }
    }

    /// Load a review, requiring it to belong to `title_id`
    pub(crate) async fn load(&self, title_id: i64, review_id: i64) -> ServiceResult<Review> {
        self.ensure_title(title_id).await?;
        self.ctx
            .review_repo()
            .find(title_id, review_id)
            .await?
            .ok_or_else(|| DomainError::ReviewNotFound(review_id).into())
    }
}
