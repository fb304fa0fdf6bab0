//! Comment service
//!
//! Comments hang off a review, which in turn must belong to the title in
//! the request path.

use tracing::{info, instrument};
use validator::Validate;
use yamdb_core::traits::PageRequest;
use yamdb_core::{require, Action, Actor, Comment, DomainError, NewComment, Resource};

use crate::dto::{CommentResponse, CreateCommentRequest, PaginatedResponse, UpdateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::review::ReviewService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        title_id: i64,
        review_id: i64,
        page: PageRequest,
    ) -> ServiceResult<PaginatedResponse<CommentResponse>> {
        self.ensure_review(title_id, review_id).await?;
        let found = self
            .ctx
            .comment_repo()
            .list_by_review(review_id, page)
            .await?;
        Ok(PaginatedResponse::from_page(found, page, CommentResponse::from))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        title_id: i64,
        review_id: i64,
        comment_id: i64,
    ) -> ServiceResult<CommentResponse> {
        let comment = self.load(title_id, review_id, comment_id).await?;
        Ok(CommentResponse::from(comment))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: &Actor,
        title_id: i64,
        review_id: i64,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        require(actor, Action::Create, Resource::Comment { author_id: None })?;
        let author_id = actor.principal().ok_or(DomainError::NotAuthenticated)?.id;
        request.validate()?;
        self.ensure_review(title_id, review_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                review_id,
                author_id,
                text: request.text,
            })
            .await?;
        info!(comment_id = comment.id, "Comment created");

        Ok(CommentResponse::from(comment))
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: &Actor,
        title_id: i64,
        review_id: i64,
        comment_id: i64,
        request: UpdateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let mut comment = self.load(title_id, review_id, comment_id).await?;
        require(
            actor,
            Action::Update,
            Resource::Comment {
                author_id: Some(comment.author_id),
            },
        )?;
        request.validate()?;

        if let Some(text) = request.text {
            comment.text = text;
        }

        let saved = self.ctx.comment_repo().update(&comment).await?;
        info!(comment_id, "Comment updated");
        Ok(CommentResponse::from(saved))
    }

    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        actor: &Actor,
        title_id: i64,
        review_id: i64,
        comment_id: i64,
    ) -> ServiceResult<()> {
        let comment = self.load(title_id, review_id, comment_id).await?;
        require(
            actor,
            Action::Delete,
            Resource::Comment {
                author_id: Some(comment.author_id),
            },
        )?;

        if !self.ctx.comment_repo().delete(comment.id).await? {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }
        info!(comment_id, "Comment deleted");
        Ok(())
    }

    async fn ensure_review(&self, title_id: i64, review_id: i64) -> ServiceResult<()> {
        ReviewService::new(self.ctx)
            .load(title_id, review_id)
            .await
            .map(|_| ())
    }

    async fn load(&self, title_id: i64, review_id: i64, comment_id: i64) -> ServiceResult<Comment> {
        self.ensure_review(title_id, review_id).await?;
        self.ctx
            .comment_repo()
            .find(review_id, comment_id)
            .await?
            .ok_or_else(|| DomainError::CommentNotFound(comment_id).into())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use yamdb_common::auth::JwtService;
    use yamdb_core::Role;

    use super::*;
    use crate::dto::CreateReviewRequest;
    use crate::services::{ServiceError, TitleService, UserService};
    use crate::testing::Harness;

    fn harness() -> Harness {
        Harness::new(Arc::new(JwtService::new("test-secret", 3600))).unwrap()
    }

    fn comment(text: &str) -> CreateCommentRequest {
        CreateCommentRequest {
            text: text.to_string(),
        }
    }

    /// A title with one review by `author`; returns (title_id, review_id)
    async fn reviewed(h: &Harness, author: &Actor) -> (i64, i64) {
        let title_id = h.seed_title("Solaris", None).await.unwrap();
        let review = ReviewService::new(&h.ctx)
            .create(
                author,
                title_id,
                CreateReviewRequest {
                    text: "Deep".to_string(),
                    score: 9,
                },
            )
            .await
            .unwrap();
        (title_id, review.id)
    }

    #[tokio::test]
    async fn test_comment_lifecycle() {
        let h = harness();
        let (_, author) = h.seed_user("author", Role::User).await.unwrap();
        let (title_id, review_id) = reviewed(&h, &author).await;
        let comments = CommentService::new(&h.ctx);

        let created = comments
            .create(&author, title_id, review_id, comment("Agreed"))
            .await
            .unwrap();
        assert_eq!(created.review, review_id);
        assert_eq!(created.author, "author");

        let updated = comments
            .update(
                &author,
                title_id,
                review_id,
                created.id,
                UpdateCommentRequest {
                    text: Some("Strongly agreed".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.text, "Strongly agreed");

        let page = comments
            .list(title_id, review_id, PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.count, 1);

        comments
            .delete(&author, title_id, review_id, created.id)
            .await
            .unwrap();
        assert_eq!(h.store.comment_count(), 0);
    }

    #[tokio::test]
    async fn test_anonymous_cannot_comment() {
        let h = harness();
        let (_, author) = h.seed_user("author", Role::User).await.unwrap();
        let (title_id, review_id) = reviewed(&h, &author).await;

        let err = CommentService::new(&h.ctx)
            .create(&Actor::Anonymous, title_id, review_id, comment("hi"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 401);
    }

    #[tokio::test]
    async fn test_stranger_cannot_edit_but_admin_can() {
        let h = harness();
        let (_, author) = h.seed_user("author", Role::User).await.unwrap();
        let (_, stranger) = h.seed_user("stranger", Role::User).await.unwrap();
        let (_, admin) = h.seed_user("boss", Role::Admin).await.unwrap();
        let (title_id, review_id) = reviewed(&h, &author).await;
        let comments = CommentService::new(&h.ctx);
        let created = comments
            .create(&author, title_id, review_id, comment("Mine"))
            .await
            .unwrap();

        let err = comments
            .delete(&stranger, title_id, review_id, created.id)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);

        comments
            .delete(&admin, title_id, review_id, created.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_review_must_belong_to_title() {
        let h = harness();
        let (_, author) = h.seed_user("author", Role::User).await.unwrap();
        let (_, review_id) = reviewed(&h, &author).await;
        let other_title = h.seed_title("Mirror", None).await.unwrap();

        let err = CommentService::new(&h.ctx)
            .list(other_title, review_id, PageRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Domain(DomainError::ReviewNotFound(_))));
    }

    #[tokio::test]
    async fn test_title_delete_cascades_to_comments() {
        let h = harness();
        let (_, author) = h.seed_user("author", Role::User).await.unwrap();
        let (_, admin) = h.seed_user("boss", Role::Admin).await.unwrap();
        let (title_id, review_id) = reviewed(&h, &author).await;
        CommentService::new(&h.ctx)
            .create(&author, title_id, review_id, comment("First"))
            .await
            .unwrap();

        TitleService::new(&h.ctx).delete(&admin, title_id).await.unwrap();

        assert_eq!(h.store.review_count(), 0);
        assert_eq!(h.store.comment_count(), 0);
    }

    #[tokio::test]
    async fn test_user_delete_cascades_to_comments() {
        let h = harness();
        let (_, author) = h.seed_user("author", Role::User).await.unwrap();
        let (_, commenter) = h.seed_user("commenter", Role::User).await.unwrap();
        let (_, admin) = h.seed_user("boss", Role::Admin).await.unwrap();
        let (title_id, review_id) = reviewed(&h, &author).await;
        CommentService::new(&h.ctx)
            .create(&commenter, title_id, review_id, comment("Nice"))
            .await
            .unwrap();

        UserService::new(&h.ctx).delete(&admin, "commenter").await.unwrap();

        assert_eq!(h.store.review_count(), 1);
        assert_eq!(h.store.comment_count(), 0);
    }
}
