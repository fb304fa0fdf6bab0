//! PostgreSQL implementation of ReviewRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use yamdb_core::{
    DomainError, NewReview, Page, PageRequest, RepoResult, Review, ReviewRepository,
};

use crate::models::ReviewModel;

use super::error::{map_db_error, map_unique_violation, try_collect};

/// Select list over `reviews r` joined with `titles t` and `users u`
const REVIEW_COLUMNS: &str = r"
    r.id, r.title_id, t.name AS title_name, r.author_id, u.username AS author_username,
    r.text, r.score, r.pub_date
";

/// PostgreSQL implementation of ReviewRepository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    #[instrument(skip(self))]
    async fn find(&self, title_id: i64, review_id: i64) -> RepoResult<Option<Review>> {
        let result = sqlx::query_as::<_, ReviewModel>(&format!(
            r"
            SELECT {REVIEW_COLUMNS}
            FROM reviews r
            JOIN titles t ON t.id = r.title_id
            JOIN users u ON u.id = r.author_id
            WHERE r.id = $1 AND r.title_id = $2
            "
        ))
        .bind(review_id)
        .bind(title_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Review::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn exists_for_author(&self, title_id: i64, author_id: i64) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM reviews WHERE title_id = $1 AND author_id = $2)",
        )
        .bind(title_id)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_by_title(&self, title_id: i64, page: PageRequest) -> RepoResult<Page<Review>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reviews WHERE title_id = $1")
            .bind(title_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, ReviewModel>(&format!(
            r"
            SELECT {REVIEW_COLUMNS}
            FROM reviews r
            JOIN titles t ON t.id = r.title_id
            JOIN users u ON u.id = r.author_id
            WHERE r.title_id = $1
            ORDER BY r.pub_date DESC, r.id DESC
            LIMIT $2 OFFSET $3
            "
        ))
        .bind(title_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Page::new(try_collect(rows)?, total))
    }

    #[instrument(skip(self, review), fields(title_id = review.title_id, author_id = review.author_id))]
    async fn create(&self, review: &NewReview) -> RepoResult<Review> {
        let model = sqlx::query_as::<_, ReviewModel>(&format!(
            r"
            WITH r AS (
                INSERT INTO reviews (title_id, author_id, text, score)
                VALUES ($1, $2, $3, $4)
                RETURNING id, title_id, author_id, text, score, pub_date
            )
            SELECT {REVIEW_COLUMNS}
            FROM r
            JOIN titles t ON t.id = r.title_id
            JOIN users u ON u.id = r.author_id
            "
        ))
        .bind(review.title_id)
        .bind(review.author_id)
        .bind(&review.text)
        .bind(review.score.get())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, |_| DomainError::DuplicateReview))?;

        Review::try_from(model)
    }

    #[instrument(skip(self, review), fields(review_id = review.id))]
    async fn update(&self, review: &Review) -> RepoResult<Review> {
        let model = sqlx::query_as::<_, ReviewModel>(&format!(
            r"
            WITH r AS (
                UPDATE reviews SET text = $2, score = $3
                WHERE id = $1
                RETURNING id, title_id, author_id, text, score, pub_date
            )
            SELECT {REVIEW_COLUMNS}
            FROM r
            JOIN titles t ON t.id = r.title_id
            JOIN users u ON u.id = r.author_id
            "
        ))
        .bind(review.id)
        .bind(&review.text)
        .bind(review.score.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ReviewNotFound(review.id))?;

        Review::try_from(model)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
