//! PostgreSQL implementation of TitleRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashMap;
use tracing::instrument;

use yamdb_core::{
    Genre, Page, PageRequest, RepoResult, Title, TitleDraft, TitleQuery, TitleRepository,
};

use crate::mappers::title_with_genres;
use crate::models::{TitleGenreModel, TitleModel};

use super::error::map_db_error;

const TITLE_SELECT: &str = r"
    SELECT t.id, t.name, t.year, t.description, t.category_id,
           c.name AS category_name, c.slug AS category_slug,
           (SELECT AVG(r.score)::float8 FROM reviews r WHERE r.title_id = t.id) AS rating
    FROM titles t
    LEFT JOIN categories c ON c.id = t.category_id
";

/// Filter placeholders: $1 name, $2 year, $3 genre slug, $4 category slug
const TITLE_FILTER: &str = r"
    WHERE ($1::text IS NULL OR strpos(t.name, $1) > 0)
      AND ($2::int4 IS NULL OR t.year = $2)
      AND ($3::text IS NULL OR EXISTS (
            SELECT 1 FROM title_genres tg
            JOIN genres g ON g.id = tg.genre_id
            WHERE tg.title_id = t.id AND strpos(g.slug, $3) > 0))
      AND ($4::text IS NULL OR strpos(c.slug, $4) > 0)
";

/// PostgreSQL implementation of TitleRepository
#[derive(Clone)]
pub struct PgTitleRepository {
    pool: PgPool,
}

impl PgTitleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load genres for several titles in one query, grouped by title
    async fn load_genres(&self, title_ids: &[i64]) -> RepoResult<HashMap<i64, Vec<Genre>>> {
        let rows = sqlx::query_as::<_, TitleGenreModel>(
            r"
            SELECT tg.title_id, g.id, g.name, g.slug
            FROM title_genres tg
            JOIN genres g ON g.id = tg.genre_id
            WHERE tg.title_id = ANY($1)
            ORDER BY g.name
            ",
        )
        .bind(title_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut grouped: HashMap<i64, Vec<Genre>> = HashMap::new();
        for row in rows {
            grouped.entry(row.title_id).or_default().push(Genre::from(row));
        }
        Ok(grouped)
    }

    async fn link_genres(
        tx: &mut Transaction<'_, Postgres>,
        title_id: i64,
        genre_ids: &[i64],
    ) -> RepoResult<()> {
        if genre_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r"
            INSERT INTO title_genres (title_id, genre_id)
            SELECT $1, UNNEST($2::bigint[])
            ON CONFLICT DO NOTHING
            ",
        )
        .bind(title_id)
        .bind(genre_ids)
        .execute(&mut **tx)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl TitleRepository for PgTitleRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Title>> {
        let model = sqlx::query_as::<_, TitleModel>(&format!("{TITLE_SELECT} WHERE t.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let genres = self
            .load_genres(&[model.id])
            .await?
            .remove(&model.id)
            .unwrap_or_default();

        Ok(Some(title_with_genres(model, genres)))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &TitleQuery, page: PageRequest) -> RepoResult<Page<Title>> {
        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM titles t LEFT JOIN categories c ON c.id = t.category_id {TITLE_FILTER}"
        ))
        .bind(query.name.as_deref())
        .bind(query.year)
        .bind(query.genre.as_deref())
        .bind(query.category.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        let rows = sqlx::query_as::<_, TitleModel>(&format!(
            "{TITLE_SELECT} {TITLE_FILTER}
             ORDER BY t.year DESC NULLS LAST, t.category_id NULLS LAST, t.id
             LIMIT $5 OFFSET $6"
        ))
        .bind(query.name.as_deref())
        .bind(query.year)
        .bind(query.genre.as_deref())
        .bind(query.category.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = rows.iter().map(|m| m.id).collect();
        let mut genres = self.load_genres(&ids).await?;

        let items = rows
            .into_iter()
            .map(|model| {
                let title_genres = genres.remove(&model.id).unwrap_or_default();
                title_with_genres(model, title_genres)
            })
            .collect();

        Ok(Page::new(items, total))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: &TitleDraft) -> RepoResult<i64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO titles (name, year, description, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&draft.name)
        .bind(draft.year)
        .bind(draft.description.as_deref())
        .bind(draft.category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        Self::link_genres(&mut tx, id, &draft.genre_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(id)
    }

    #[instrument(skip(self, draft))]
    async fn update(&self, id: i64, draft: &TitleDraft) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE titles
            SET name = $2, year = $3, description = $4, category_id = $5
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.year)
        .bind(draft.description.as_deref())
        .bind(draft.category_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        sqlx::query("DELETE FROM title_genres WHERE title_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        Self::link_genres(&mut tx, id, &draft.genre_ids).await?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM titles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgTitleRepository>();
    }

    #[test]
    fn test_filter_placeholders() {
        for placeholder in ["$1", "$2", "$3", "$4"] {
            assert!(TITLE_FILTER.contains(placeholder));
        }
        assert!(!TITLE_FILTER.contains("$5"));
    }
}
