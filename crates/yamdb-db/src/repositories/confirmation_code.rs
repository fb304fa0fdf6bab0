//! PostgreSQL implementation of ConfirmationCodeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use yamdb_core::{ConfirmationCode, ConfirmationCodeRepository, RepoResult};

use crate::models::ConfirmationCodeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ConfirmationCodeRepository
#[derive(Clone)]
pub struct PgConfirmationCodeRepository {
    pool: PgPool,
}

impl PgConfirmationCodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfirmationCodeRepository for PgConfirmationCodeRepository {
    #[instrument(skip(self, code), fields(user_id = code.user_id))]
    async fn store(&self, code: &ConfirmationCode) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO confirmation_codes (user_id, code_hash, expires_at, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id) DO UPDATE
            SET code_hash = EXCLUDED.code_hash,
                expires_at = EXCLUDED.expires_at,
                created_at = EXCLUDED.created_at
            ",
        )
        .bind(code.user_id)
        .bind(&code.code_hash)
        .bind(code.expires_at)
        .bind(code.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: i64) -> RepoResult<Option<ConfirmationCode>> {
        let result = sqlx::query_as::<_, ConfirmationCodeModel>(
            r"
            SELECT user_id, code_hash, expires_at, created_at
            FROM confirmation_codes
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ConfirmationCode::from))
    }
}
