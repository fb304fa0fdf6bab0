//! Database schema
//!
//! Every statement is idempotent, so the schema can be applied on each startup.

use sqlx::PgPool;
use tracing::info;

/// The full schema, embedded at compile time
pub const SCHEMA: &str = include_str!("schema.sql");

/// Apply the schema to the database
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
