use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

use crate::store::StoreError;

pub type DbPool = SqlitePool;

/// Open (creating if needed) the database file and run migrations
pub async fn initialize_db(db_path: &Path) -> Result<DbPool, StoreError> {
  log::info!("Initializing database at: {}", db_path.display());

  let options = SqliteConnectOptions::new()
    .filename(db_path)
    .create_if_missing(true);

  // Calls are issued one at a time by the UI; a single connection keeps
  // writes strictly ordered.
  let pool = SqlitePoolOptions::new()
    .max_connections(1)
    .connect_with(options)
    .await?;

  run_migrations(&pool).await?;

  log::info!("Database initialized successfully");

  Ok(pool)
}

/// Apply every migration under ./migrations not yet recorded in `_sqlx_migrations`
pub async fn run_migrations(pool: &DbPool) -> Result<(), StoreError> {
  sqlx::migrate!("./migrations").run(pool).await?;
  Ok(())
}

/// Highest applied migration version, 0 for an unmigrated database
pub async fn schema_version(pool: &DbPool) -> Result<i64, StoreError> {
  let exists: i64 = sqlx::query_scalar(
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
  )
  .fetch_one(pool)
  .await?;

  if exists == 0 {
    return Ok(0);
  }

  let version: Option<i64> =
    sqlx::query_scalar("SELECT MAX(version) FROM _sqlx_migrations WHERE success = 1")
      .fetch_one(pool)
      .await?;

  Ok(version.unwrap_or(0))
}
