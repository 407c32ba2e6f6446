//! Workout and goal persistence
//!
//! `WorkoutStore` owns the SQLite pool for the life of the process. Workouts
//! are write-once; goals only change through progress updates (the add-workout
//! fan-out or an explicit increment) and completion.

mod goals;
mod stats;
mod workouts;

use serde::Serialize;

use crate::db::{self, DbPool};

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration failed: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),
}

impl Serialize for StoreError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// Typed access to the `workouts` and `goals` tables
#[derive(Debug, Clone)]
pub struct WorkoutStore {
  pool: DbPool,
}

impl WorkoutStore {
  /// Wrap a pool whose migrations have already run (see `db::initialize_db`)
  pub fn new(pool: DbPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &DbPool {
    &self.pool
  }

  pub async fn schema_version(&self) -> Result<i64, StoreError> {
    db::schema_version(&self.pool).await
  }

  /// Delete every workout and goal and restart id assignment. Schema is kept.
  pub async fn truncate_tables(&self) -> Result<(), StoreError> {
    let mut tx = self.pool.begin().await?;

    sqlx::query("DELETE FROM workouts").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM goals").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM sqlite_sequence WHERE name IN ('workouts', 'goals')")
      .execute(&mut *tx)
      .await?;

    tx.commit().await?;
    log::info!("Workout and goal tables truncated");
    Ok(())
  }

  pub async fn close(self) {
    self.pool.close().await;
  }
}
