//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock data factories
//! - Helper assertions

use crate::db::{run_migrations, DbPool};
use crate::models::{NewGoal, NewWorkout, UserProfile, WorkoutType};
use crate::store::WorkoutStore;
use chrono::{Duration, NaiveDate};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> DbPool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  run_migrations(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

pub async fn setup_test_store() -> WorkoutStore {
  WorkoutStore::new(setup_test_db().await)
}

pub async fn teardown_test_store(store: WorkoutStore) {
  store.close().await;
}

/// Seed the store with `count` workouts on consecutive days ending 2025-01-31,
/// alternating Run and Trail. Returns the ids of created workouts.
pub async fn seed_test_workouts(store: &WorkoutStore, count: usize) -> Vec<i64> {
  let last_day = date(2025, 1, 31);
  let mut workout_ids = Vec::new();

  for i in 0..count {
    let workout_type = if i % 2 == 0 { WorkoutType::Run } else { WorkoutType::Trail };
    let day = last_day - Duration::days(i as i64);
    let workout = NewWorkout::new(day, 5.0 + i as f64, 30 + i as i64, workout_type);

    let id = store
      .add_workout_as_of(&workout, last_day)
      .await
      .expect("Failed to insert test workout");
    workout_ids.push(id);
  }

  workout_ids
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
  NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
}

pub fn mock_goal(workout_type: Option<WorkoutType>, deadline: NaiveDate) -> NewGoal {
  NewGoal::new("Monthly distance", 20.0, workout_type, deadline)
}

pub fn mock_user_profile() -> UserProfile {
  UserProfile {
    name: "Ana".to_string(),
    age: 29,
    height: 165.0,
    weight: 58.0,
  }
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('workouts', 'goals')",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 2, "Expected 2 tables, got {}", tables.len());

    pool.close().await;
  }

  #[tokio::test]
  async fn test_seed_workouts_returns_correct_count() {
    let store = setup_test_store().await;

    let ids = seed_test_workouts(&store, 5).await;
    assert_eq!(ids.len(), 5);

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
      .fetch_one(store.pool())
      .await
      .expect("Failed to count workouts");

    assert_eq!(count, 5);

    teardown_test_store(store).await;
  }
}
