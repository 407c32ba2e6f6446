use chrono::{Datelike, Local};
use sqlx::Row;

use super::{StoreError, WorkoutStore};
use crate::models::{MonthStats, WorkoutSummary, WorkoutType};

impl WorkoutStore {
  /// Sum of all distances, 0 when there are no workouts
  pub async fn get_total_distance(&self) -> Result<f64, StoreError> {
    let total: f64 = sqlx::query_scalar("SELECT COALESCE(SUM(distance), 0.0) FROM workouts")
      .fetch_one(&self.pool)
      .await?;
    Ok(total)
  }

  pub async fn get_total_distance_by_type(
    &self,
    workout_type: WorkoutType,
  ) -> Result<f64, StoreError> {
    let total: f64 =
      sqlx::query_scalar("SELECT COALESCE(SUM(distance), 0.0) FROM workouts WHERE type = ?1")
        .bind(workout_type)
        .fetch_one(&self.pool)
        .await?;
    Ok(total)
  }

  /// Count and distance over the whole history
  pub async fn get_workout_summary(&self) -> Result<WorkoutSummary, StoreError> {
    let row = sqlx::query(
      r#"
      SELECT COUNT(*) AS total_workouts, COALESCE(SUM(distance), 0.0) AS total_distance
      FROM workouts
      "#,
    )
    .fetch_one(&self.pool)
    .await?;

    Ok(WorkoutSummary {
      total_workouts: row.try_get("total_workouts")?,
      total_distance: row.try_get("total_distance")?,
    })
  }

  pub async fn get_current_month_stats(&self) -> Result<MonthStats, StoreError> {
    let today = Local::now().date_naive();
    self.get_month_stats(today.year(), today.month()).await
  }

  /// Aggregates over workouts dated in `year`-`month` (matched on the
  /// `YYYY-MM` prefix of the stored date). Zeros when nothing matches.
  pub async fn get_month_stats(&self, year: i32, month: u32) -> Result<MonthStats, StoreError> {
    let prefix = format!("{:04}-{:02}", year, month);

    let row = sqlx::query(
      r#"
      SELECT
        COALESCE(SUM(distance), 0.0) AS total_distance,
        COUNT(*) AS total_workouts,
        COALESCE(AVG(pace), 0.0) AS average_pace
      FROM workouts
      WHERE substr(date, 1, 7) = ?1
      "#,
    )
    .bind(&prefix)
    .fetch_one(&self.pool)
    .await?;

    Ok(MonthStats {
      total_distance: row.try_get("total_distance")?,
      total_workouts: row.try_get("total_workouts")?,
      average_pace: row.try_get("average_pace")?,
    })
  }
}
