use chrono::{Local, NaiveDate};
use sqlx::SqliteConnection;

use super::{goals::GOAL_COLUMNS, StoreError, WorkoutStore};
use crate::models::{Goal, NewWorkout, Workout, WorkoutType};

const WORKOUT_COLUMNS: &str = "SELECT id, date, distance, time, type, pace FROM workouts";

/// Insert the row and credit every goal that accepts it.
/// Returns the new workout id and the ids of the credited goals.
async fn insert_and_credit_goals(
  conn: &mut SqliteConnection,
  workout: &NewWorkout,
  today: NaiveDate,
) -> Result<(i64, Vec<i64>), StoreError> {
  let result = sqlx::query(
    r#"
    INSERT INTO workouts (date, distance, time, type, pace)
    VALUES (?1, ?2, ?3, ?4, ?5)
    "#,
  )
  .bind(workout.date)
  .bind(workout.distance)
  .bind(workout.time)
  .bind(workout.workout_type)
  .bind(workout.pace())
  .execute(&mut *conn)
  .await?;

  let workout_id = result.last_insert_rowid();

  let active_goals = sqlx::query_as::<_, Goal>(&format!("{} WHERE isActive = 1", GOAL_COLUMNS))
    .fetch_all(&mut *conn)
    .await?;

  let mut credited = Vec::new();
  for goal in active_goals.iter().filter(|g| g.accepts(workout.workout_type, today)) {
    sqlx::query("UPDATE goals SET currentProgress = currentProgress + ?1 WHERE id = ?2")
      .bind(workout.distance)
      .bind(goal.id)
      .execute(&mut *conn)
      .await?;
    credited.push(goal.id);
  }

  Ok((workout_id, credited))
}

impl WorkoutStore {
  /// Log a workout dated by the caller, crediting goals as of today's local date
  pub async fn add_workout(&self, workout: &NewWorkout) -> Result<i64, StoreError> {
    self.add_workout_as_of(workout, Local::now().date_naive()).await
  }

  /// Insert the workout and apply goal progress in one transaction.
  ///
  /// `today` decides which goals are past their deadline.
  pub async fn add_workout_as_of(
    &self,
    workout: &NewWorkout,
    today: NaiveDate,
  ) -> Result<i64, StoreError> {
    let mut tx = self.pool.begin().await?;

    match insert_and_credit_goals(&mut tx, workout, today).await {
      Ok((workout_id, credited)) => {
        tx.commit().await?;
        log::debug!(
          "Workout {} added ({} km {}), credited goals {:?}",
          workout_id,
          workout.distance,
          workout.workout_type,
          credited
        );
        Ok(workout_id)
      }
      Err(e) => {
        log::error!("Failed to add workout, rolling back: {}", e);
        if let Err(rollback_err) = tx.rollback().await {
          log::warn!("Rollback after failed workout insert also failed: {}", rollback_err);
        }
        Err(e)
      }
    }
  }

  /// All workouts, newest date first
  pub async fn get_workouts(&self) -> Result<Vec<Workout>, StoreError> {
    let workouts =
      sqlx::query_as::<_, Workout>(&format!("{} ORDER BY date DESC, id DESC", WORKOUT_COLUMNS))
        .fetch_all(&self.pool)
        .await?;

    Ok(workouts)
  }

  pub async fn get_workout(&self, id: i64) -> Result<Option<Workout>, StoreError> {
    let workout = sqlx::query_as::<_, Workout>(&format!("{} WHERE id = ?1", WORKOUT_COLUMNS))
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;

    Ok(workout)
  }

  pub async fn get_workouts_by_type(
    &self,
    workout_type: WorkoutType,
  ) -> Result<Vec<Workout>, StoreError> {
    let workouts = sqlx::query_as::<_, Workout>(&format!(
      "{} WHERE type = ?1 ORDER BY date DESC, id DESC",
      WORKOUT_COLUMNS
    ))
    .bind(workout_type)
    .fetch_all(&self.pool)
    .await?;

    Ok(workouts)
  }
}
