use super::{StoreError, WorkoutStore};
use crate::models::{Goal, NewGoal};

pub(super) const GOAL_COLUMNS: &str =
    "SELECT id, description, target, currentProgress, type, deadline, isActive FROM goals";

impl WorkoutStore {
    /// Insert a goal. New goals are always active; existing active goals are
    /// left as they are.
    pub async fn add_goal(&self, goal: &NewGoal) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO goals (description, target, currentProgress, type, deadline, isActive)
            VALUES (?1, ?2, ?3, ?4, ?5, 1)
            "#,
        )
        .bind(&goal.description)
        .bind(goal.target)
        .bind(goal.current_progress)
        .bind(goal.workout_type)
        .bind(goal.deadline)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        log::debug!("Goal {} added: {}", id, goal.description);
        Ok(id)
    }

    /// All goals, earliest deadline first
    pub async fn get_goals(&self) -> Result<Vec<Goal>, StoreError> {
        let goals =
            sqlx::query_as::<_, Goal>(&format!("{} ORDER BY deadline ASC, id ASC", GOAL_COLUMNS))
                .fetch_all(&self.pool)
                .await?;

        Ok(goals)
    }

    /// Active goals, earliest deadline first. Several can be active at once.
    pub async fn get_active_goals(&self) -> Result<Vec<Goal>, StoreError> {
        let goals = sqlx::query_as::<_, Goal>(&format!(
            "{} WHERE isActive = 1 ORDER BY deadline ASC, id ASC",
            GOAL_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(goals)
    }

    /// The active goal with the earliest deadline
    pub async fn get_active_goal(&self) -> Result<Option<Goal>, StoreError> {
        let goal = sqlx::query_as::<_, Goal>(&format!(
            "{} WHERE isActive = 1 ORDER BY deadline ASC, id ASC LIMIT 1",
            GOAL_COLUMNS
        ))
        .fetch_optional(&self.pool)
        .await?;

        Ok(goal)
    }

    /// Add `delta` km to a goal's progress. Returns false if no such goal.
    pub async fn update_goal_progress(&self, goal_id: i64, delta: f64) -> Result<bool, StoreError> {
        let result =
            sqlx::query("UPDATE goals SET currentProgress = currentProgress + ?1 WHERE id = ?2")
                .bind(delta)
                .bind(goal_id)
                .execute(&self.pool)
                .await?;

        let updated = result.rows_affected() > 0;
        if !updated {
            log::warn!("Progress update for missing goal {}", goal_id);
        }
        Ok(updated)
    }

    /// Deactivate a goal. There is no transition back to active.
    pub async fn mark_goal_as_completed(&self, goal_id: i64) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE goals SET isActive = 0 WHERE id = ?1")
            .bind(goal_id)
            .execute(&self.pool)
            .await?;

        let updated = result.rows_affected() > 0;
        if updated {
            log::debug!("Goal {} marked as completed", goal_id);
        } else {
            log::warn!("Completion requested for missing goal {}", goal_id);
        }
        Ok(updated)
    }
}
