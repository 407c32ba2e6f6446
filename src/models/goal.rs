use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WorkoutType;

/// A persisted distance goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
  pub id: i64,
  pub description: String,
  /// Target in kilometers
  pub target: f64,
  /// Kilometers accumulated so far, never capped at `target`
  #[sqlx(rename = "currentProgress")]
  pub current_progress: f64,
  /// When set, only workouts of this type count toward the goal
  #[serde(rename = "type")]
  #[sqlx(rename = "type")]
  pub workout_type: Option<WorkoutType>,
  pub deadline: NaiveDate,
  #[sqlx(rename = "isActive")]
  pub is_active: bool,
}

impl Goal {
  pub fn is_reached(&self) -> bool {
    self.current_progress >= self.target
  }

  /// Whether a workout of `workout_type` logged on `today` feeds this goal
  pub fn accepts(&self, workout_type: WorkoutType, today: NaiveDate) -> bool {
    self.is_active
      && self.deadline >= today
      && self.workout_type.map_or(true, |t| t == workout_type)
  }
}

/// For inserting new goals (without id; always inserted active)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
  pub description: String,
  pub target: f64,
  #[serde(default)]
  pub current_progress: f64,
  #[serde(rename = "type", default)]
  pub workout_type: Option<WorkoutType>,
  pub deadline: NaiveDate,
}

impl NewGoal {
  pub fn new(
    description: impl Into<String>,
    target: f64,
    workout_type: Option<WorkoutType>,
    deadline: NaiveDate,
  ) -> Self {
    Self {
      description: description.into(),
      target,
      current_progress: 0.0,
      workout_type,
      deadline,
    }
  }
}
