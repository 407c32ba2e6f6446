use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
/// Workout Type: closed set of run categories
// ---------------------------------------------------------------------------

/// Stored in the `type` column as the variant name ("Run", "Jog", ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum WorkoutType {
  Run,
  Jog,
  Sprint,
  Trail,
  Interval,
  Race,
}

impl WorkoutType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Run => "Run",
      Self::Jog => "Jog",
      Self::Sprint => "Sprint",
      Self::Trail => "Trail",
      Self::Interval => "Interval",
      Self::Race => "Race",
    }
  }
}

impl std::fmt::Display for WorkoutType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A persisted workout row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
  pub id: i64,
  pub date: NaiveDate,
  /// Kilometers
  pub distance: f64,
  /// Minutes
  pub time: i64,
  #[serde(rename = "type")]
  #[sqlx(rename = "type")]
  pub workout_type: WorkoutType,
  /// Minutes per kilometer, derived when the row was written
  pub pace: Option<f64>,
}

/// For inserting new workouts (without id; pace is derived by the store)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkout {
  pub date: NaiveDate,
  pub distance: f64,
  pub time: i64,
  #[serde(rename = "type")]
  pub workout_type: WorkoutType,
}

impl NewWorkout {
  pub fn new(date: NaiveDate, distance: f64, time: i64, workout_type: WorkoutType) -> Self {
    Self {
      date,
      distance,
      time,
      workout_type,
    }
  }

  /// Pace in min/km, None when distance is not positive
  pub fn pace(&self) -> Option<f64> {
    if self.distance > 0.0 {
      Some(self.time as f64 / self.distance)
    } else {
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_workout_type_display_matches_serde_name() {
    for t in [WorkoutType::Run, WorkoutType::Interval, WorkoutType::Race] {
      assert_eq!(serde_json::to_value(t).unwrap(), t.to_string());
    }
  }

  #[test]
  fn test_pace_is_minutes_per_km() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let workout = NewWorkout::new(date, 5.0, 30, WorkoutType::Run);
    assert_eq!(workout.pace(), Some(6.0));

    let zero = NewWorkout::new(date, 0.0, 30, WorkoutType::Run);
    assert_eq!(zero.pace(), None);
  }

  #[test]
  fn test_workout_serializes_type_field() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let json = serde_json::to_value(NewWorkout::new(date, 5.0, 30, WorkoutType::Trail)).unwrap();
    assert_eq!(json["type"], "Trail");
    assert_eq!(json["date"], "2025-01-10");
  }
}
