use serde::{Deserialize, Serialize};

/// Aggregates over the workouts of one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthStats {
  pub total_distance: f64,
  pub total_workouts: i64,
  /// Mean of the stored paces (min/km); 0 when no workout has one
  pub average_pace: f64,
}

/// Header numbers for the full workout history
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
  pub total_workouts: i64,
  pub total_distance: f64,
}
