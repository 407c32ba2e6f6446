//! Display helpers for workout cards and goal progress

/// "5:30 min/km", or "N/A" without a pace
pub fn format_pace(pace: Option<f64>) -> String {
  let pace = match pace {
    Some(p) if p.is_finite() && p > 0.0 => p,
    _ => return "N/A".to_string(),
  };

  let mut minutes = pace.floor() as i64;
  let mut seconds = ((pace - pace.floor()) * 60.0).round() as i64;
  if seconds == 60 {
    minutes += 1;
    seconds = 0;
  }

  format!("{}:{:02} min/km", minutes, seconds)
}

/// "1h 5m", or "45m" under an hour
pub fn format_duration(minutes: i64) -> String {
  let hours = minutes / 60;
  let mins = minutes % 60;
  if hours > 0 {
    format!("{}h {}m", hours, mins)
  } else {
    format!("{}m", mins)
  }
}

/// Fraction of the target reached, clamped to [0, 1] for display
pub fn progress_ratio(current: f64, target: f64) -> f64 {
  if target <= 0.0 {
    return 0.0;
  }
  (current / target).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_format_pace() {
    assert_eq!(format_pace(Some(6.0)), "6:00 min/km");
    assert_eq!(format_pace(Some(5.5)), "5:30 min/km");
    assert_eq!(format_pace(Some(4.999)), "5:00 min/km");
    assert_eq!(format_pace(None), "N/A");
    assert_eq!(format_pace(Some(0.0)), "N/A");
  }

  #[test]
  fn test_format_duration() {
    assert_eq!(format_duration(45), "45m");
    assert_eq!(format_duration(65), "1h 5m");
    assert_eq!(format_duration(120), "2h 0m");
  }

  #[test]
  fn test_progress_ratio_clamps() {
    assert_eq!(progress_ratio(5.0, 20.0), 0.25);
    assert_eq!(progress_ratio(25.0, 20.0), 1.0);
    assert_eq!(progress_ratio(5.0, 0.0), 0.0);
  }
}
