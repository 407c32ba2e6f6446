use serde::{Deserialize, Serialize};

/// The single on-device user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
  pub name: String,
  pub age: u32,
  /// Centimeters
  pub height: f64,
  /// Kilograms
  pub weight: f64,
}
