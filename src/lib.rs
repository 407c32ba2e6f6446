//! On-device storage for a running log: workouts, distance goals, and the
//! user profile. A presentation layer builds one `AppState` at start-up and
//! hands references to its screens.

pub mod config;
pub mod db;
pub mod format;
pub mod models;
pub mod profile;
pub mod store;

#[cfg(test)]
mod test_utils;

use serde::Serialize;

pub use config::{AppConfig, ConfigError};
pub use models::{
  Goal, MonthStats, NewGoal, NewWorkout, UserProfile, Workout, WorkoutSummary, WorkoutType,
};
pub use profile::{ProfileError, ProfileStore};
pub use store::{StoreError, WorkoutStore};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
  #[error(transparent)]
  Config(#[from] ConfigError),

  #[error(transparent)]
  Store(#[from] StoreError),

  #[error(transparent)]
  Profile(#[from] ProfileError),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl Serialize for AppError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

/// Application state holding both stores
#[derive(Clone)]
pub struct AppState {
  pub workouts: WorkoutStore,
  pub profile: ProfileStore,
}

impl AppState {
  /// Create the data directory, open the database (running migrations) and
  /// the profile file.
  pub async fn initialize(config: &AppConfig) -> Result<Self, AppError> {
    tokio::fs::create_dir_all(&config.data_dir).await?;

    let pool = match db::initialize_db(&config.database_file).await {
      Ok(pool) => pool,
      Err(e) => {
        log::error!("Failed to initialize database: {}", e);
        return Err(e.into());
      }
    };
    let profile = ProfileStore::open_file(&config.profile_file).await?;

    log::info!("Stores ready in {}", config.data_dir.display());

    Ok(Self {
      workouts: WorkoutStore::new(pool),
      profile,
    })
  }

  /// Resolve configuration from the environment and initialize
  pub async fn from_env() -> Result<Self, AppError> {
    let config = AppConfig::from_env()?;
    Self::initialize(&config).await
  }
}
