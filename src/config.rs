use std::env;
use std::path::{Path, PathBuf};

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const DATA_DIR_ENV: &str = "STRIDE_LOG_DATA_DIR";
const APP_DIR_NAME: &str = "com.stridelog.app";
const DATABASE_FILE: &str = "stride-log.db";
const PROFILE_FILE: &str = "profile.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("Failed to get app data directory")]
  NoDataDir,
}

/// Where the on-device data lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub data_dir: PathBuf,
  pub database_file: PathBuf,
  pub profile_file: PathBuf,
}

impl AppConfig {
  /// Resolve the data directory from `STRIDE_LOG_DATA_DIR` (a `.env` file is
  /// honored), falling back to the platform data directory.
  pub fn from_env() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();

    let data_dir = match env::var(DATA_DIR_ENV) {
      Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
      _ => dirs::data_dir()
        .ok_or(ConfigError::NoDataDir)?
        .join(APP_DIR_NAME),
    };

    Ok(Self::with_data_dir(data_dir))
  }

  pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
    let data_dir = data_dir.as_ref().to_path_buf();
    Self {
      database_file: data_dir.join(DATABASE_FILE),
      profile_file: data_dir.join(PROFILE_FILE),
      data_dir,
    }
  }
}
