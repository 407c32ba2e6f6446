//! User profile and app flags
//!
//! A thin typed layer over a `KeyValueStore`. Booleans are stored as
//! `"true"`/`"false"`, the profile as a JSON object.

mod backend;

pub use backend::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};

use serde::Serialize;
use std::sync::Arc;

use crate::models::UserProfile;

const KEY_IS_FIRST_LAUNCH: &str = "isFirstLaunch";
const KEY_USER_PROFILE: &str = "userProfile";
const KEY_THEME: &str = "theme";

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
  #[error("Storage error: {0}")]
  Storage(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Stored profile is malformed: {0}")]
  Decode(#[from] serde_json::Error),
}

impl Serialize for ProfileError {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    serializer.serialize_str(&self.to_string())
  }
}

#[derive(Clone)]
pub struct ProfileStore {
  backend: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
  pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
    Self { backend }
  }

  /// Profile store backed by a JSON file
  pub async fn open_file(path: impl AsRef<std::path::Path>) -> Result<Self, ProfileError> {
    let backend = FileKeyValueStore::open(path).await?;
    Ok(Self::new(Arc::new(backend)))
  }

  pub fn in_memory() -> Self {
    Self::new(Arc::new(MemoryKeyValueStore::new()))
  }

  /// True until `set_first_launch(false)` has been stored
  pub async fn is_first_launch(&self) -> Result<bool, ProfileError> {
    let value = self.backend.get(KEY_IS_FIRST_LAUNCH).await?;
    Ok(value.map_or(true, |v| v == "true"))
  }

  pub async fn set_first_launch(&self, is_first: bool) -> Result<(), ProfileError> {
    self
      .backend
      .set(KEY_IS_FIRST_LAUNCH, &is_first.to_string())
      .await
  }

  /// Overwrite the stored profile. Values are not validated.
  pub async fn save_user_profile(&self, profile: &UserProfile) -> Result<(), ProfileError> {
    let json = serde_json::to_string(profile)?;
    self.backend.set(KEY_USER_PROFILE, &json).await?;
    log::debug!("User profile saved for {}", profile.name);
    Ok(())
  }

  pub async fn get_user_profile(&self) -> Result<Option<UserProfile>, ProfileError> {
    match self.backend.get(KEY_USER_PROFILE).await? {
      Some(json) if !json.is_empty() => Ok(Some(serde_json::from_str(&json)?)),
      _ => Ok(None),
    }
  }

  /// `is_dark` is the only theme state kept
  pub async fn save_theme(&self, is_dark: bool) -> Result<(), ProfileError> {
    self.backend.set(KEY_THEME, &is_dark.to_string()).await
  }

  pub async fn get_theme(&self) -> Result<Option<bool>, ProfileError> {
    let value = self.backend.get(KEY_THEME).await?;
    Ok(value.filter(|v| !v.is_empty()).map(|v| v == "true"))
  }

  /// Remove the profile and both flags
  pub async fn clear_all(&self) -> Result<(), ProfileError> {
    for key in [KEY_IS_FIRST_LAUNCH, KEY_USER_PROFILE, KEY_THEME] {
      self.backend.remove(key).await?;
    }
    log::info!("Profile store cleared");
    Ok(())
  }
}
