//! Key-value backends for the profile store

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::ProfileError;

/// String-keyed, string-valued storage. Last write wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
  async fn get(&self, key: &str) -> Result<Option<String>, ProfileError>;

  async fn set(&self, key: &str, value: &str) -> Result<(), ProfileError>;

  async fn remove(&self, key: &str) -> Result<(), ProfileError>;
}

/// Keeps everything in memory; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
  entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryKeyValueStore {
  pub fn new() -> Self {
    Self::default()
  }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
  async fn get(&self, key: &str) -> Result<Option<String>, ProfileError> {
    Ok(self.entries.lock().await.get(key).cloned())
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), ProfileError> {
    self
      .entries
      .lock()
      .await
      .insert(key.to_string(), value.to_string());
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<(), ProfileError> {
    self.entries.lock().await.remove(key);
    Ok(())
  }
}

/// A flat JSON object in a single file, rewritten on every change.
///
/// The file is read once on open; the in-memory copy is authoritative after
/// that. Writes go to a sibling temp file first and are renamed into place.
#[derive(Debug)]
pub struct FileKeyValueStore {
  path: PathBuf,
  entries: Mutex<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
  pub async fn open(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
    let path = path.as_ref().to_path_buf();

    let entries = match tokio::fs::read(&path).await {
      Ok(bytes) if bytes.is_empty() => BTreeMap::new(),
      Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
        ProfileError::Storage(format!("Corrupt store file {}: {}", path.display(), e))
      })?,
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
      Err(e) => return Err(ProfileError::Io(e)),
    };

    log::info!("Profile store opened at: {}", path.display());

    Ok(Self {
      path,
      entries: Mutex::new(entries),
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  async fn persist(&self, entries: &BTreeMap<String, String>) -> Result<(), ProfileError> {
    if let Some(parent) = self.path.parent() {
      tokio::fs::create_dir_all(parent).await?;
    }

    let json = serde_json::to_vec_pretty(entries)
      .map_err(|e| ProfileError::Storage(format!("Failed to encode store: {}", e)))?;

    let tmp_path = self.path.with_extension("json.tmp");
    tokio::fs::write(&tmp_path, json).await?;
    tokio::fs::rename(&tmp_path, &self.path).await?;
    Ok(())
  }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
  async fn get(&self, key: &str) -> Result<Option<String>, ProfileError> {
    Ok(self.entries.lock().await.get(key).cloned())
  }

  async fn set(&self, key: &str, value: &str) -> Result<(), ProfileError> {
    let mut entries = self.entries.lock().await;

    // Only adopt the change once it is on disk
    let mut updated = entries.clone();
    updated.insert(key.to_string(), value.to_string());
    self.persist(&updated).await?;

    *entries = updated;
    Ok(())
  }

  async fn remove(&self, key: &str) -> Result<(), ProfileError> {
    let mut entries = self.entries.lock().await;
    if !entries.contains_key(key) {
      return Ok(());
    }

    let mut updated = entries.clone();
    updated.remove(key);
    self.persist(&updated).await?;

    *entries = updated;
    Ok(())
  }
}
