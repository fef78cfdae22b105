use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::error::StorageError;

const STORE_FILE_NAME: &str = "storage.json";

/// Asynchronous string key-value store.
pub trait KeyValueStore {
    /// Returns the value for `key`, or `None` if it was never set or was removed.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StorageError>>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StorageError>>;
}

/// Returns the application data directory (`~/.local/share/authform/`),
/// creating it if it does not already exist.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = dirs::data_dir()
        .ok_or(StorageError::NoDataDir)?
        .join("authform");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Key-value store backed by a single JSON object file.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so a crash mid-write leaves the previous contents intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store in the application data directory.
    pub fn new() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(STORE_FILE_NAME),
        })
    }

    /// Creates a store rooted at the given directory.
    #[cfg(test)]
    pub(crate) fn with_path(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            path: dir.join(STORE_FILE_NAME),
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<Map<String, Value>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) if contents.trim().is_empty() => Ok(Map::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_map(&self, map: &Map<String, Value>) -> Result<(), StorageError> {
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(map)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self.read_map().await?.remove(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(StorageError::CorruptValue {
                key: key.to_string(),
                reason: format!("expected a string, found {other}"),
            }),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
