//! Whole-file JSON persistence

use std::path::{Path, PathBuf};
use thiserror::Error;
use tombamento_types::Store;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and overwrites the data file. No locking and no atomic rename:
/// a crash mid-write can leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the store. `Ok(None)` when the file does not exist yet.
    pub async fn load(&self) -> Result<Option<Store>, StorageError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        Ok(Some(serde_json::from_str(&content)?))
    }

    pub async fn save(&self, store: &Store) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(store)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })
    }
}
