//! # Key-Value Store Adapters
//!
//! In-memory store for unit tests and a file-backed store for durable local
//! persistence. The file-backed store writes atomically via a temp file and
//! rename, so a crash mid-write never leaves a torn record.

use crate::ports::outbound::{KVStoreError, KeyValueStore};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory key-value store for unit tests.
#[derive(Default)]
pub struct InMemoryKVStore {
    data: HashMap<String, String>,
}

impl InMemoryKVStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), KVStoreError> {
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed key-value store.
///
/// Holds the map in memory and rewrites the whole file (JSON) on every put.
/// Suitable for the registry's workload: a handful of keys, full-list
/// rewrites by design.
pub struct FileBackedKVStore {
    data: HashMap<String, String>,
    path: PathBuf,
}

impl FileBackedKVStore {
    /// Open or create a store at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, KVStoreError> {
        let path = path.as_ref().to_path_buf();
        let data = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| KVStoreError::Io {
                message: format!("corrupt store file {}: {e}", path.display()),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                return Err(KVStoreError::Io {
                    message: e.to_string(),
                })
            }
        };

        if !data.is_empty() {
            tracing::info!(
                "[mailbox] 💾 loaded {} keys from {}",
                data.len(),
                path.display()
            );
        }

        Ok(Self { data, path })
    }

    fn save_to_file(&self) -> Result<(), KVStoreError> {
        let io_err = |e: std::io::Error| KVStoreError::Io {
            message: e.to_string(),
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }

        let contents = serde_json::to_string(&self.data).map_err(|e| KVStoreError::Io {
            message: e.to_string(),
        })?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, contents).map_err(io_err)?;
        std::fs::rename(&temp_path, &self.path).map_err(io_err)?;

        Ok(())
    }
}

impl KeyValueStore for FileBackedKVStore {
    fn get(&self, key: &str) -> Result<Option<String>, KVStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), KVStoreError> {
        self.data.insert(key.to_string(), value.to_string());
        self.save_to_file()
    }
}
