use crate::core::BlobStore;
use crate::utils::error::{FunctionError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub use crate::core::sink::DiscardBlobStore;

/// 以本機目錄模擬 blob 容器
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    base_path: PathBuf,
}

impl LocalBlobStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl BlobStore for LocalBlobStore {
    async fn write_blob(&self, key: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(key);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| FunctionError::StorageError {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }

        fs::write(&full_path, data).map_err(|e| FunctionError::StorageError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

/// 記憶體內的 blob 容器，clone 後共用同一份資料
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.lock().map(|b| b.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.blobs.lock().ok()?.get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.blobs
            .lock()
            .map(|b| b.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl BlobStore for MemoryBlobStore {
    async fn write_blob(&self, key: &str, data: &[u8]) -> Result<()> {
        let mut blobs = self.blobs.lock().map_err(|e| FunctionError::StorageError {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        blobs.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}
