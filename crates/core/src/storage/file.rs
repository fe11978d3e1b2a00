use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::errors::CoreError;

use super::store::KeyValueStore;

/// File-backed store: one JSON object document on disk, one member per
/// logical key. Native only; WASM hosts bring their own store.
///
/// Every write persists the whole document through a temp file plus
/// rename, so a crash mid-write leaves the previous document intact.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, serde_json::Value>,
}

impl JsonFileStore {
    /// Open the store at `path`, reading the document if the file
    /// exists. A missing file is an empty store, not an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| CoreError::Serialization(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = self.entries.len(), "store persisted");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, CoreError> {
        match self.entries.get(key) {
            Some(value) => {
                let raw = serde_json::to_string(value)
                    .map_err(|e| CoreError::Serialization(e.to_string()))?;
                Ok(Some(raw))
            }
            None => Ok(None),
        }
    }

    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        let parsed: serde_json::Value = serde_json::from_str(value)?;
        self.entries.insert(key.to_string(), parsed);
        self.persist()
    }
}
