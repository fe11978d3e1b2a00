use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

use crate::errors::CoreError;

/// Logical keys used in the backing store. One JSON value per key.
pub mod keys {
    /// The income/expense record collection
    pub const TRANSACTIONS: &str = "transactions";
    /// The investment trade collection
    pub const INVESTMENT_TRANSACTIONS: &str = "investmentTransactions";
    /// The category list
    pub const CATEGORIES: &str = "categories";
    /// Date of the last income/expense entry, for the daily reminder
    pub const LAST_RECORD_DATE: &str = "lastRecordDate";
}

/// Key-value persistence port with get/set semantics over JSON strings.
///
/// Implementations decide where the bytes live: an in-process map, a
/// file on disk, or a WASM host proxying to the browser's local
/// storage. A missing key is `Ok(None)`, never an error; callers fall
/// back to their default value.
pub trait KeyValueStore {
    /// Read the raw JSON string stored under `key`, if any.
    fn read_raw(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store a raw JSON string under `key`, replacing any prior value.
    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
}

/// Read and deserialize the value under `key`, falling back to
/// `default` when the key is absent.
pub fn read_or<S, T>(store: &S, key: &str, default: T) -> Result<T, CoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.read_raw(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(default),
    }
}

/// Serialize `value` and store it under `key`.
pub fn write_value<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), CoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    store.write_raw(key, &raw)
}

/// Volatile in-process store. Used in tests and by hosts that mirror
/// the entries into their own storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
