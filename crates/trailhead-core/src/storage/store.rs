use async_trait::async_trait;

use super::error::StorageError;

/// Async string key-value store.
///
/// The session container persists through this trait, so every backend
/// must honor the same contract: reading an absent key yields `None`, and
/// removing an absent key succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
