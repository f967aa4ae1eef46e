use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::error::StorageError;
use super::store::KeyValueStore;

/// Filesystem-backed store: one file per key under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        debug!(?root, "File store opened");
        Ok(Self { root })
    }

    /// Keys map directly to file names, so path-like keys are rejected.
    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        tokio::fs::write(&path, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn open_store(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path()).unwrap()
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.get("session_token").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store.set("session_token", "abc123").await.unwrap();
        assert_eq!(
            store.get("session_token").await.unwrap(),
            Some("abc123".to_string())
        );

        // Overwrite replaces the previous value
        store.set("session_token", "def456").await.unwrap();
        assert_eq!(
            store.get("session_token").await.unwrap(),
            Some("def456".to_string())
        );
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        store.set("session_token", "abc123").await.unwrap();
        store.remove("session_token").await.unwrap();
        assert_eq!(store.get("session_token").await.unwrap(), None);

        // Removing again is still fine
        store.remove("session_token").await.unwrap();
    }

    #[tokio::test]
    async fn test_values_survive_reopening_the_store() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = open_store(&dir);
            store.set("session_user", "{\"email\":\"a@b.c\"}").await.unwrap();
        }

        let reopened = open_store(&dir);
        assert_eq!(
            reopened.get("session_user").await.unwrap(),
            Some("{\"email\":\"a@b.c\"}".to_string())
        );
    }

    #[tokio::test]
    async fn test_path_like_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = open_store(&dir);

        for key in ["", "../escape", "nested/key", "nested\\key"] {
            let result = store.set(key, "value").await;
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
