//! JSON-file state store.
//!
//! Stores each key as its own file under a root directory and keeps small
//! per-key meta markers (version + updated_at). Values are opaque bytes;
//! callers own serialization.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Result, StateStore};

/// File-based store: one file per key.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root`. Creates the directory tree needed
    /// for entries and meta markers.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("meta")).await?;
        Ok(Self { root })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.root.join("meta").join(format!("{key}.meta.json"))
    }

    /// Read and increment the per-key version, returning the new version.
    async fn bump_version(&self, key: &str) -> Result<u64> {
        let path = self.meta_path(key);
        let mut version = 0u64;
        if let Ok(s) = fs::read_to_string(&path).await {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(&s) {
                if let Some(v) = json.get("version").and_then(|v| v.as_u64()) {
                    version = v;
                }
            }
        }
        version += 1;
        let meta = serde_json::json!({"version": version, "updated_at": chrono::Utc::now()});
        fs::write(&path, serde_json::to_string_pretty(&meta)?.as_bytes()).await?;
        Ok(version)
    }
}

#[async_trait::async_trait]
impl StateStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.entry_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.entry_path(key), value.as_bytes()).await?;
        let _ver = self.bump_version(key).await?;
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<()> {
        for path in [self.entry_path(key), self.meta_path(key)] {
            fs::remove_file(path).await.or_else(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Ok(())
                } else {
                    Err(e)
                }
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_none_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).await.unwrap();
        assert_eq!(store.get("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();

        store.set("greeting", "hello").await.unwrap();
        assert_eq!(store.get("greeting").await.unwrap().as_deref(), Some("hello"));

        store.set("greeting", "hej").await.unwrap();
        assert_eq!(store.get("greeting").await.unwrap().as_deref(), Some("hej"));
    }

    #[tokio::test]
    async fn writes_bump_the_meta_version() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();

        store.set("entry", "a").await.unwrap();
        store.set("entry", "b").await.unwrap();

        let meta = std::fs::read_to_string(store.meta_path("entry")).unwrap();
        let meta: serde_json::Value = serde_json::from_str(&meta).unwrap();
        assert_eq!(meta.get("version").and_then(|v| v.as_u64()), Some(2));
        assert!(meta.get("updated_at").is_some());
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path()).await.unwrap();

        store.set("entry", "value").await.unwrap();
        store.remove("entry").await.unwrap();
        assert_eq!(store.get("entry").await.unwrap(), None);

        // Removing again must not fail.
        store.remove("entry").await.unwrap();
    }

    #[tokio::test]
    async fn reopening_the_same_root_sees_old_entries() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = JsonFileStore::new(dir.path()).await.unwrap();
            store.set("entry", "survives").await.unwrap();
        }
        let store = JsonFileStore::new(dir.path()).await.unwrap();
        assert_eq!(store.get("entry").await.unwrap().as_deref(), Some("survives"));
    }
}
