//! JSON file adapter: one `<collection>.json` array per collection.

use super::{records_from_document, CollectionStore, Record, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Stores each collection as a pretty-printed JSON array under a root directory.
///
/// Writes go through a sibling `.tmp` file that is renamed over the target, so a crash
/// mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of a collection's backing file.
    pub fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn load(&self, collection: &str) -> Vec<Record> {
        let path = self.path_for(collection);
        let text = match fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(collection, path = %path.display(), "No backing file yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(collection, path = %path.display(), error = %e, "Error reading JSON file");
                return Vec::new();
            }
        };

        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        match serde_json::from_str(text) {
            Ok(document) => records_from_document(collection, document),
            Err(e) => {
                warn!(collection, path = %path.display(), error = %e, "Error parsing JSON file");
                Vec::new()
            }
        }
    }

    async fn save(&self, collection: &str, records: &[Record]) -> Result<(), StorageError> {
        let path = self.path_for(collection);
        let payload =
            serde_json::to_vec_pretty(records).map_err(|source| StorageError::Serialize {
                collection: collection.to_string(),
                source,
            })?;
        atomic_write(&path, &payload).await?;
        debug!(collection, path = %path.display(), records = records.len(), "Saved");
        Ok(())
    }
}

/// Writes `content` to a temp file next to `target`, then renames it into place.
async fn atomic_write(target: &Path, content: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).await.map_err(io_error(parent))?;
    }

    let temp = target.with_extension("json.tmp");
    fs::write(&temp, content).await.map_err(io_error(&temp))?;
    fs::rename(&temp, target).await.map_err(io_error(target))?;
    Ok(())
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        assert!(store.load("nope").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        let records = vec![
            record(json!({"hotel_id": "H2", "name": "Norte", "rooms_total": 3, "rooms_available": 1})),
            record(json!({"hotel_id": "H1", "name": "Sur", "rooms_total": 5, "rooms_available": 5})),
        ];

        store.save("hotels", &records).await.unwrap();

        assert_eq!(store.load("hotels").await, records);
    }

    #[tokio::test]
    async fn test_load_empty_file_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path_for("customers"), "  \n").unwrap();

        assert!(store.load("customers").await.is_empty());
    }

    #[tokio::test]
    async fn test_load_invalid_json_returns_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());
        std::fs::write(store.path_for("customers"), "{ bad json").unwrap();

        assert!(store.load("customers").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("data"));

        store
            .save("customers", &[record(json!({"customer_id": "C1", "name": "Ana"}))])
            .await
            .unwrap();

        assert!(store.path_for("customers").exists());
    }

    #[tokio::test]
    async fn test_no_tmp_files_after_save() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        store.save("customers", &[]).await.unwrap();

        let leftovers = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[tokio::test]
    async fn test_save_fails_when_root_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = JsonFileStore::new(&blocker);

        let result = store.save("customers", &[]).await;

        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
