use super::{CollectionStore, Record, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-process adapter. Clones share the same collections.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<HashMap<String, Vec<Record>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection, replacing anything already there.
    pub fn with_collection(self, collection: &str, records: Vec<Record>) -> Self {
        self.lock().insert(collection.to_string(), records);
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Record>>> {
        // A poisoned map still holds complete snapshots; every write replaces a whole entry.
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn load(&self, collection: &str) -> Vec<Record> {
        self.lock().get(collection).cloned().unwrap_or_default()
    }

    async fn save(&self, collection: &str, records: &[Record]) -> Result<(), StorageError> {
        self.lock().insert(collection.to_string(), records.to_vec());
        Ok(())
    }
}
