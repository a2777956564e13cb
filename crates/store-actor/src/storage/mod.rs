//! # Collection Storage
//!
//! Every [`ResourceActor`](crate::ResourceActor) persists its whole collection through a
//! [`CollectionStore`]. The contract is deliberately small:
//!
//! - [`CollectionStore::load`] returns the ordered records of a collection. A collection
//!   that does not exist, is empty, or cannot be parsed loads as an **empty** sequence.
//!   Corruption is logged, never raised.
//! - [`CollectionStore::save`] overwrites the collection in full. It only fails on
//!   unrecoverable I/O, and that failure *is* propagated.
//!
//! A record is a JSON object (field name → value). Typed decoding happens one level up,
//! in [`decode_records`], which skips records that do not match the entity shape.
//!
//! Two adapters ship with the crate:
//!
//! - [`JsonFileStore`]: one pretty-printed JSON array per collection on disk.
//! - [`MemoryStore`]: process memory, for tests and throwaway runs.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::warn;

/// One persisted record: field name → value.
pub type Record = Map<String, Value>;

/// Fatal persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error in collection {collection}: {source}")]
    Serialize {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Record for collection {0} is not a JSON object")]
    NotAnObject(String),
}

/// Whole-collection persistence adapter.
///
/// Implementations must be safe to share between actors; each actor only ever touches
/// its own collection, so adapters need no cross-collection coordination.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// Loads every record of `collection`, in persisted order.
    async fn load(&self, collection: &str) -> Vec<Record>;

    /// Replaces the content of `collection` with `records`.
    async fn save(&self, collection: &str, records: &[Record]) -> Result<(), StorageError>;
}

/// Keeps only JSON objects out of an already-parsed document.
///
/// Anything other than an array yields an empty collection.
pub(crate) fn records_from_document(collection: &str, document: Value) -> Vec<Record> {
    match document {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(record),
                other => {
                    warn!(collection, value = %other, "Skipping non-object record");
                    None
                }
            })
            .collect(),
        other => {
            warn!(collection, kind = value_kind(&other), "Invalid data format, expected an array");
            Vec::new()
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Decodes records into `T`, skipping (and logging) every record with missing or
/// mistyped fields.
pub fn decode_records<T: DeserializeOwned>(collection: &str, records: Vec<Record>) -> Vec<T> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| {
            match serde_json::from_value::<T>(Value::Object(record)) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(collection, position, error = %e, "Skipping malformed record");
                    None
                }
            }
        })
        .collect()
}

/// Encodes items into records ready for [`CollectionStore::save`].
pub fn encode_records<'a, T, I>(collection: &str, items: I) -> Result<Vec<Record>, StorageError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(|item| {
            match serde_json::to_value(item).map_err(|source| StorageError::Serialize {
                collection: collection.to_string(),
                source,
            })? {
                Value::Object(record) => Ok(record),
                _ => Err(StorageError::NotAnObject(collection.to_string())),
            }
        })
        .collect()
}
