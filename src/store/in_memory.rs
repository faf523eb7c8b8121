//! InMemoryDocumentStore - HashMap-backed document store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

use super::{DocumentStore, StoreError};

/// In-memory document store backed by a HashMap of collections.
///
/// Documents are kept serialized, so a read always returns a fresh copy.
/// Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    storage: Arc<RwLock<HashMap<String, Vec<Vec<u8>>>>>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of documents in a collection.
    pub fn len(&self, collection: &str) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;
        Ok(storage.get(collection).map_or(0, Vec::len))
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn is_empty(&self, collection: &str) -> Result<bool, StoreError> {
        Ok(self.len(collection)? == 0)
    }

    fn insert_many(&self, collection: &str, documents: &[Value]) -> Result<usize, StoreError> {
        let encoded = documents
            .iter()
            .map(serde_json::to_vec)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Serialization {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;

        storage
            .entry(collection.to_string())
            .or_default()
            .extend(encoded);

        Ok(documents.len())
    }

    fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::Storage("lock poisoned".into()))?;

        let Some(documents) = storage.get(collection) else {
            return Ok(Vec::new());
        };

        documents
            .iter()
            .map(|bytes| {
                serde_json::from_slice(bytes).map_err(|e| StoreError::Serialization {
                    collection: collection.to_string(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}
