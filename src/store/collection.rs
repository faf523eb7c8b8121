//! Collection - typed accessor for one record collection in a document store.

use std::marker::PhantomData;

use serde_json::Value;

use super::{DocumentStore, StoreError};
use crate::catalog::Record;

/// Typed view of the collection that holds `R` records.
pub struct Collection<'a, R> {
    store: &'a dyn DocumentStore,
    _marker: PhantomData<R>,
}

impl<'a, R: Record> Collection<'a, R> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Collection name in the store.
    pub fn name(&self) -> &'static str {
        R::COLLECTION
    }

    /// True if nothing has been stored for this record type yet.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.store.is_empty(R::COLLECTION)
    }

    /// Persist raw documents as fetched.
    pub fn seed(&self, documents: &[Value]) -> Result<usize, StoreError> {
        self.store.insert_many(R::COLLECTION, documents)
    }

    /// Load and decode every record, in store order.
    pub fn load(&self) -> Result<Vec<R>, StoreError> {
        self.store
            .find_all(R::COLLECTION)?
            .into_iter()
            .map(|doc| {
                serde_json::from_value(doc).map_err(|e| StoreError::Serialization {
                    collection: R::COLLECTION.to_string(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}
