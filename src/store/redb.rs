//! RedbDocumentStore - persistent document store on an embedded redb file.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};
use serde_json::Value;

use super::{DocumentStore, StoreError};

const TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("documents");

/// Document store backed by redb, a pure-Rust embedded key-value database.
///
/// Every document is one row keyed `"<collection>:<seq>"` with a zero-padded
/// sequence number, so a prefix scan returns a collection in insertion order.
pub struct RedbDocumentStore {
    db: Arc<Database>,
}

impl RedbDocumentStore {
    /// Open or create a redb database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let db = Database::create(path).map_err(|e| StoreError::Storage(e.to_string()))?;

        // Make sure the table exists so readers never hit a missing table.
        let write_txn = db
            .begin_write()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        {
            let _table = write_txn
                .open_table(TABLE)
                .map_err(|e| StoreError::Storage(e.to_string()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(Self { db: Arc::new(db) })
    }

    fn prefix(collection: &str) -> String {
        format!("{}:", collection)
    }

    fn make_key(collection: &str, seq: u64) -> String {
        format!("{}:{:020}", collection, seq)
    }

    fn scan(&self, collection: &str) -> Result<Vec<Vec<u8>>, StoreError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let prefix = Self::prefix(collection);
        let iter = table
            .range(prefix.as_str()..)
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let mut results = Vec::new();
        for entry in iter {
            let entry = entry.map_err(|e| StoreError::Storage(e.to_string()))?;
            if !entry.0.value().starts_with(&prefix) {
                break;
            }
            results.push(entry.1.value().to_vec());
        }
        Ok(results)
    }
}

impl DocumentStore for RedbDocumentStore {
    fn backend(&self) -> &'static str {
        "redb"
    }

    fn is_empty(&self, collection: &str) -> Result<bool, StoreError> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        let table = read_txn
            .open_table(TABLE)
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        let prefix = Self::prefix(collection);
        let mut iter = table
            .range(prefix.as_str()..)
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        match iter.next() {
            Some(entry) => {
                let entry = entry.map_err(|e| StoreError::Storage(e.to_string()))?;
                Ok(!entry.0.value().starts_with(&prefix))
            }
            None => Ok(true),
        }
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

        let prefix = Self::prefix(collection);
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Storage(e.to_string()))?;
        {
            let mut table = write_txn
                .open_table(TABLE)
                .map_err(|e| StoreError::Storage(e.to_string()))?;

            let mut next_seq = 0u64;
            for entry in table
                .range(prefix.as_str()..)
                .map_err(|e| StoreError::Storage(e.to_string()))?
            {
                let entry = entry.map_err(|e| StoreError::Storage(e.to_string()))?;
                if !entry.0.value().starts_with(&prefix) {
                    break;
                }
                next_seq += 1;
            }

            for bytes in &encoded {
                let key = Self::make_key(collection, next_seq);
                table
                    .insert(key.as_str(), bytes.as_slice())
                    .map_err(|e| StoreError::Storage(e.to_string()))?;
                next_seq += 1;
            }
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Storage(e.to_string()))?;

        Ok(encoded.len())
    }

    fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        self.scan(collection)?
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
