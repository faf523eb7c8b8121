//! Document stores - optional persistence for the fetched collections.
//!
//! A store keeps raw JSON documents grouped in named collections, in insertion
//! order. It is consulted once at startup: a populated collection is loaded
//! from the store, an empty one is seeded from the remote source.
//!
//! The backend is chosen by configuration ([`Backend`]):
//!
//! - `none`: no store, every startup fetches from the source
//! - `memory`: [`InMemoryDocumentStore`], lives as long as the process
//! - `redb`: [`RedbDocumentStore`], an embedded database file on disk
//!
//! ## Example
//!
//! ```ignore
//! use lamp_catalog::store::{self, Collection};
//! use lamp_catalog::Lamp;
//!
//! let store = store::open(&config.storage)?;
//! if let Some(store) = store.as_deref() {
//!     let lamps = Collection::<Lamp>::new(store).load()?;
//! }
//! ```

mod collection;
mod in_memory;
#[cfg(feature = "redb")]
mod redb;

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::config::{Backend, StorageConfig};

/// Raw document storage grouped by collection name.
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// True if the collection holds no documents.
    fn is_empty(&self, collection: &str) -> Result<bool, StoreError>;

    /// Append documents to a collection. Returns how many were written.
    fn insert_many(&self, collection: &str, documents: &[Value]) -> Result<usize, StoreError>;

    /// All documents of a collection, in insertion order.
    fn find_all(&self, collection: &str) -> Result<Vec<Value>, StoreError>;
}

/// Error type for document store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error in {collection}: {message}")]
    Serialization { collection: String, message: String },

    #[error("storage backend `{0}` is not compiled into this build")]
    Unsupported(&'static str),
}

/// Open the configured backend. `Backend::None` yields `Ok(None)`.
pub fn open(config: &StorageConfig) -> Result<Option<Arc<dyn DocumentStore>>, StoreError> {
    let store: Arc<dyn DocumentStore> = match config.backend {
        Backend::None => {
            info!("no document store configured, collections come from the source");
            return Ok(None);
        }
        Backend::Memory => Arc::new(InMemoryDocumentStore::new()),
        Backend::Redb => open_redb(config)?,
    };
    info!(backend = store.backend(), "document store opened");
    Ok(Some(store))
}

#[cfg(feature = "redb")]
fn open_redb(config: &StorageConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Storage(e.to_string()))?;
        }
    }
    info!(path = %config.path.display(), "opening redb document store");
    Ok(Arc::new(RedbDocumentStore::open(&config.path)?))
}

#[cfg(not(feature = "redb"))]
fn open_redb(_config: &StorageConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    Err(StoreError::Unsupported("redb"))
}

pub use collection::Collection;
pub use in_memory::InMemoryDocumentStore;
#[cfg(feature = "redb")]
pub use self::redb::RedbDocumentStore;
