//! Catalog records and the in-memory record store.
//!
//! Two collections are loaded at startup and held for the lifetime of the
//! process: [`Lamp`]s and [`Fabrikant`]s. Both are read-only from the
//! application's point of view; the [`Catalog`] owns them and hands out
//! shared references to request handlers.
//!
//! ## Example
//!
//! ```ignore
//! use lamp_catalog::{Catalog, Lamp, Fabrikant};
//!
//! let catalog = Catalog::new(lamps, fabrikanten)?;
//! let lamp = catalog.lamp(3);
//! ```

mod catalog;
mod fabrikant;
mod lamp;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Trait for record types that live in a named collection.
pub trait Record: DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "Lamps", "Fabrikant").
    /// Maps to a collection in a document store and to a key prefix in KV stores.
    const COLLECTION: &'static str;

    /// Returns the identifier, unique within the collection.
    fn id(&self) -> i64;

    /// Returns the display name. Search matches against this field.
    fn name(&self) -> &str;
}

/// Error raised when a collection breaks a catalog invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate id {id} in collection {collection}")]
    DuplicateId { collection: &'static str, id: i64 },
}

pub use catalog::Catalog;
pub(crate) use catalog::ensure_unique_ids;
pub use fabrikant::Fabrikant;
pub use lamp::Lamp;
