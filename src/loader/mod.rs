//! Data loader - makes both collections available in memory at startup.
//!
//! For each collection:
//!
//! 1. With a document store that already holds the collection, load it from
//!    the store; the source is not contacted.
//! 2. With an empty store, fetch from the source, check that every document
//!    decodes and that no id repeats, persist the raw documents, then read them back from the store.
//! 3. Without a store, fetch from the source and decode.
//!
//! Any failure aborts the load. There is no retry.
//!
//! ## Example
//!
//! ```ignore
//! use lamp_catalog::loader::{self, HttpSource};
//!
//! let source = HttpSource::new(&config.sources)?;
//! let catalog = loader::load_catalog(&source, store.as_deref()).await?;
//! ```

mod source;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{ensure_unique_ids, Catalog, CatalogError, Fabrikant, Lamp, Record};
use crate::store::{Collection, DocumentStore, StoreError};

pub use source::{CatalogSource, HttpSource, StaticSource};

/// Error type for the startup load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("no source for collection {0}")]
    UnknownCollection(String),

    #[error("failed to fetch {collection} from {url}: {source}")]
    Fetch {
        collection: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("fetching {collection} from {url} returned HTTP {status}")]
    Status {
        collection: &'static str,
        url: String,
        status: u16,
    },

    #[error("failed to decode {collection}: {message}")]
    Decode {
        collection: &'static str,
        message: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Load lamps and fabrikanten into a [`Catalog`].
pub async fn load_catalog<S: CatalogSource>(
    source: &S,
    store: Option<&dyn DocumentStore>,
) -> Result<Catalog, LoadError> {
    let lamps = load_collection::<Lamp, S>(source, store).await?;
    let fabrikanten = load_collection::<Fabrikant, S>(source, store).await?;

    let catalog = Catalog::new(lamps, fabrikanten)?;
    info!(
        lamps = catalog.lamps().len(),
        fabrikanten = catalog.fabrikanten().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

async fn load_collection<R: Record, S: CatalogSource>(
    source: &S,
    store: Option<&dyn DocumentStore>,
) -> Result<Vec<R>, LoadError> {
    let Some(store) = store else {
        let documents = source.fetch(R::COLLECTION).await?;
        let records = decode::<R>(&documents)?;
        info!(collection = R::COLLECTION, count = records.len(), "loaded from source");
        return Ok(records);
    };

    let collection = Collection::<R>::new(store);
    if collection.is_empty()? {
        info!(
            collection = R::COLLECTION,
            backend = store.backend(),
            "store is empty, seeding from source"
        );
        let documents = source.fetch(R::COLLECTION).await?;
        // Nothing is written unless the whole collection would load.
        ensure_unique_ids(&decode::<R>(&documents)?)?;
        let written = collection.seed(&documents)?;
        debug!(collection = R::COLLECTION, written, "store seeded");
    }

    let records = collection.load()?;
    info!(
        collection = R::COLLECTION,
        backend = store.backend(),
        count = records.len(),
        "loaded from store"
    );
    Ok(records)
}

fn decode<R: Record>(documents: &[Value]) -> Result<Vec<R>, LoadError> {
    documents
        .iter()
        .map(|doc| {
            R::deserialize(doc).map_err(|e| LoadError::Decode {
                collection: R::COLLECTION,
                message: e.to_string(),
            })
        })
        .collect()
}
