//! Catalog sources - where the raw collections come from.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use tracing::debug;

use super::LoadError;
use crate::catalog::{Fabrikant, Lamp, Record};
use crate::config::SourceConfig;

/// A remote (or stand-in) provider of whole collections as JSON documents.
pub trait CatalogSource: Send + Sync {
    /// Fetch every document of `collection`.
    fn fetch(
        &self,
        collection: &'static str,
    ) -> impl Future<Output = Result<Vec<Value>, LoadError>> + Send;
}

/// Fetches each collection as a JSON array from a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    lamps_url: String,
    fabrikanten_url: String,
}

impl HttpSource {
    pub fn new(config: &SourceConfig) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(LoadError::Client)?;
        Ok(Self {
            client,
            lamps_url: config.lamps_url.clone(),
            fabrikanten_url: config.fabrikanten_url.clone(),
        })
    }

    /// The URL a collection is fetched from.
    pub fn url_for(&self, collection: &str) -> Result<&str, LoadError> {
        if collection == Lamp::COLLECTION {
            Ok(&self.lamps_url)
        } else if collection == Fabrikant::COLLECTION {
            Ok(&self.fabrikanten_url)
        } else {
            Err(LoadError::UnknownCollection(collection.to_string()))
        }
    }
}

impl CatalogSource for HttpSource {
    async fn fetch(&self, collection: &'static str) -> Result<Vec<Value>, LoadError> {
        let url = self.url_for(collection)?;
        debug!(collection, url, "fetching collection");

        let fetch_err = |source| LoadError::Fetch {
            collection,
            url: url.to_string(),
            source,
        };
        let response = self.client.get(url).send().await.map_err(fetch_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                collection,
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(fetch_err)?;
        serde_json::from_slice(&body).map_err(|e| LoadError::Decode {
            collection,
            message: e.to_string(),
        })
    }
}

/// In-memory source for tests and offline development.
///
/// Counts fetches so callers can check whether the source was consulted.
#[derive(Debug, Default)]
pub struct StaticSource {
    collections: HashMap<&'static str, Vec<Value>>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `documents` for the collection of `R`.
    pub fn with<R: Record>(mut self, documents: Vec<Value>) -> Self {
        self.collections.insert(R::COLLECTION, documents);
        self
    }

    /// Number of fetches served so far.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CatalogSource for StaticSource {
    async fn fetch(&self, collection: &'static str) -> Result<Vec<Value>, LoadError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.collections
            .get(collection)
            .cloned()
            .ok_or_else(|| LoadError::UnknownCollection(collection.to_string()))
    }
}
