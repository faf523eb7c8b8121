pub mod catalog;
pub mod config;
pub mod loader;
pub mod query;
pub mod store;
pub mod web;

pub use catalog::{Catalog, CatalogError, Fabrikant, Lamp, Record};
pub use config::{AppConfig, Backend, ConfigError, SourceConfig, StorageConfig};
pub use loader::{load_catalog, CatalogSource, HttpSource, LoadError, StaticSource};
pub use query::{LampQuery, SortDirection, SortField};
pub use store::{Collection, DocumentStore, InMemoryDocumentStore, StoreError};
#[cfg(feature = "redb")]
pub use store::RedbDocumentStore;
pub use web::PageError;
