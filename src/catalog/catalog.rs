//! Catalog - the in-memory record store shared by all request handlers.

use std::collections::HashSet;

use super::{CatalogError, Fabrikant, Lamp, Record};

/// Both collections, in load order.
///
/// Built once at startup and then only read. Wrap it in an `Arc` to share it
/// between handlers; no locking is needed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lamps: Vec<Lamp>,
    fabrikanten: Vec<Fabrikant>,
}

impl Catalog {
    /// Build a catalog. Fails if either collection repeats an id.
    pub fn new(lamps: Vec<Lamp>, fabrikanten: Vec<Fabrikant>) -> Result<Self, CatalogError> {
        ensure_unique_ids(&lamps)?;
        ensure_unique_ids(&fabrikanten)?;
        Ok(Self { lamps, fabrikanten })
    }

    pub fn lamps(&self) -> &[Lamp] {
        &self.lamps
    }

    pub fn fabrikanten(&self) -> &[Fabrikant] {
        &self.fabrikanten
    }

    /// Find a lamp by exact id.
    pub fn lamp(&self, id: i64) -> Option<&Lamp> {
        find_by_id(&self.lamps, id)
    }

    /// Find a fabrikant by exact id.
    pub fn fabrikant(&self, id: i64) -> Option<&Fabrikant> {
        find_by_id(&self.fabrikanten, id)
    }
}

fn find_by_id<R: Record>(records: &[R], id: i64) -> Option<&R> {
    records.iter().find(|r| r.id() == id)
}

/// Fail on the first id that occurs twice in `records`.
pub(crate) fn ensure_unique_ids<R: Record>(records: &[R]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.id()) {
            return Err(CatalogError::DuplicateId {
                collection: R::COLLECTION,
                id: record.id(),
            });
        }
    }
    Ok(())
}
