//! LampQuery - normalized list parameters for the lamp overview.
//!
//! Raw query-string pairs are never rejected. Missing, repeated or
//! unrecognized values fall back to defaults before they reach the engine.

use super::{search, sort, SortDirection, SortField};
use crate::catalog::Lamp;

pub const SEARCH_PARAM: &str = "q";
pub const SORT_FIELD_PARAM: &str = "sortField";
pub const SORT_DIRECTION_PARAM: &str = "sortDirection";

/// Typed search + sort configuration for the lamp list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LampQuery {
    /// Search text as typed. Empty means no filtering.
    pub search: String,
    /// `None` when the client asked for a field we don't know.
    pub sort: Option<SortField>,
    pub direction: SortDirection,
}

impl Default for LampQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: Some(SortField::Name),
            direction: SortDirection::Ascending,
        }
    }
}

impl LampQuery {
    /// Normalize raw query-string pairs.
    ///
    /// A parameter given more than once is not a single value and is treated
    /// as absent.
    pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();

        if let Some(text) = single(pairs, SEARCH_PARAM) {
            query.search = text.to_string();
        }
        if let Some(field) = single(pairs, SORT_FIELD_PARAM) {
            query.sort = SortField::parse(field);
        }
        if let Some(direction) = single(pairs, SORT_DIRECTION_PARAM) {
            query.direction = SortDirection::parse(direction).unwrap_or_default();
        }

        query
    }

    /// Filter by the search text, then sort.
    pub fn apply(&self, lamps: &[Lamp]) -> Vec<Lamp> {
        let found = search(lamps, &self.search);
        sort(&found, self.sort, self.direction)
    }
}

fn single<'a, K, V>(pairs: &'a [(K, V)], name: &str) -> Option<&'a str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut values = pairs
        .iter()
        .filter(|(k, _)| k.as_ref() == name)
        .map(|(_, v)| v.as_ref());
    match (values.next(), values.next()) {
        (Some(value), None) => Some(value),
        _ => None,
    }
}
