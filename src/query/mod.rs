//! Query engine - search and sort over in-memory record lists.
//!
//! Every function here is pure: it takes a slice, never mutates it, and
//! returns a freshly allocated `Vec`. Nothing fails; an empty input simply
//! yields an empty output.
//!
//! ## Example
//!
//! ```ignore
//! use lamp_catalog::query::{self, SortDirection, SortField};
//!
//! let found = query::search(catalog.lamps(), "bureau");
//! let sorted = query::sort(&found, Some(SortField::Price), SortDirection::Descending);
//! ```

mod collate;
mod params;

use std::cmp::Ordering;

use crate::catalog::{Lamp, Record};

pub use collate::{collate, fold_case};
pub use params::LampQuery;

/// A lamp field the list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Price,
    Id,
    Color,
    Active,
}

impl SortField {
    /// All fields, in the order the sort control lists them.
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Price,
        SortField::Id,
        SortField::Color,
        SortField::Active,
    ];

    /// Query-string value (`sortField=...`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "naam",
            SortField::Price => "prijs",
            SortField::Id => "id",
            SortField::Color => "kleur",
            SortField::Active => "actief",
        }
    }

    /// Label shown in the sort control.
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Naam",
            SortField::Price => "Prijs",
            SortField::Id => "Id",
            SortField::Color => "Kleur",
            SortField::Active => "Actief",
        }
    }

    /// Parse a query-string value. Accepts the Dutch wire names and English
    /// aliases, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "naam" | "name" => Some(SortField::Name),
            "prijs" | "price" => Some(SortField::Price),
            "id" => Some(SortField::Id),
            "kleur" | "color" => Some(SortField::Color),
            "actief" | "active" => Some(SortField::Active),
            _ => None,
        }
    }

    /// Ascending comparison of two lamps on this field.
    pub fn compare(&self, a: &Lamp, b: &Lamp) -> Ordering {
        match self {
            SortField::Name => collate(&a.name, &b.name),
            SortField::Price => a.price.total_cmp(&b.price),
            SortField::Id => a.id.cmp(&b.id),
            SortField::Color => collate(&a.color, &b.color),
            SortField::Active => a.active.cmp(&b.active),
        }
    }
}

/// Sort direction. Ascending unless asked otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub const ALL: [SortDirection; 2] = [SortDirection::Ascending, SortDirection::Descending];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Ascending),
            "desc" | "descending" => Some(SortDirection::Descending),
            _ => None,
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Keep the records whose name contains `text`, ignoring case.
///
/// Empty `text` keeps everything.
pub fn search<R: Record>(records: &[R], text: &str) -> Vec<R> {
    if text.is_empty() {
        return records.to_vec();
    }
    let needle = fold_case(text);
    records
        .iter()
        .filter(|r| fold_case(r.name()).contains(&needle))
        .cloned()
        .collect()
}

/// Order lamps by `field` in `direction`.
///
/// `None` means the requested field was not recognized: the input order is
/// returned unchanged. The sort is stable in both directions.
pub fn sort(lamps: &[Lamp], field: Option<SortField>, direction: SortDirection) -> Vec<Lamp> {
    let mut sorted = lamps.to_vec();
    if let Some(field) = field {
        sorted.sort_by(|a, b| direction.apply(field.compare(a, b)));
    }
    sorted
}
