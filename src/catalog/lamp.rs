use serde::Deserialize;
use serde_json::{Map, Value};

use super::Record;

/// A lamp in the catalog.
///
/// Wire keys are the upstream Dutch names. Any key not modelled here is kept
/// in `extra` so detail pages can show it and the store can persist it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lamp {
    pub id: i64,
    #[serde(rename = "naam")]
    pub name: String,
    #[serde(rename = "prijs")]
    pub price: f64,
    #[serde(rename = "kleur")]
    pub color: String,
    #[serde(rename = "actief")]
    pub active: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lamp {
    /// Build a lamp without additional display fields.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        price: f64,
        color: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            color: color.into(),
            active,
            extra: Map::new(),
        }
    }
}

impl Record for Lamp {
    const COLLECTION: &'static str = "Lamps";

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
