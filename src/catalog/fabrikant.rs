use serde::Deserialize;
use serde_json::{Map, Value};

use super::Record;

/// A manufacturer (fabrikant) record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fabrikant {
    pub id: i64,
    #[serde(rename = "naam")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Fabrikant {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}

impl Record for Fabrikant {
    const COLLECTION: &'static str = "Fabrikant";

    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}
