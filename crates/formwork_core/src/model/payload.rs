//! Payload: the flattened output document.
//!
//! # Invariants
//! - Entries keep descriptor order.
//! - An empty payload (no organism or no field list) serializes as `{}`.

use super::value::FieldValue;
use indexmap::IndexMap;
use serde::Serialize;

/// `{ id, <field id>: <coerced value>, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(flatten)]
    entries: IndexMap<String, FieldValue>,
}

impl Payload {
    /// Creates a payload for organism `id` with no entries yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            entries: IndexMap::new(),
        }
    }

    /// Organism id, absent on an empty payload.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Number of field entries, not counting `id`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}
