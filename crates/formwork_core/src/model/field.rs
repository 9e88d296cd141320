//! Field descriptor: the derived, renderable form of one molecule.
//!
//! # Invariants
//! - `id` equals the source molecule id.
//! - Descriptors are recomputed from molecules, never edited back into them.
//!   Only `value` is touched afterwards, by live preview input.

use super::id::CompositeId;
use super::value::FieldValue;
use serde::{Deserialize, Serialize};

/// Semantic type of a rendered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Range,
    Date,
}

/// Renderable field model produced by a molecule processor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: CompositeId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub value: FieldValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<FieldValue>,
}

impl FieldDescriptor {
    /// Creates a descriptor with only the always-present attributes set.
    pub fn seed(id: CompositeId, field_type: FieldType, value: FieldValue) -> Self {
        Self {
            id,
            field_type,
            value,
            label: None,
            placeholder: None,
            max_length: None,
            min: None,
            max: None,
        }
    }
}
