//! Atom domain model.
//!
//! # Responsibility
//! - Define one configuration input belonging to a molecule.
//! - Tag every atom with an explicit role so processing never has to guess
//!   from identifier text.
//!
//! # Invariants
//! - `id.base()` equals `role.tag()`.
//! - Only `value` changes after construction.

use super::id::CompositeId;
use super::value::FieldValue;
use serde::{Deserialize, Serialize};

/// What a configuration input feeds into on the derived field descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AtomRole {
    /// Question text shown as the field label.
    Prompt,
    /// Hint text inside an empty input.
    Placeholder,
    /// Maximum text length.
    CharacterLimit,
    /// Lower numeric bound.
    Min,
    /// Upper numeric bound.
    Max,
}

impl AtomRole {
    pub const ALL: [AtomRole; 5] = [
        AtomRole::Prompt,
        AtomRole::Placeholder,
        AtomRole::CharacterLimit,
        AtomRole::Min,
        AtomRole::Max,
    ];

    /// Identifier base tag, e.g. `promptAtom`.
    pub const fn tag(self) -> &'static str {
        match self {
            AtomRole::Prompt => "promptAtom",
            AtomRole::Placeholder => "placeholderAtom",
            AtomRole::CharacterLimit => "characterLimitAtom",
            AtomRole::Min => "minAtom",
            AtomRole::Max => "maxAtom",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.tag() == tag)
    }
}

/// Configuration input kind rendered for an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Number,
}

/// One configuration input of a molecule (e.g. "Prompt", "Min").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atom {
    pub id: CompositeId,
    pub role: AtomRole,
    pub label: String,
    /// Serialized as `type` to match the rendered input attribute.
    #[serde(rename = "type")]
    pub input: InputKind,
    pub placeholder: String,
    /// Current user-edited value.
    pub value: FieldValue,
}

impl Atom {
    /// Returns a copy whose identifier carries one more uniqueness suffix.
    pub fn duplicate(&self, key: &str) -> Self {
        Self {
            id: self.id.compose(key),
            ..self.clone()
        }
    }
}
