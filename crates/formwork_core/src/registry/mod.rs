//! Field-kind registry.
//!
//! # Responsibility
//! - Pair every `MoleculeKind` with its builder (`schema`) and processor
//!   (`process`).
//! - Expose lookup by tag and enumeration for field selectors.
//!
//! # Invariants
//! - The kind set is closed; an unregistered kind cannot be represented.
//! - Builders are side-effect free; a keyless `template()` is safe to call
//!   for selector metadata.

pub mod process;
pub mod schema;

use crate::model::molecule::MoleculeKind;
use serde::Serialize;

pub use process::DATE_FORMAT;
pub use schema::{AtomDefault, AtomTemplate};

/// Selector entry for one field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoleculeOption {
    pub kind: MoleculeKind,
    /// Identifier tag, e.g. `textMolecule`.
    pub tag: &'static str,
    pub label: &'static str,
}

/// Lists every field kind in selector order.
pub fn available_molecules() -> Vec<MoleculeOption> {
    MoleculeKind::ALL
        .into_iter()
        .map(|kind| MoleculeOption {
            kind,
            tag: kind.tag(),
            label: kind.label(),
        })
        .collect()
}

/// Looks a kind up by its identifier tag or by any id built from it.
pub fn lookup(id_or_tag: &str) -> Option<MoleculeKind> {
    MoleculeKind::from_tag(crate::model::id::parse_id(id_or_tag))
}
