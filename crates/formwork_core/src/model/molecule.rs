//! Molecule domain model.
//!
//! # Responsibility
//! - Define the closed set of field kinds a form can contain.
//! - Define one user-configured field definition and its atoms.
//!
//! # Invariants
//! - `id.base()` equals `kind.tag()`.
//! - The atom set is fixed by `kind` and never changes at runtime.
//!
//! # See also
//! - `crate::registry` for per-kind build and process logic.

use super::atom::Atom;
use super::id::CompositeId;
use serde::{Deserialize, Serialize};

/// Field kind a molecule was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoleculeKind {
    #[serde(rename = "textMolecule")]
    Text,
    #[serde(rename = "numberMolecule")]
    Number,
    #[serde(rename = "rangeMolecule")]
    Range,
    #[serde(rename = "dateMolecule")]
    Date,
    #[serde(rename = "yesnoMolecule")]
    YesNo,
}

impl MoleculeKind {
    /// Every kind, in selector order.
    pub const ALL: [MoleculeKind; 5] = [
        MoleculeKind::Text,
        MoleculeKind::Number,
        MoleculeKind::Range,
        MoleculeKind::Date,
        MoleculeKind::YesNo,
    ];

    /// Identifier base tag, e.g. `textMolecule`.
    pub const fn tag(self) -> &'static str {
        match self {
            MoleculeKind::Text => "textMolecule",
            MoleculeKind::Number => "numberMolecule",
            MoleculeKind::Range => "rangeMolecule",
            MoleculeKind::Date => "dateMolecule",
            MoleculeKind::YesNo => "yesnoMolecule",
        }
    }

    /// Human-readable kind name.
    pub const fn label(self) -> &'static str {
        match self {
            MoleculeKind::Text => "Text",
            MoleculeKind::Number => "Number",
            MoleculeKind::Range => "Range",
            MoleculeKind::Date => "Date",
            MoleculeKind::YesNo => "Yes-No",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

/// One configured field definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Molecule {
    pub id: CompositeId,
    pub kind: MoleculeKind,
    pub label: String,
    pub atoms: Vec<Atom>,
}

impl Molecule {
    pub fn atom(&self, atom_id: &str) -> Option<&Atom> {
        self.atoms.iter().find(|atom| atom.id == atom_id)
    }

    pub fn atom_mut(&mut self, atom_id: &str) -> Option<&mut Atom> {
        self.atoms.iter_mut().find(|atom| atom.id == atom_id)
    }

    /// Deep-copies this molecule, appending `key` to its id and every atom id.
    ///
    /// Atom values, including edits, carry over unchanged.
    pub fn duplicate(&self, key: &str) -> Self {
        Self {
            id: self.id.compose(key),
            kind: self.kind,
            label: self.label.clone(),
            atoms: self.atoms.iter().map(|atom| atom.duplicate(key)).collect(),
        }
    }
}
