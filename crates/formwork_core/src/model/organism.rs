//! Organism: the root form schema document.

use super::molecule::Molecule;
use serde::{Deserialize, Serialize};

/// Root schema document owning the ordered field definitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub id: String,
    /// Display title of the form.
    pub name: String,
    pub molecules: Vec<Molecule>,
}

impl Organism {
    /// Creates an empty, unnamed organism.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            molecules: Vec::new(),
        }
    }

    pub fn molecule(&self, molecule_id: &str) -> Option<&Molecule> {
        self.molecules
            .iter()
            .find(|molecule| molecule.id == molecule_id)
    }

    pub fn position(&self, molecule_id: &str) -> Option<usize> {
        self.molecules
            .iter()
            .position(|molecule| molecule.id == molecule_id)
    }
}
