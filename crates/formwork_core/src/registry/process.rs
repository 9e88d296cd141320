//! Molecule → field descriptor reduction.

use crate::model::atom::{Atom, AtomRole};
use crate::model::field::{FieldDescriptor, FieldType};
use crate::model::molecule::{Molecule, MoleculeKind};
use crate::model::value::FieldValue;
use chrono::NaiveDate;

/// Calendar format of a date field's default value.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl MoleculeKind {
    /// Semantic type of descriptors produced for this kind.
    pub const fn field_type(self) -> FieldType {
        match self {
            MoleculeKind::Text | MoleculeKind::YesNo => FieldType::Text,
            MoleculeKind::Number => FieldType::Number,
            MoleculeKind::Range => FieldType::Range,
            MoleculeKind::Date => FieldType::Date,
        }
    }

    /// Initial descriptor value before any preview input.
    pub fn seed_value(self, today: NaiveDate) -> FieldValue {
        match self {
            MoleculeKind::Number => FieldValue::Null,
            MoleculeKind::Date => FieldValue::Text(today.format(DATE_FORMAT).to_string()),
            MoleculeKind::Text | MoleculeKind::Range | MoleculeKind::YesNo => {
                FieldValue::text("")
            }
        }
    }

    /// Folds `molecule`'s atoms into one field descriptor.
    ///
    /// `today` only affects date kinds. Atoms this kind does not consume are
    /// ignored; missing atoms leave their attribute absent.
    pub fn process(self, molecule: &Molecule, today: NaiveDate) -> FieldDescriptor {
        let mut output =
            FieldDescriptor::seed(molecule.id.clone(), self.field_type(), self.seed_value(today));
        for atom in &molecule.atoms {
            self.apply(&mut output, atom);
        }
        output
    }

    fn apply(self, output: &mut FieldDescriptor, atom: &Atom) {
        use MoleculeKind::{Number, Range, Text};

        match (self, atom.role) {
            (_, AtomRole::Prompt) => output.label = Some(atom.value.to_text()),
            (Text, AtomRole::Placeholder) => output.placeholder = Some(atom.value.to_text()),
            (Text, AtomRole::CharacterLimit) => output.max_length = Some(atom.value.clone()),
            (Number | Range, AtomRole::Min) => output.min = Some(atom.value.clone()),
            (Number | Range, AtomRole::Max) => output.max = Some(atom.value.clone()),
            _ => {}
        }
    }
}

impl Molecule {
    /// Derives this molecule's field descriptor.
    pub fn process(&self, today: NaiveDate) -> FieldDescriptor {
        self.kind.process(self, today)
    }
}
