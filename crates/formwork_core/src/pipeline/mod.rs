//! Schema transformation pipeline.
//!
//! # Responsibility
//! - Derive the renderable field list from an organism.
//! - Flatten a field list into the output payload.
//!
//! # Invariants
//! - `process_organism` yields exactly one descriptor per molecule, in order.
//! - `build_payload` yields exactly one entry per descriptor, plus `id`.
//! - Both functions are total and never mutate their inputs.

mod payload;

use crate::model::field::FieldDescriptor;
use crate::model::organism::Organism;
use chrono::NaiveDate;

pub use payload::{build_payload, coerce_payload_value, key_label};

/// Derives one field descriptor per molecule, preserving order.
///
/// `today` seeds date fields and is otherwise unused.
pub fn process_organism(organism: &Organism, today: NaiveDate) -> Vec<FieldDescriptor> {
    organism
        .molecules
        .iter()
        .map(|molecule| {
            debug_assert_eq!(
                crate::registry::lookup(molecule.id.as_str()),
                Some(molecule.kind),
                "molecule id `{}` does not encode its kind",
                molecule.id
            );
            molecule.process(today)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::process_organism;
    use crate::model::molecule::MoleculeKind;
    use crate::model::organism::Organism;
    use chrono::NaiveDate;

    #[test]
    fn process_organism_preserves_order() {
        let mut organism = Organism::new("organism-1");
        organism.molecules.push(MoleculeKind::Date.build("a"));
        organism.molecules.push(MoleculeKind::Text.build("b"));
        organism.molecules.push(MoleculeKind::Number.build("c"));

        let today = NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date");
        let ids: Vec<String> = process_organism(&organism, today)
            .into_iter()
            .map(|field| field.id.into_string())
            .collect();
        assert_eq!(
            ids,
            vec!["dateMolecule|a", "textMolecule|b", "numberMolecule|c"]
        );
    }

    #[test]
    fn empty_organism_yields_no_fields() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date");
        assert!(process_organism(&Organism::new("organism-1"), today).is_empty());
    }
}
