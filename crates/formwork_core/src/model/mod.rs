//! Form schema domain model.
//!
//! # Responsibility
//! - Define the authored schema (`Organism` → `Molecule` → `Atom`).
//! - Define the derived documents (`FieldDescriptor`, `Payload`).
//!
//! # Invariants
//! - Every molecule and atom id is unique within a session.
//! - Derived documents are pure functions of the authored schema.

pub mod atom;
pub mod field;
pub mod id;
pub mod molecule;
pub mod organism;
pub mod payload;
pub mod value;
