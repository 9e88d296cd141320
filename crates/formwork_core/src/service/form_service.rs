//! Form builder session: the single owner of authored and derived state.
//!
//! # Responsibility
//! - Expose one entry point per user mutation (add, edit, delete,
//!   duplicate, preview edit, rename).
//! - Re-derive field descriptors and payload after every mutation.
//!
//! # Invariants
//! - Derivation order is organism → fields → payload, never interleaved with
//!   a stale intermediate.
//! - Snapshots handed out earlier are never mutated; writes go through
//!   `Arc::make_mut` (copy-on-write).
//! - Preview edits live on the field list only and are discarded by the next
//!   organism mutation.

use super::error::{SessionError, SessionResult};
use super::keys::{new_organism_id, Clock, KeyGenerator, SystemClock, UuidKeyGenerator};
use crate::config::CoreConfig;
use crate::model::field::FieldDescriptor;
use crate::model::id::CompositeId;
use crate::model::molecule::{Molecule, MoleculeKind};
use crate::model::organism::Organism;
use crate::model::payload::Payload;
use crate::model::value::FieldValue;
use crate::pipeline::{build_payload, key_label, process_organism};
use log::{debug, info};
use serde::Serialize;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Immutable view of the three session documents at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub organism: Arc<Organism>,
    pub fields: Arc<Vec<FieldDescriptor>>,
    pub payload: Arc<Payload>,
}

/// One payload line prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadRow {
    pub key: String,
    pub label: String,
    pub value: String,
}

impl FormSnapshot {
    pub fn organism_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.organism.as_ref())
    }

    pub fn fields_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.fields.as_ref())
    }

    pub fn payload_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self.payload.as_ref())
    }

    /// Payload field entries paired with their display labels.
    pub fn payload_rows(&self) -> Vec<PayloadRow> {
        self.payload
            .iter()
            .map(|(key, value)| PayloadRow {
                key: key.to_string(),
                label: key_label(key, &self.fields),
                value: value.to_text(),
            })
            .collect()
    }
}

/// Stateful form builder session.
pub struct FormSession {
    organism: Arc<Organism>,
    fields: Arc<Vec<FieldDescriptor>>,
    payload: Arc<Payload>,
    keys: Box<dyn KeyGenerator + Send>,
    clock: Box<dyn Clock + Send>,
}

impl FormSession {
    /// Creates an empty session with UUID keys and the system clock.
    pub fn new(config: &CoreConfig) -> Self {
        Self::with_parts(
            new_organism_id(&config.organism_prefix),
            UuidKeyGenerator,
            SystemClock,
        )
    }

    /// Creates an empty session with caller-provided id, keys and clock.
    pub fn with_parts(
        organism_id: impl Into<String>,
        keys: impl KeyGenerator + Send + 'static,
        clock: impl Clock + Send + 'static,
    ) -> Self {
        let mut session = Self {
            organism: Arc::new(Organism::new(organism_id)),
            fields: Arc::new(Vec::new()),
            payload: Arc::new(Payload::default()),
            keys: Box::new(keys),
            clock: Box::new(clock),
        };
        session.rederive_fields();
        info!(
            "event=session_init module=session status=ok organism_id={}",
            session.organism.id
        );
        session
    }

    pub fn organism(&self) -> &Organism {
        &self.organism
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            organism: Arc::clone(&self.organism),
            fields: Arc::clone(&self.fields),
            payload: Arc::clone(&self.payload),
        }
    }

    /// Appends a freshly built molecule of `kind` and returns its id.
    pub fn add_molecule(&mut self, kind: MoleculeKind) -> CompositeId {
        let key = self.keys.next_key();
        let molecule = kind.build(&key);
        let id = molecule.id.clone();

        Arc::make_mut(&mut self.organism).molecules.push(molecule);
        debug!(
            "event=molecule_add module=session status=ok kind={} molecules={}",
            kind.tag(),
            self.organism.molecules.len()
        );
        self.rederive_fields();
        id
    }

    /// Same as [`FormSession::add_molecule`], resolving the kind by tag.
    pub fn add_molecule_by_tag(&mut self, tag: &str) -> SessionResult<CompositeId> {
        let kind = MoleculeKind::from_tag(tag)
            .ok_or_else(|| SessionError::UnknownMoleculeType(tag.to_string()))?;
        Ok(self.add_molecule(kind))
    }

    /// Replaces one atom's value.
    pub fn edit_atom(
        &mut self,
        molecule_id: &str,
        atom_id: &str,
        value: impl Into<FieldValue>,
    ) -> SessionResult<()> {
        let index = self.require_molecule(molecule_id)?;
        let atom_index = self.organism.molecules[index]
            .atoms
            .iter()
            .position(|atom| atom.id == atom_id)
            .ok_or_else(|| SessionError::AtomNotFound {
                molecule_id: molecule_id.to_string(),
                atom_id: atom_id.to_string(),
            })?;

        let organism = Arc::make_mut(&mut self.organism);
        organism.molecules[index].atoms[atom_index].value = value.into();
        debug!("event=atom_edit module=session status=ok molecule_id={molecule_id} atom_id={atom_id}");
        self.rederive_fields();
        Ok(())
    }

    /// Removes one molecule, keeping the order of the rest.
    pub fn delete_molecule(&mut self, molecule_id: &str) -> SessionResult<Molecule> {
        let index = self.require_molecule(molecule_id)?;
        let removed = Arc::make_mut(&mut self.organism).molecules.remove(index);
        debug!(
            "event=molecule_delete module=session status=ok molecule_id={molecule_id} molecules={}",
            self.organism.molecules.len()
        );
        self.rederive_fields();
        Ok(removed)
    }

    /// Appends a deep copy of one molecule under a fresh key.
    ///
    /// The copy keeps the source's current atom values; the source is left
    /// untouched.
    pub fn duplicate_molecule(&mut self, molecule_id: &str) -> SessionResult<CompositeId> {
        let index = self.require_molecule(molecule_id)?;
        let key = self.keys.next_key();
        let copy = self.organism.molecules[index].duplicate(&key);
        let id = copy.id.clone();

        Arc::make_mut(&mut self.organism).molecules.push(copy);
        debug!("event=molecule_duplicate module=session status=ok source_id={molecule_id} copy_id={id}");
        self.rederive_fields();
        Ok(id)
    }

    /// Replaces one field descriptor's value from live preview input.
    ///
    /// Only the payload is re-derived; molecules are not touched.
    pub fn edit_field_value(
        &mut self,
        field_id: &str,
        value: impl Into<FieldValue>,
    ) -> SessionResult<()> {
        let index = self
            .fields
            .iter()
            .position(|field| field.id == field_id)
            .ok_or_else(|| SessionError::FieldNotFound(field_id.to_string()))?;

        Arc::make_mut(&mut self.fields)[index].value = value.into();
        debug!("event=field_edit module=session status=ok field_id={field_id}");
        self.rederive_payload();
        Ok(())
    }

    /// Sets the form title.
    pub fn rename(&mut self, name: impl Into<String>) {
        Arc::make_mut(&mut self.organism).name = name.into();
        debug!("event=organism_rename module=session status=ok");
        self.rederive_fields();
    }

    /// Re-derives fields and payload against the current clock.
    ///
    /// Drops preview edits, like any organism mutation.
    pub fn refresh(&mut self) {
        self.rederive_fields();
    }

    fn require_molecule(&self, molecule_id: &str) -> SessionResult<usize> {
        self.organism
            .position(molecule_id)
            .ok_or_else(|| SessionError::MoleculeNotFound(molecule_id.to_string()))
    }

    fn rederive_fields(&mut self) {
        self.fields = Arc::new(process_organism(&self.organism, self.clock.today()));
        self.rederive_payload();
    }

    fn rederive_payload(&mut self) {
        self.payload = Arc::new(build_payload(
            Some(self.organism.as_ref()),
            Some(self.fields.as_slice()),
        ));
    }
}

impl Debug for FormSession {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("organism_id", &self.organism.id)
            .field("molecules", &self.organism.molecules.len())
            .field("fields", &self.fields.len())
            .finish_non_exhaustive()
    }
}
