//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the form session's mutation entry points to Dart via FRB.
//! - Hand the organism, field list and payload back as pretty JSON.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide session backs every call.

use formwork_core::{
    available_molecules, core_version as core_version_inner, init_logging as init_logging_inner,
    CoreConfig, FormSession, FormSnapshot, SessionResult,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static SESSION: OnceLock<Mutex<FormSession>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.trim()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Selector entry for one field kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoleculeOptionItem {
    /// Kind tag passed back to `form_add`, e.g. `textMolecule`.
    pub tag: String,
    /// Human-readable kind name.
    pub label: String,
}

/// Generic action response envelope for form mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormActionResponse {
    /// Whether the mutation was applied.
    pub ok: bool,
    /// Id of the created molecule, for add/duplicate.
    pub molecule_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl FormActionResponse {
    fn from_result<T>(
        action: &str,
        result: SessionResult<T>,
        id_of: impl FnOnce(T) -> Option<String>,
    ) -> Self {
        match result {
            Ok(value) => Self {
                ok: true,
                molecule_id: id_of(value),
                message: "ok".to_string(),
            },
            Err(err) => Self {
                ok: false,
                molecule_id: None,
                message: format!("{action} failed: {err}"),
            },
        }
    }
}

/// One payload line prepared for the preview list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadRowItem {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// The three serialized documents of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocuments {
    pub organism_id: String,
    pub organism_json: String,
    pub fields_json: String,
    pub payload_json: String,
    pub payload_rows: Vec<PayloadRowItem>,
    /// Empty on success, serialization error otherwise.
    pub message: String,
}

/// Lists every field kind in selector order.
#[flutter_rust_bridge::frb(sync)]
pub fn form_available_molecules() -> Vec<MoleculeOptionItem> {
    available_molecules()
        .into_iter()
        .map(|option| MoleculeOptionItem {
            tag: option.tag.to_string(),
            label: option.label.to_string(),
        })
        .collect()
}

/// Appends a new field of kind `tag`.
#[flutter_rust_bridge::frb(sync)]
pub fn form_add(tag: String) -> FormActionResponse {
    let result = with_session(|session| session.add_molecule_by_tag(tag.trim()));
    FormActionResponse::from_result("form_add", result, |id| Some(id.into_string()))
}

/// Replaces one configuration input value.
#[flutter_rust_bridge::frb(sync)]
pub fn form_edit_atom(molecule_id: String, atom_id: String, value: String) -> FormActionResponse {
    let result = with_session(|session| session.edit_atom(&molecule_id, &atom_id, value));
    FormActionResponse::from_result("form_edit_atom", result, |()| None)
}

/// Deletes one field.
#[flutter_rust_bridge::frb(sync)]
pub fn form_delete(molecule_id: String) -> FormActionResponse {
    let result = with_session(|session| session.delete_molecule(&molecule_id));
    FormActionResponse::from_result("form_delete", result, |removed| {
        Some(removed.id.into_string())
    })
}

/// Appends a copy of one field, carrying its current configuration.
#[flutter_rust_bridge::frb(sync)]
pub fn form_duplicate(molecule_id: String) -> FormActionResponse {
    let result = with_session(|session| session.duplicate_molecule(&molecule_id));
    FormActionResponse::from_result("form_duplicate", result, |id| Some(id.into_string()))
}

/// Records live preview input for one field.
#[flutter_rust_bridge::frb(sync)]
pub fn form_edit_field_value(field_id: String, value: String) -> FormActionResponse {
    let result = with_session(|session| session.edit_field_value(&field_id, value));
    FormActionResponse::from_result("form_edit_field_value", result, |()| None)
}

/// Sets the form title.
#[flutter_rust_bridge::frb(sync)]
pub fn form_edit_name(name: String) -> FormActionResponse {
    let result = with_session(|session| {
        session.rename(name);
        Ok(())
    });
    FormActionResponse::from_result("form_edit_name", result, |()| None)
}

/// Starts over with an empty form; returns the new organism id.
#[flutter_rust_bridge::frb(sync)]
pub fn form_reset() -> String {
    let fresh = FormSession::new(&resolve_config());
    let id = fresh.organism().id.clone();
    *lock_session() = fresh;
    id
}

/// Serializes the current organism, field list and payload.
#[flutter_rust_bridge::frb(sync)]
pub fn form_documents() -> FormDocuments {
    let snapshot = lock_session().snapshot();
    render_documents(&snapshot)
}

fn render_documents(snapshot: &FormSnapshot) -> FormDocuments {
    let rendered = snapshot.organism_json_pretty().and_then(|organism| {
        Ok((
            organism,
            snapshot.fields_json_pretty()?,
            snapshot.payload_json_pretty()?,
        ))
    });
    let (organism_json, fields_json, payload_json, message) = match rendered {
        Ok((organism, fields, payload)) => (organism, fields, payload, String::new()),
        Err(err) => (
            String::new(),
            String::new(),
            String::new(),
            format!("form_documents failed: {err}"),
        ),
    };

    FormDocuments {
        organism_id: snapshot.organism.id.clone(),
        organism_json,
        fields_json,
        payload_json,
        payload_rows: snapshot
            .payload_rows()
            .into_iter()
            .map(|row| PayloadRowItem {
                key: row.key,
                label: row.label,
                value: row.value,
            })
            .collect(),
        message,
    }
}

fn resolve_config() -> CoreConfig {
    CoreConfig::from_env().unwrap_or_else(|err| {
        warn!("event=config_load module=ffi status=fallback error={err}");
        CoreConfig::default()
    })
}

fn lock_session() -> MutexGuard<'static, FormSession> {
    SESSION
        .get_or_init(|| Mutex::new(FormSession::new(&resolve_config())))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn with_session<T>(f: impl FnOnce(&mut FormSession) -> SessionResult<T>) -> SessionResult<T> {
    f(&mut lock_session())
}
