//! Core domain logic for the Formwork form builder.
//! This crate is the single source of truth for schema invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod registry;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::atom::{Atom, AtomRole, InputKind};
pub use model::field::{FieldDescriptor, FieldType};
pub use model::id::{parse_id, CompositeId, ID_DELIMITER};
pub use model::molecule::{Molecule, MoleculeKind};
pub use model::organism::Organism;
pub use model::payload::Payload;
pub use model::value::FieldValue;
pub use pipeline::{build_payload, coerce_payload_value, key_label, process_organism};
pub use registry::{available_molecules, MoleculeOption};
pub use service::error::{SessionError, SessionResult};
pub use service::form_service::{FormSession, FormSnapshot, PayloadRow};
pub use service::keys::{Clock, FixedClock, KeyGenerator, SystemClock, UuidKeyGenerator};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
