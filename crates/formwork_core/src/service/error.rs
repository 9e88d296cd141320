use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Errors from form session mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Tag does not name a registered field kind.
    UnknownMoleculeType(String),
    /// No molecule with this id in the organism.
    MoleculeNotFound(String),
    /// Molecule exists but has no atom with this id.
    AtomNotFound { molecule_id: String, atom_id: String },
    /// No field descriptor with this id in the current field list.
    FieldNotFound(String),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMoleculeType(tag) => write!(f, "unknown molecule type: `{tag}`"),
            Self::MoleculeNotFound(id) => write!(f, "molecule not found: {id}"),
            Self::AtomNotFound {
                molecule_id,
                atom_id,
            } => write!(f, "atom {atom_id} not found in molecule {molecule_id}"),
            Self::FieldNotFound(id) => write!(f, "form field not found: {id}"),
        }
    }
}

impl Error for SessionError {}
