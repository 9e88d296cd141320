//! Composite identifier scheme.
//!
//! # Responsibility
//! - Encode a base tag (molecule kind or atom role) plus uniqueness suffixes
//!   into one `|`-delimited string.
//! - Recover the base tag regardless of how many suffixes were appended.
//!
//! # Invariants
//! - The first segment is the base tag and is never rewritten.
//! - Duplication appends a segment; it never replaces an existing one.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Segment delimiter inside composite identifiers.
pub const ID_DELIMITER: char = '|';

/// Returns the base tag of a raw composite identifier.
///
/// Only the first segment is inspected, so the result is stable under any
/// number of appended suffixes.
pub fn parse_id(raw: &str) -> &str {
    match raw.split_once(ID_DELIMITER) {
        Some((base, _)) => base,
        None => raw,
    }
}

/// Identifier of a molecule or atom, e.g. `textMolecule|<key>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeId(String);

impl CompositeId {
    /// Joins `base` and `suffix`. An empty suffix yields the bare base tag.
    pub fn new(base: &str, suffix: &str) -> Self {
        if suffix.is_empty() {
            Self(base.to_string())
        } else {
            Self(format!("{base}{ID_DELIMITER}{suffix}"))
        }
    }

    /// Returns the base tag (first segment).
    pub fn base(&self) -> &str {
        parse_id(&self.0)
    }

    /// Returns the uniqueness suffixes in append order.
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.0.split(ID_DELIMITER).skip(1)
    }

    /// Returns a new identifier with `suffix` appended as one more segment.
    pub fn compose(&self, suffix: &str) -> Self {
        Self::new(&self.0, suffix)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for CompositeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CompositeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for CompositeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CompositeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<str> for CompositeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CompositeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
