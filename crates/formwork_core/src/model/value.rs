//! Scalar value shared by atoms, field descriptors and payload entries.
//!
//! # Responsibility
//! - Carry user-edited input values without forcing an early type decision.
//! - Provide the lossy number/text coercions used by payload assembly.
//!
//! # Invariants
//! - Integral numbers serialize without a fractional part.
//! - Non-finite numbers serialize as JSON `null`.
//! - Number coercion never fails; unparseable input becomes `NaN`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Largest integer magnitude an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Untyped scalar value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// No value yet (number descriptors start here).
    #[default]
    Null,
    /// Numeric value. May hold `NaN` as a coercion sentinel.
    Number(f64),
    /// Free text, the shape every configuration input edit arrives in.
    Text(String),
}

impl FieldValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text slice when this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Coerces to a number.
    ///
    /// `Null`, blank text and non-numeric text all yield `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => f64::NAN,
            Self::Number(value) => *value,
            Self::Text(value) => parse_number(value),
        }
    }

    /// Coerces to text. `Null` becomes the empty string.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    // Rust accepts `inf`/`nan` spellings that are not numeric user input.
    if trimmed
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn as_exact_integer(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Some(value as i64)
    } else {
        None
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Number(value) if value.is_nan() => f.write_str("NaN"),
            Self::Number(value) if value.is_infinite() => {
                if value.is_sign_positive() {
                    f.write_str("Infinity")
                } else {
                    f.write_str("-Infinity")
                }
            }
            Self::Number(value) => match as_exact_integer(*value) {
                Some(integer) => write!(f, "{integer}"),
                None => write!(f, "{value}"),
            },
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Text(value) => serializer.serialize_str(value),
            Self::Number(value) if !value.is_finite() => serializer.serialize_none(),
            Self::Number(value) => match as_exact_integer(*value) {
                Some(integer) => serializer.serialize_i64(integer),
                None => serializer.serialize_f64(*value),
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireScalar {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<WireScalar>::deserialize(deserializer)? {
            None => Self::Null,
            Some(WireScalar::Number(value)) => Self::Number(value),
            Some(WireScalar::Text(value)) => Self::Text(value),
        })
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
