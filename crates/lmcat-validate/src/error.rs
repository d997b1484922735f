//! Schema violations and catalog-wide validation failures.

use std::fmt;

/// The rule a field broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationRule {
    // Structure
    UnknownField,
    MissingField,
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    // Values
    Empty,
    InvalidFormat {
        value: String,
        expected: &'static str,
    },
    UnknownVariety(String),
    UnknownCutOffType(String),

    // Invariants
    PlannedWhileAvailable,
    MissingUrlWhileAvailable,
    FutureCutOff,
    CutOffTypeMismatch,
}

impl fmt::Display for ViolationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField => f.write_str("is not a catalog field"),
            Self::MissingField => f.write_str("is required"),
            Self::WrongType { expected, found } => {
                write!(f, "must be {expected} (found {found})")
            }
            Self::Empty => f.write_str("must not be empty"),
            Self::InvalidFormat { value, expected } => {
                write!(f, "has invalid value '{value}' (expected {expected})")
            }
            Self::UnknownVariety(value) => write!(f, "has unknown language variety '{value}'"),
            Self::UnknownCutOffType(value) => write!(f, "has unknown cutoff type '{value}'"),
            Self::PlannedWhileAvailable => {
                f.write_str("must be unset when available_now is true")
            }
            Self::MissingUrlWhileAvailable => {
                f.write_str("must be non-empty when available_now is true")
            }
            Self::FutureCutOff => f.write_str("must not be 'future'"),
            Self::CutOffTypeMismatch => {
                f.write_str("must have date and type both empty or both set")
            }
        }
    }
}

/// First schema violation found in one entity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity}: {field} {rule}")]
pub struct SchemaViolation {
    /// Entity name, or its forest path when it has no textual name.
    pub entity: String,
    /// Dotted path of the offending attribute, e.g. `weight_availability.url`.
    pub field: String,
    pub rule: ViolationRule,
}

/// The catalog was rejected because at least one entity failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} of {total} entities failed validation:{}", .violations.len(), bullet_list(.violations))]
pub struct ValidationError {
    pub total: usize,
    pub violations: Vec<SchemaViolation>,
}

fn bullet_list(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(|violation| format!("\n  - {violation}"))
        .collect()
}
