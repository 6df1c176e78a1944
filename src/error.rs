//! Error types.
//!
//! Validation errors are values, not faults: they are returned to the
//! editor for display and never abort loading a stored requirement.

use thiserror::Error;

use crate::models::Field;

/// A problem with one field of a requirement.
///
/// The `Display` text is the message shown to the configuring user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequirementError {
    /// One or more explicit resource names are not in the pool.
    #[error("The following resources do not exist: [{}]", .0.join(", "))]
    UnknownResources(Vec<String>),

    /// More than one of names, label, and label script is set.
    #[error("Only label, label script, or resources can be defined, not all three.")]
    MutuallyExclusive,

    /// The label is not carried by any resource in the pool.
    #[error("The label does not exist: {0}")]
    UnknownLabel(String),

    /// The requested count is not an integer.
    #[error("Could not parse the given value as integer.")]
    CardinalityParse(String),

    /// The requested count exceeds what the selection can yield.
    #[error("Given amount {requested} is greater than amount of resources: {available}.")]
    CardinalityRange { requested: u32, available: usize },
}

impl RequirementError {
    /// The form field this error is reported against.
    pub fn field(&self) -> Field {
        match self {
            Self::UnknownResources(_) => Field::ResourceNames,
            Self::MutuallyExclusive | Self::UnknownLabel(_) => Field::LabelName,
            Self::CardinalityParse(_) | Self::CardinalityRange { .. } => Field::ResourceNumber,
        }
    }
}

/// Errors binding a submitted form into a requirement.
#[derive(Debug, Error)]
pub enum FormError {
    /// The property section is present but is not an object.
    #[error("form section '{0}' is not an object")]
    NotAnObject(String),

    /// A field holds a value of the wrong JSON type.
    #[error("form field '{field}' must be a string, got {found}")]
    NotAString { field: &'static str, found: String },

    /// The script object could not be decoded.
    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),
}

/// A failure reported by an external script evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("script evaluation failed for resource '{resource}': {reason}")]
pub struct ScriptError {
    /// Resource the script was evaluated against.
    pub resource: String,
    /// Evaluator-supplied reason.
    pub reason: String,
}

/// Errors resolving a requirement to a concrete resource set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The requirement selects nothing.
    #[error("no resources, label, or label script defined")]
    NoSelection,

    /// Several selection modes are populated at once.
    #[error("conflicting selection fields: {}", join_fields(.0))]
    Conflicting(Vec<Field>),

    /// Named resources are missing from the pool.
    #[error("unknown resources: [{}]", .0.join(", "))]
    UnknownResources(Vec<String>),

    /// The pool cannot supply the requested count.
    #[error("requested {requested} resources but only {available} match")]
    Insufficient { requested: usize, available: usize },

    /// The stored count is malformed.
    #[error(transparent)]
    Cardinality(#[from] RequirementError),
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = RequirementError::UnknownResources(vec!["D".into(), "E".into()]);
        assert_eq!(e.to_string(), "The following resources do not exist: [D, E]");

        let e = RequirementError::UnknownLabel("foo".into());
        assert_eq!(e.to_string(), "The label does not exist: foo");

        let e = RequirementError::CardinalityRange {
            requested: 4,
            available: 3,
        };
        assert_eq!(
            e.to_string(),
            "Given amount 4 is greater than amount of resources: 3."
        );
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(
            RequirementError::UnknownResources(vec![]).field(),
            Field::ResourceNames
        );
        assert_eq!(RequirementError::MutuallyExclusive.field(), Field::LabelName);
        assert_eq!(
            RequirementError::CardinalityParse("x".into()).field(),
            Field::ResourceNumber
        );
    }
}
