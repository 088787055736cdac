//! Configuration error types.
//!
//! These cover programmer/setup mistakes during registration and validator
//! construction. A failing validation is never an error; it is the normal
//! negative outcome carried in a [`crate::TestResult`].

use crate::field::{AccessError, FieldId};

/// Errors raised while registering fields or building validators.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `add` was called with zero validators or kinds.
    #[error("at least one validator is required")]
    EmptyValidatorList,

    /// The field identifier does not resolve to a known field.
    #[error("field `{0}` does not resolve to a known field")]
    UnresolvedField(String),

    /// The field resolved, but is not text-capable.
    #[error("field `{0}` is not a text field")]
    NotATextField(String),

    /// An empty or blank field identifier was supplied.
    #[error("a field identifier must not be empty")]
    MissingFieldId,

    /// A kind token with no registered construction rule.
    #[error("unsupported validator kind `{0}`")]
    UnsupportedKind(String),

    /// Parameters that are malformed for the requested kind.
    #[error("invalid parameters for `{kind}` validator: {reason}")]
    InvalidParameters {
        /// Name of the validator kind being built.
        kind: &'static str,
        /// What was wrong with the parameters.
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn from_access(field: &FieldId, err: AccessError) -> Self {
        match err {
            AccessError::Unresolved => Self::UnresolvedField(field.as_str().to_string()),
            AccessError::NotText => Self::NotATextField(field.as_str().to_string()),
        }
    }
}
