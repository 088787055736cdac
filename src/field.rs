//! Field identifiers and the two UI collaborator traits.
//!
//! The engine never holds a live widget. It stores [`FieldId`]s and reaches
//! the UI through an injected [`FieldAccessor`] (read current text) and
//! [`MessageDisplay`] (show/clear an inline error), so no lifetime coupling
//! exists between the engine and a UI-owned object graph.

use std::fmt;

use crate::error::ConfigError;

/// Opaque identifier for one input field, unique within a [`crate::FireEye`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldId(String);

impl FieldId {
    /// Create a field identifier. Empty or whitespace-only identifiers are
    /// rejected with [`ConfigError::MissingFieldId`].
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::MissingFieldId);
        }
        Ok(Self(id))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a field handle could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    /// No field exists for the identifier.
    #[error("no such field")]
    Unresolved,
    /// The field exists but cannot provide text content.
    #[error("field is not text-capable")]
    NotText,
}

/// Keyboard/input-type hint inferred from a field's validators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputHint {
    /// Plain text entry (default).
    #[default]
    Text,
    /// Numeric entry.
    Number,
    /// Phone number entry.
    Phone,
    /// Email address entry.
    Email,
    /// Date entry.
    Date,
}

/// Read-side collaborator: resolves a field identifier to its current text.
pub trait FieldAccessor {
    /// Return the field's current content. Implementations must return an
    /// empty string rather than failing when the field is merely blank.
    fn text(&self, field: &FieldId) -> Result<String, AccessError>;

    /// Apply an inferred input-type hint to the field. Default: no-op.
    fn apply_input_hint(&self, field: &FieldId, hint: InputHint) {
        let _ = (field, hint);
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for &T {
    fn text(&self, field: &FieldId) -> Result<String, AccessError> {
        (**self).text(field)
    }

    fn apply_input_hint(&self, field: &FieldId, hint: InputHint) {
        (**self).apply_input_hint(field, hint);
    }
}

/// Write-side collaborator: shows or clears an inline error for a field.
pub trait MessageDisplay {
    /// Display an inline error message next to the field.
    fn show(&self, field: &FieldId, message: &str);

    /// Clear any displayed error for the field.
    fn dismiss(&self, field: &FieldId);
}

impl<T: MessageDisplay + ?Sized> MessageDisplay for &T {
    fn show(&self, field: &FieldId, message: &str) {
        (**self).show(field, message);
    }

    fn dismiss(&self, field: &FieldId) {
        (**self).dismiss(field);
    }
}

/// Default [`MessageDisplay`] that performs no visible action. Real UIs
/// usually delegate to the widget's own error decoration instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDisplay;

impl MessageDisplay for SilentDisplay {
    fn show(&self, _field: &FieldId, _message: &str) {}

    fn dismiss(&self, _field: &FieldId) {}
}
