//! Per-field form validation engine.
//!
//! FireEye binds ordered lists of validators to named input fields, runs them
//! on demand, and folds the per-field outcomes into a single pass/fail
//! [`TestResult`]. The UI stays on the other side of two narrow collaborator
//! traits: a [`FieldAccessor`] that reads a field's current text and a
//! [`MessageDisplay`] that shows or clears an inline error.
//!
//! # Example
//!
//! ```
//! use fireeye::{AccessError, FieldAccessor, FieldId, FireEye, ValidatorKind};
//!
//! struct OneField(String);
//!
//! impl FieldAccessor for OneField {
//!     fn text(&self, _field: &FieldId) -> Result<String, AccessError> {
//!         Ok(self.0.clone())
//!     }
//! }
//!
//! # fn main() -> Result<(), fireeye::ConfigError> {
//! let email = FieldId::new("email")?;
//! let mut eye = FireEye::new(OneField("user@example.com".into()));
//! eye.add(&email, [ValidatorKind::NotEmpty, ValidatorKind::Email])?;
//! assert!(eye.test().passed);
//! # Ok(())
//! # }
//! ```

pub mod binding;
pub mod engine;
pub mod error;
pub mod factory;
pub mod field;
pub mod id_card;
pub mod result;
pub mod validator;

pub use binding::FieldBinding;
pub use engine::{FireEye, test_field};
pub use error::ConfigError;
pub use factory::ValidatorKind;
pub use field::{AccessError, FieldAccessor, FieldId, InputHint, MessageDisplay, SilentDisplay};
pub use result::TestResult;
pub use validator::Validator;
