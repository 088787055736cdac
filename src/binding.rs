//! One field's ordered validators plus its last known value and result.

use crate::field::{FieldId, InputHint, MessageDisplay};
use crate::result::TestResult;
use crate::validator::Validator;

/// Associates a field with an append-only, ordered list of validators.
///
/// Validators run strictly in registration order and evaluation stops at the
/// first failure, so cheap/specific rules (NotEmpty) should be registered
/// before expensive ones (checksum).
#[derive(Debug, Clone)]
pub struct FieldBinding {
    field: FieldId,
    validators: Vec<Validator>,
    last_value: String,
    last_result: Option<TestResult>,
}

impl FieldBinding {
    pub(crate) fn new(field: FieldId, validator: Validator) -> Self {
        Self {
            field,
            validators: vec![validator],
            last_value: String::new(),
            last_result: None,
        }
    }

    /// Append a validator. Existing validators are never replaced, removed,
    /// or reordered.
    pub(crate) fn add_validator(&mut self, validator: Validator) {
        self.validators.push(validator);
    }

    /// The bound field's identifier.
    pub fn field(&self) -> &FieldId {
        &self.field
    }

    /// Number of validators attached to this field.
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// The value recorded by the most recent evaluation.
    pub fn last_value(&self) -> &str {
        &self.last_value
    }

    /// The most recent evaluation's result, if any evaluation has run.
    pub fn last_result(&self) -> Option<&TestResult> {
        self.last_result.as_ref()
    }

    /// Evaluate `value` against the validators in order, short-circuiting at
    /// the first failure. Pushes the outcome to `display` and records it as
    /// this binding's last value/result.
    pub(crate) fn evaluate(&mut self, value: String, display: &impl MessageDisplay) -> TestResult {
        let mut outcome = TestResult::passed(value.clone());
        for validator in &self.validators {
            if let Err(diagnostic) = validator.check(&value) {
                let mut failed = TestResult::failed(validator.message(), value.clone());
                if let Some(diagnostic) = diagnostic {
                    failed = failed.with_error(diagnostic);
                }
                outcome = failed;
                break;
            }
        }

        if outcome.passed {
            display.dismiss(&self.field);
        } else {
            display.show(&self.field, outcome.message.as_deref().unwrap_or_default());
        }

        self.last_value = value;
        self.last_result = Some(outcome.clone());
        outcome
    }

    /// The keyboard hint for this field: the first validator implying a
    /// non-text hint wins, otherwise `Text`.
    pub fn input_hint(&self) -> InputHint {
        self.validators
            .iter()
            .map(Validator::input_hint)
            .find(|hint| *hint != InputHint::Text)
            .unwrap_or_default()
    }
}
