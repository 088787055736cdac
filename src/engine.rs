//! The validation set: registration, full-form testing, aggregation.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::binding::FieldBinding;
use crate::error::ConfigError;
use crate::factory::{self, ValidatorKind};
use crate::field::{FieldAccessor, FieldId, MessageDisplay, SilentDisplay};
use crate::result::TestResult;
use crate::validator::Validator;

/// Per-form validation orchestrator.
///
/// Holds one [`FieldBinding`] per registered field in registration order,
/// reads field content through the injected [`FieldAccessor`], and pushes
/// per-field outcomes to the injected [`MessageDisplay`]. Create one per
/// form session; instances are not meant for concurrent mutation.
pub struct FireEye<A, D = SilentDisplay> {
    accessor: A,
    display: D,
    bindings: Vec<FieldBinding>,
    // Independently-removable view used only by the input-hint pass.
    hint_view: Vec<FieldId>,
    // Last-tested value per field, updated only by `test`.
    values: HashMap<FieldId, String>,
    debug: bool,
}

// Manual impl: the injected accessor/display need not be `Debug`.
impl<A, D> fmt::Debug for FireEye<A, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireEye")
            .field("bindings", &self.bindings)
            .field("hint_view", &self.hint_view)
            .field("values", &self.values)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl<A: FieldAccessor> FireEye<A> {
    /// Create an engine with the default (silent) message display.
    pub fn new(accessor: A) -> Self {
        Self::with_display(accessor, SilentDisplay)
    }
}

impl<A: FieldAccessor, D: MessageDisplay> FireEye<A, D> {
    /// Create an engine with an explicit message display.
    pub fn with_display(accessor: A, display: D) -> Self {
        Self {
            accessor,
            display,
            bindings: Vec::new(),
            hint_view: Vec::new(),
            values: HashMap::new(),
            debug: false,
        }
    }

    /// Enable or disable the per-field diagnostic trace. The trace goes
    /// through `log::debug!` and never alters control flow or results.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    /// Whether a binding exists for the field.
    pub fn is_bound(&self, field: &FieldId) -> bool {
        self.binding(field).is_some()
    }

    /// Read-only view of the binding for a field, if one exists.
    pub fn binding(&self, field: &FieldId) -> Option<&FieldBinding> {
        self.bindings.iter().find(|b| b.field() == field)
    }

    /// Number of bound fields.
    pub fn field_count(&self) -> usize {
        self.bindings.len()
    }

    /// Register validator kinds against a field. Kinds are built through the
    /// factory and appended in the given order.
    pub fn add(
        &mut self,
        field: &FieldId,
        kinds: impl IntoIterator<Item = ValidatorKind>,
    ) -> Result<&mut Self, ConfigError> {
        let validators = kinds
            .into_iter()
            .map(factory::build)
            .collect::<Result<Vec<_>, _>>()?;
        self.add_validators(field, validators)
    }

    /// Register already-built validators against a field.
    ///
    /// If the field is already bound, the validators are appended to the
    /// existing ordered list rather than replacing it. The field must
    /// resolve to a text-capable field at registration time.
    pub fn add_validators(
        &mut self,
        field: &FieldId,
        validators: Vec<Validator>,
    ) -> Result<&mut Self, ConfigError> {
        if validators.is_empty() {
            return Err(ConfigError::EmptyValidatorList);
        }
        self.accessor
            .text(field)
            .map_err(|e| ConfigError::from_access(field, e))?;

        let mut validators = validators.into_iter();
        if let Some(binding) = self.bindings.iter_mut().find(|b| b.field() == field) {
            for validator in validators {
                binding.add_validator(validator);
            }
        } else if let Some(first) = validators.next() {
            let mut binding = FieldBinding::new(field.clone(), first);
            for validator in validators {
                binding.add_validator(validator);
            }
            self.hint_view.push(field.clone());
            self.values.insert(field.clone(), String::new());
            self.bindings.push(binding);
        }
        Ok(self)
    }

    /// Test every bound field, evaluating all of them regardless of failures.
    pub fn test(&mut self) -> TestResult {
        self.test_continuous(true)
    }

    /// Test every bound field in registration order.
    ///
    /// The aggregate `passed` is the logical AND across all per-field
    /// results; `message`, `error`, and `value` come from the last binding
    /// the loop touched, so on success the message is absent. With
    /// `continuous` false, iteration stops at the first failing field and
    /// later fields keep their previously recorded values. With zero bound
    /// fields the result is `passed=false` with
    /// [`TestResult::NO_TEST_CONFIGURATIONS`].
    pub fn test_continuous(&mut self, continuous: bool) -> TestResult {
        let mut pass_flag = true;
        let mut message = Some(TestResult::NO_TEST_CONFIGURATIONS.to_string());
        let mut error = None;
        let mut value = None;
        let mut evaluated = false;

        for binding in &mut self.bindings {
            let result = match self.accessor.text(binding.field()) {
                Ok(text) => binding.evaluate(text, &self.display),
                // A field that vanished mid-session degrades to a failed
                // test instead of a panic.
                Err(e) => TestResult::failed(e.to_string(), binding.last_value().to_string())
                    .with_error(e.to_string()),
            };
            if self.debug {
                debug!("field {} tested: {}", binding.field(), result);
            }
            pass_flag &= result.passed;
            message = if pass_flag {
                None
            } else {
                result.message.clone()
            };
            error = result.error.clone();
            value = result.value.clone();
            if let Some(v) = &result.value {
                self.values.insert(binding.field().clone(), v.clone());
            }
            evaluated = true;
            if !pass_flag && !continuous {
                break;
            }
        }

        TestResult {
            passed: evaluated && pass_flag,
            message,
            error,
            value,
        }
    }

    /// The value recorded for the field at the most recent `test` call.
    /// Not a live read; returns `None` for unregistered fields.
    pub fn get_value(&self, field: &FieldId) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Read a field's live current text, bypassing bindings entirely. For
    /// fields deliberately left unvalidated.
    pub fn get_extra_value(&self, field: &FieldId) -> Result<String, ConfigError> {
        self.accessor
            .text(field)
            .map_err(|e| ConfigError::from_access(field, e))
    }

    /// Infer and apply an input-type hint for every bound field not in
    /// `exclude`. Exclusions are removed from the hint view permanently and
    /// never affect `test` semantics.
    pub fn apply_input_hints(&mut self, exclude: &[FieldId]) {
        self.hint_view.retain(|id| !exclude.contains(id));
        for id in &self.hint_view {
            if let Some(binding) = self.bindings.iter().find(|b| b.field() == id) {
                self.accessor.apply_input_hint(id, binding.input_hint());
            }
        }
    }
}

/// One-shot test of a single field against a single validator kind, without
/// building a [`FireEye`]. Mutates no shared state.
pub fn test_field(
    accessor: &impl FieldAccessor,
    field: &FieldId,
    kind: ValidatorKind,
) -> Result<TestResult, ConfigError> {
    let value = accessor
        .text(field)
        .map_err(|e| ConfigError::from_access(field, e))?;
    let mut binding = FieldBinding::new(field.clone(), factory::build(kind)?);
    Ok(binding.evaluate(value, &SilentDisplay))
}
