//! Immutable per-evaluation outcome record.

use std::fmt;

/// Result of evaluating one field, or the aggregate of a full test pass.
///
/// Constructed fresh per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    /// Whether the evaluation passed.
    pub passed: bool,
    /// First failing validator's message; absent when passing.
    pub message: Option<String>,
    /// Optional internal diagnostic (parse error, predicate error).
    pub error: Option<String>,
    /// The raw value that was evaluated.
    pub value: Option<String>,
}

impl TestResult {
    /// Aggregate message when `test()` runs with zero registered bindings.
    pub const NO_TEST_CONFIGURATIONS: &'static str = "NO_TEST_CONFIGURATIONS";

    /// A passing result carrying the evaluated value.
    pub fn passed(value: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: None,
            error: None,
            value: Some(value.into()),
        }
    }

    /// A failing result with the validator's message and the raw value.
    pub fn failed(message: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: Some(message.into()),
            error: None,
            value: Some(value.into()),
        }
    }

    /// Attach an internal diagnostic, kept for logging only.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "passed={}", self.passed)?;
        if let Some(message) = &self.message {
            write!(f, " message={message:?}")?;
        }
        if let Some(error) = &self.error {
            write!(f, " error={error:?}")?;
        }
        if let Some(value) = &self.value {
            write!(f, " value={value:?}")?;
        }
        Ok(())
    }
}
