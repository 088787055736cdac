//! A single validation rule over a string value.
//!
//! The rule set is a closed enum with one opaque variant for caller-supplied
//! predicates. Every validator carries the human-readable message reported
//! when it fails. Validators are immutable once constructed and safe to
//! share across engines.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use email_address::EmailAddress;
use regex::Regex;

use crate::field::InputHint;
use crate::id_card;

/// Caller-supplied predicate. `Err(diagnostic)` counts as a validation
/// failure carrying the diagnostic; it is never propagated as a crash.
pub type Predicate = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

#[derive(Clone)]
pub(crate) enum Rule {
    NotEmpty,
    Length { min: usize, max: usize },
    Pattern(Regex),
    Numeric { min: f64, max: f64 },
    Date { format: String },
    Email,
    Phone(Regex),
    IdCard,
    Custom(Predicate),
}

impl Rule {
    fn name(&self) -> &'static str {
        match self {
            Self::NotEmpty => "not_empty",
            Self::Length { .. } => "length",
            Self::Pattern(_) => "pattern",
            Self::Numeric { .. } => "numeric",
            Self::Date { .. } => "date",
            Self::Email => "email",
            Self::Phone(_) => "phone",
            Self::IdCard => "id_card",
            Self::Custom(_) => "custom",
        }
    }
}

/// One validation rule plus its failure message.
#[derive(Clone)]
pub struct Validator {
    rule: Rule,
    message: String,
}

impl Validator {
    pub(crate) fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }

    /// Wrap a caller-supplied predicate as a validator.
    pub fn custom(
        message: impl Into<String>,
        predicate: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        Self::new(Rule::Custom(Arc::new(predicate)), message)
    }

    /// Replace the failure message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The message reported when this validator fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether `value` satisfies this validator.
    pub fn is_valid(&self, value: &str) -> bool {
        self.check(value).is_ok()
    }

    /// Run the rule. `Err` optionally carries an internal diagnostic (parse
    /// error, predicate error) retained in the result for logging.
    pub(crate) fn check(&self, value: &str) -> Result<(), Option<String>> {
        match &self.rule {
            Rule::NotEmpty => {
                if value.trim().is_empty() {
                    Err(None)
                } else {
                    Ok(())
                }
            }
            Rule::Length { min, max } => {
                let len = value.chars().count();
                if len < *min || len > *max { Err(None) } else { Ok(()) }
            }
            Rule::Pattern(re) => {
                if re.is_match(value) { Ok(()) } else { Err(None) }
            }
            Rule::Numeric { min, max } => match value.trim().parse::<f64>() {
                Ok(n) if n >= *min && n <= *max => Ok(()),
                Ok(_) => Err(None),
                Err(e) => Err(Some(e.to_string())),
            },
            Rule::Date { format } => match NaiveDate::parse_from_str(value.trim(), format) {
                Ok(_) => Ok(()),
                Err(e) => Err(Some(e.to_string())),
            },
            Rule::Email => {
                if EmailAddress::is_valid(value.trim()) {
                    Ok(())
                } else {
                    Err(None)
                }
            }
            Rule::Phone(re) => {
                if re.is_match(value.trim()) {
                    Ok(())
                } else {
                    Err(None)
                }
            }
            Rule::IdCard => {
                // The length guard must see the raw snapshot; padded input
                // is not a valid card number.
                if id_card::is_valid(value) {
                    Ok(())
                } else {
                    Err(None)
                }
            }
            Rule::Custom(predicate) => predicate(value).map_err(Some),
        }
    }

    /// The keyboard hint implied by this rule, `Text` when none.
    pub(crate) fn input_hint(&self) -> InputHint {
        match &self.rule {
            Rule::Numeric { .. } => InputHint::Number,
            Rule::Phone(_) => InputHint::Phone,
            Rule::Email => InputHint::Email,
            Rule::Date { .. } => InputHint::Date,
            _ => InputHint::Text,
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rule", &self.rule.name())
            .field("message", &self.message)
            .finish()
    }
}
