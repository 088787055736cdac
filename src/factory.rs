//! Pure mapping from validator-kind tokens to [`Validator`] instances.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::validator::{Rule, Validator};

// Mainland mobile numbers, with an optional country prefix.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+?86)?1\d{10}$").expect("phone pattern is valid"));

/// Construction token for a built-in validator kind.
///
/// Parameterized kinds carry their parameters directly; [`build`] checks
/// them and attaches a default failure message, which can be replaced with
/// [`Validator::with_message`].
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorKind {
    /// Value must not be empty or whitespace-only.
    NotEmpty,
    /// Character count must fall within `[min, max]`.
    Length {
        /// Minimum character count (inclusive).
        min: usize,
        /// Maximum character count (inclusive).
        max: usize,
    },
    /// Value must fully match the regular expression.
    Pattern(String),
    /// Value must parse as a number within `[min, max]`.
    Numeric {
        /// Minimum value (inclusive).
        min: f64,
        /// Maximum value (inclusive).
        max: f64,
    },
    /// Value must parse as a date under the given `chrono` format.
    Date {
        /// Format string, e.g. `%Y-%m-%d`.
        format: String,
    },
    /// Value must be a well-formed email address.
    Email,
    /// Value must be a mobile phone number.
    Phone,
    /// Value must be a valid 15- or 18-character ID card number.
    IdCard,
}

impl ValidatorKind {
    /// Resolve a parameterless kind from its textual token.
    ///
    /// Recognized tokens: `not_empty`, `email`, `phone`, `id_card`.
    /// Parameterized kinds have no token form and must be constructed
    /// directly; anything else is [`ConfigError::UnsupportedKind`].
    pub fn from_token(token: &str) -> Result<Self, ConfigError> {
        match token {
            "not_empty" => Ok(Self::NotEmpty),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "id_card" => Ok(Self::IdCard),
            other => Err(ConfigError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Build a validator from a kind token.
///
/// Pure and stateless: equal kinds always yield equivalent validators.
/// Fails with [`ConfigError::InvalidParameters`] when the parameters are
/// malformed for the kind.
pub fn build(kind: ValidatorKind) -> Result<Validator, ConfigError> {
    match kind {
        ValidatorKind::NotEmpty => Ok(Validator::new(Rule::NotEmpty, "This field is required")),
        ValidatorKind::Length { min, max } => {
            if min > max {
                return Err(ConfigError::InvalidParameters {
                    kind: "length",
                    reason: format!("min ({min}) is greater than max ({max})"),
                });
            }
            Ok(Validator::new(
                Rule::Length { min, max },
                format!("Must be between {min} and {max} characters"),
            ))
        }
        ValidatorKind::Pattern(pattern) => {
            // Anchor so the whole value must match.
            let re = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
                ConfigError::InvalidParameters {
                    kind: "pattern",
                    reason: e.to_string(),
                }
            })?;
            Ok(Validator::new(Rule::Pattern(re), "Invalid format"))
        }
        ValidatorKind::Numeric { min, max } => {
            if min.is_nan() || max.is_nan() {
                return Err(ConfigError::InvalidParameters {
                    kind: "numeric",
                    reason: "bounds must not be NaN".to_string(),
                });
            }
            if min > max {
                return Err(ConfigError::InvalidParameters {
                    kind: "numeric",
                    reason: format!("min ({min}) is greater than max ({max})"),
                });
            }
            Ok(Validator::new(
                Rule::Numeric { min, max },
                format!("Must be a number between {min} and {max}"),
            ))
        }
        ValidatorKind::Date { format } => {
            if format.trim().is_empty() {
                return Err(ConfigError::InvalidParameters {
                    kind: "date",
                    reason: "empty date format".to_string(),
                });
            }
            Ok(Validator::new(Rule::Date { format }, "Invalid date"))
        }
        ValidatorKind::Email => Ok(Validator::new(Rule::Email, "Invalid email address")),
        ValidatorKind::Phone => Ok(Validator::new(
            Rule::Phone(PHONE_RE.clone()),
            "Invalid phone number",
        )),
        ValidatorKind::IdCard => Ok(Validator::new(Rule::IdCard, "Invalid ID card number")),
    }
}
