//! Tests for built-in validator kinds and the factory.

use fireeye::factory::{ValidatorKind, build};
use fireeye::{ConfigError, Validator};

#[test]
fn test_not_empty() {
    let v = build(ValidatorKind::NotEmpty).unwrap();
    assert!(v.is_valid("hello"));
    assert!(!v.is_valid(""));
    assert!(!v.is_valid("   \t\n"));
}

#[test]
fn test_length_bounds_are_inclusive() {
    let v = build(ValidatorKind::Length { min: 2, max: 4 }).unwrap();
    assert!(!v.is_valid("a"));
    assert!(v.is_valid("ab"));
    assert!(v.is_valid("abcd"));
    assert!(!v.is_valid("abcde"));
}

#[test]
fn test_length_counts_characters_not_bytes() {
    let v = build(ValidatorKind::Length { min: 4, max: 4 }).unwrap();
    assert!(v.is_valid("café"));
}

#[test]
fn test_length_min_greater_than_max_rejected() {
    let err = build(ValidatorKind::Length { min: 5, max: 2 }).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameters { kind: "length", .. }));
}

#[test]
fn test_pattern_requires_full_match() {
    let v = build(ValidatorKind::Pattern("[0-9]+".to_string())).unwrap();
    assert!(v.is_valid("123"));
    assert!(!v.is_valid("12a"));
    assert!(!v.is_valid("a123"));
    assert!(!v.is_valid(""));
}

#[test]
fn test_pattern_bad_regex_rejected() {
    let err = build(ValidatorKind::Pattern("(".to_string())).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameters { kind: "pattern", .. }));
}

#[test]
fn test_numeric_range() {
    let v = build(ValidatorKind::Numeric { min: 1.0, max: 10.0 }).unwrap();
    assert!(v.is_valid("5"));
    assert!(v.is_valid(" 10 "));
    assert!(v.is_valid("1.5"));
    assert!(!v.is_valid("0.5"));
    assert!(!v.is_valid("11"));
    assert!(!v.is_valid("abc"));
}

#[test]
fn test_numeric_min_greater_than_max_rejected() {
    let err = build(ValidatorKind::Numeric { min: 10.0, max: 1.0 }).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameters { kind: "numeric", .. }));
}

#[test]
fn test_numeric_nan_bounds_rejected() {
    let err = build(ValidatorKind::Numeric { min: f64::NAN, max: 1.0 }).unwrap_err();
    match err {
        ConfigError::InvalidParameters { kind: "numeric", reason } => {
            assert!(reason.contains("NaN"), "reason should name NaN: {reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_date_format() {
    let v = build(ValidatorKind::Date { format: "%Y-%m-%d".to_string() }).unwrap();
    assert!(v.is_valid("2024-02-29"));
    assert!(!v.is_valid("2023-02-29"));
    assert!(!v.is_valid("yesterday"));
}

#[test]
fn test_date_empty_format_rejected() {
    let err = build(ValidatorKind::Date { format: "  ".to_string() }).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParameters { kind: "date", .. }));
}

#[test]
fn test_email() {
    let v = build(ValidatorKind::Email).unwrap();
    assert!(v.is_valid("user@example.com"));
    assert!(v.is_valid("  user+tag@example.org  "));
    assert!(!v.is_valid("@example.com"));
    assert!(!v.is_valid("user@"));
    assert!(!v.is_valid("not-an-email"));
    assert!(!v.is_valid(""));
}

#[test]
fn test_phone() {
    let v = build(ValidatorKind::Phone).unwrap();
    assert!(v.is_valid("13812345678"));
    assert!(v.is_valid("+8613812345678"));
    assert!(v.is_valid("8613812345678"));
    assert!(!v.is_valid("23812345678"));
    assert!(!v.is_valid("12345"));
}

#[test]
fn test_id_card_kind_delegates_to_checksum() {
    let v = build(ValidatorKind::IdCard).unwrap();
    assert!(v.is_valid("11010519491231002X"));
    assert!(!v.is_valid("11010519491231002x"));
    assert!(!v.is_valid("1101051949123100"));
}

#[test]
fn test_id_card_length_guard_sees_raw_value() {
    // Surrounding whitespace makes the snapshot 20 characters; the length
    // guard rejects it outright.
    let v = build(ValidatorKind::IdCard).unwrap();
    assert!(!v.is_valid(" 11010519491231002X "));
    assert!(!v.is_valid("11010519491231002X "));
    assert!(!v.is_valid("\t11010519491231002X"));
}

#[test]
fn test_custom_predicate() {
    let v = Validator::custom("must be even", |value| {
        let n: i64 = value.parse().map_err(|e| format!("{e}"))?;
        if n % 2 == 0 {
            Ok(())
        } else {
            Err("odd number".to_string())
        }
    });
    assert!(v.is_valid("4"));
    assert!(!v.is_valid("3"));
    // A predicate error is a failure, not a crash.
    assert!(!v.is_valid("not a number"));
    assert_eq!(v.message(), "must be even");
}

#[test]
fn test_with_message_overrides_default() {
    let v = build(ValidatorKind::Email).unwrap().with_message("Bad email");
    assert_eq!(v.message(), "Bad email");
    assert!(!v.is_valid("nope"));
}

#[test]
fn test_from_token_parameterless_kinds() {
    assert!(matches!(
        ValidatorKind::from_token("not_empty"),
        Ok(ValidatorKind::NotEmpty)
    ));
    assert!(matches!(ValidatorKind::from_token("email"), Ok(ValidatorKind::Email)));
    assert!(matches!(ValidatorKind::from_token("phone"), Ok(ValidatorKind::Phone)));
    assert!(matches!(
        ValidatorKind::from_token("id_card"),
        Ok(ValidatorKind::IdCard)
    ));
}

#[test]
fn test_from_token_unknown_is_unsupported() {
    let err = ValidatorKind::from_token("bogus").unwrap_err();
    assert_eq!(err, ConfigError::UnsupportedKind("bogus".to_string()));
    // Parameterized kinds have no token form.
    let err = ValidatorKind::from_token("length").unwrap_err();
    assert_eq!(err, ConfigError::UnsupportedKind("length".to_string()));
}

#[test]
fn test_factory_is_pure() {
    let a = build(ValidatorKind::Length { min: 1, max: 3 }).unwrap();
    let b = build(ValidatorKind::Length { min: 1, max: 3 }).unwrap();
    for value in ["", "a", "abc", "abcd"] {
        assert_eq!(a.is_valid(value), b.is_valid(value));
    }
    assert_eq!(a.message(), b.message());
}
