//! Tests for the ID card checksum algorithm.

use fireeye::id_card::{is_new_cn_id_card, is_old_cn_id_card, is_valid};

#[test]
fn test_classic_valid_number() {
    assert!(is_new_cn_id_card("11010519491231002X"));
    assert!(is_valid("11010519491231002X"));
}

#[test]
fn test_check_character_is_case_sensitive() {
    // The expected check character is 'X'; a lowercase 'x' never matches.
    assert!(!is_new_cn_id_card("11010519491231002x"));
}

#[test]
fn test_single_digit_mutation_flips_checksum() {
    let valid = "11010519491231002X";
    for i in 0..17 {
        let original = valid.as_bytes()[i] - b'0';
        let mutated_digit = (original + 1) % 10;
        let mut mutated = valid.as_bytes().to_vec();
        mutated[i] = b'0' + mutated_digit;
        let mutated = String::from_utf8(mutated).unwrap();
        // Weights are coprime with 11, so +1 at any position shifts
        // sum % 11 and the old check character no longer matches.
        assert!(
            !is_new_cn_id_card(&mutated),
            "mutation at {i} unexpectedly kept the checksum: {mutated}"
        );
    }
}

#[test]
fn test_length_guard_fires_before_parsing() {
    assert!(!is_valid("1101051949123100")); // 16
    assert!(!is_valid("11010519491231002XX")); // 19
    assert!(!is_valid(""));
    // Garbage of the wrong length never reaches digit extraction.
    assert!(!is_valid("abc"));
}

#[test]
fn test_non_digit_in_weighted_positions_fails() {
    assert!(!is_new_cn_id_card("1101051949123100aX"));
    assert!(!is_new_cn_id_card("a1010519491231002X"));
}

#[test]
fn test_wrong_check_character_fails() {
    assert!(!is_new_cn_id_card("110105194912310021"));
}

#[test]
fn test_legacy_valid_number() {
    assert!(is_old_cn_id_card("110105491231002"));
    assert!(is_valid("110105491231002"));
}

#[test]
fn test_legacy_leading_zero_region_fails() {
    // "01010" does not round-trip through integer parsing.
    assert!(!is_old_cn_id_card("010105491231002"));
}

#[test]
fn test_legacy_bad_birth_date_fails() {
    // Month 13 cannot parse.
    assert!(!is_old_cn_id_card("110105991331002"));
}

#[test]
fn test_legacy_non_digit_suffix_fails() {
    assert!(!is_old_cn_id_card("110105491231ab2"));
}

#[test]
fn test_legacy_non_ascii_fails() {
    assert!(!is_old_cn_id_card("１１010549123100"));
}
