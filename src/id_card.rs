//! CN resident ID card number checks.
//!
//! Two forms exist: the current 18-character form with a weighted mod-11
//! check character, and the legacy 15-character form validated positionally.
//! Any other length is rejected before parsing. Malformed digits are a
//! validation failure, never a panic.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Per-position weights for the first 17 digits of the 18-character form.
const WEIGHT: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Expected check characters, indexed by `weighted_sum % 11`.
const CHECK: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

// Two digits followed by an optional trailing x/X.
static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}[\dxX]?$").expect("suffix pattern is valid"));

/// Validate an ID card number of either form.
pub fn is_valid(number: &str) -> bool {
    match number.chars().count() {
        15 => is_old_cn_id_card(number),
        18 => is_new_cn_id_card(number),
        _ => false,
    }
}

/// Validate the 18-character form.
///
/// The first 17 characters must be digits; their weighted sum mod 11 indexes
/// [`CHECK`], and the 18th character must equal that entry exactly. No case
/// folding is performed: a lowercase `x` never matches the expected `X`.
pub fn is_new_cn_id_card(number: &str) -> bool {
    let chars: Vec<char> = number.chars().collect();
    if chars.len() != 18 {
        return false;
    }
    let mut sum = 0u32;
    for (i, weight) in WEIGHT.iter().enumerate() {
        let Some(digit) = chars[i].to_digit(10) else {
            return false;
        };
        sum += weight * digit;
    }
    CHECK[(sum % 11) as usize] == chars[17]
}

/// Validate the legacy 15-character form.
///
/// Layout: region/birth-order digits at `[0..5)`, a separator slot at 5, a
/// two-digit-year birth date at `[6..12)`, and a sequence suffix at
/// `[12..14)`. The region segment must round-trip through integer parsing
/// unchanged, which rejects leading zeros and non-digit content that parsing
/// would silently normalize.
pub fn is_old_cn_id_card(number: &str) -> bool {
    if number.len() != 15 || !number.is_ascii() {
        return false;
    }
    let region = &number[0..5];
    let birth = &number[6..12];
    let suffix = &number[12..14];

    let region_ok = region
        .parse::<u32>()
        .map(|n| n.to_string() == region)
        .unwrap_or(false);
    let birth_ok = NaiveDate::parse_from_str(birth, "%y%m%d").is_ok();
    let suffix_ok = SUFFIX_RE.is_match(suffix);

    region_ok && birth_ok && suffix_ok
}
