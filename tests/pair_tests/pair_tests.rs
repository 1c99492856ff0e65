//! Pair Parser Tests
//!
//! Tests verify:
//! - Splitting on the first '='
//! - Rejection of missing separator, empty key, empty value
//! - Display formatting

use restrictkv::pair::{is_valid_pair, Pair};
use restrictkv::RestrictError;

// =============================================================================
// Valid Input Tests
// =============================================================================

#[test]
fn test_parse_simple_pair() {
    let pair = Pair::parse("employee=Andy").unwrap();
    assert_eq!(pair.key, "employee");
    assert_eq!(pair.value, "Andy");
}

#[test]
fn test_parse_splits_on_first_separator() {
    let pair = Pair::parse("url=a=b=c").unwrap();
    assert_eq!(pair.key, "url");
    assert_eq!(pair.value, "a=b=c");
}

#[test]
fn test_parse_keeps_other_characters() {
    let pair = Pair::parse(" spaced key = spaced value ").unwrap();
    assert_eq!(pair.key, " spaced key ");
    assert_eq!(pair.value, " spaced value ");
}

#[test]
fn test_parse_value_is_only_separator() {
    let pair = Pair::parse("k==").unwrap();
    assert_eq!(pair.key, "k");
    assert_eq!(pair.value, "=");
}

// =============================================================================
// Invalid Input Tests
// =============================================================================

#[test]
fn test_parse_missing_separator() {
    let err = Pair::parse("employee-Andy").unwrap_err();
    assert_eq!(err, RestrictError::InvalidPair("employee-Andy".to_string()));
}

#[test]
fn test_parse_empty_key() {
    assert!(Pair::parse("=Andy").is_err());
}

#[test]
fn test_parse_empty_value() {
    assert!(Pair::parse("employee=").is_err());
}

#[test]
fn test_parse_empty_string() {
    assert!(Pair::parse("").is_err());
    assert!(Pair::parse("=").is_err());
}

#[test]
fn test_is_valid_pair() {
    assert!(is_valid_pair("a=b"));
    assert!(!is_valid_pair("ab"));
    assert!(!is_valid_pair("a="));
}

// =============================================================================
// Display Tests
// =============================================================================

#[test]
fn test_display_round_trips_text() {
    let text = "company=Google";
    assert_eq!(Pair::parse(text).unwrap().to_string(), text);
}
