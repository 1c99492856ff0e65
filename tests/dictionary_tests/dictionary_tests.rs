//! Dictionary Tests
//!
//! Tests verify:
//! - Basic get/set
//! - Overwrite semantics
//! - Default lookups for unset keys

use restrictkv::dictionary::{Dictionary, KeyValueStore};

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_dictionary_is_empty() {
    let dict = Dictionary::new();
    assert_eq!(dict.len(), 0);
    assert!(dict.is_empty());
}

#[test]
fn test_with_capacity_zero() {
    let dict = Dictionary::with_capacity(0).unwrap();
    assert!(dict.is_empty());
}

#[test]
fn test_with_large_capacity() {
    let dict = Dictionary::with_capacity(1_000_000).unwrap();
    assert!(dict.is_empty());
}

#[test]
fn test_set_and_get() {
    let mut dict = Dictionary::new();
    dict.set("company", "Google").unwrap();
    assert_eq!(dict.get("company"), Some("Google"));
}

#[test]
fn test_get_nonexistent_key() {
    let dict = Dictionary::new();
    assert_eq!(dict.get("nonexistent"), None);
}

#[test]
fn test_set_overwrites_existing() {
    let mut dict = Dictionary::new();
    dict.set("company", "Google").unwrap();
    dict.set("company", "Google Inc.").unwrap();

    assert_eq!(dict.len(), 1);
    assert_eq!(dict.get("company"), Some("Google Inc."));
}

#[test]
fn test_get_or_default() {
    let mut dict = Dictionary::new();
    dict.set("company", "Google").unwrap();

    assert_eq!(dict.get_or("company", "NULL"), "Google");
    assert_eq!(dict.get_or("employee", "NULL"), "NULL");
}
