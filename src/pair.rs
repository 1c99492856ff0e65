//! Pair Parser
//!
//! Parses `key=value` rule text into a borrowed (key, value) pair.
//!
//! ## Format
//! ```text
//! employee=Andy      -> ("employee", "Andy")
//! url=a=b            -> ("url", "a=b")      (split on the FIRST '=')
//! =Andy              -> invalid             (empty key)
//! employee=          -> invalid             (empty value)
//! employee-Andy      -> invalid             (no separator)
//! ```

use std::fmt;

use crate::error::{RestrictError, Result};

/// Separator between key and value in rule text
pub const SEPARATOR: char = '=';

/// A (key, value) pair borrowed from the rule text it was parsed from.
///
/// Both halves are guaranteed non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pair<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Pair<'a> {
    /// Parse `key=value` text, splitting on the first `=`
    pub fn parse(text: &'a str) -> Result<Self> {
        match text.split_once(SEPARATOR) {
            Some((key, value)) if !key.is_empty() && !value.is_empty() => {
                Ok(Self { key, value })
            }
            _ => Err(RestrictError::InvalidPair(text.to_string())),
        }
    }
}

impl fmt::Display for Pair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, SEPARATOR, self.value)
    }
}

/// Check whether text is well-formed rule text without keeping the result
pub fn is_valid_pair(text: &str) -> bool {
    Pair::parse(text).is_ok()
}
