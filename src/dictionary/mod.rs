//! Dictionary Module
//!
//! The plain key/value store that a restricted store writes through to.
//!
//! ## Responsibilities
//! - Store string values by string key
//! - Overwrite on repeated `set` of the same key
//! - Report an unset key as `None`
//!
//! ## Seam
//! `RestrictedStore` is generic over [`KeyValueStore`], so any associative
//! container can sit underneath the restriction layer. [`Dictionary`] is the
//! default, `HashMap`-backed implementation.

mod table;

pub use table::Dictionary;

use crate::error::Result;

/// Operations the restriction layer needs from its underlying store
pub trait KeyValueStore {
    /// Current value for `key`, or `None` when the key is unset
    fn get(&self, key: &str) -> Option<&str>;

    /// Insert or overwrite `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Current value for `key`, or `default` when the key is unset
    fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Number of keys currently set
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
