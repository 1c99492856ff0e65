//! Dictionary implementation
//!
//! HashMap-based store with fallible growth.

use std::collections::HashMap;

use crate::error::Result;
use super::KeyValueStore;

/// In-memory string dictionary
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary with room for `capacity_hint` keys
    ///
    /// Fails with `AllocationFailure` if the reservation cannot be satisfied.
    pub fn with_capacity(capacity_hint: usize) -> Result<Self> {
        let mut entries = HashMap::new();
        entries.try_reserve(capacity_hint)?;
        Ok(Self { entries })
    }
}

impl KeyValueStore for Dictionary {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // Overwrite in place so the key allocation is reused
        if let Some(existing) = self.entries.get_mut(key) {
            existing.clear();
            existing.push_str(value);
            return Ok(());
        }

        self.entries.try_reserve(1)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
