//! Slave records and veto entries
//!
//! A slave record owns the ordered list of master conditions that block it.

use crate::error::Result;

/// A master condition attached to a slave record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VetoEntry {
    master_key: String,
    master_value: String,
}

impl VetoEntry {
    pub fn master_key(&self) -> &str {
        &self.master_key
    }

    pub fn master_value(&self) -> &str {
        &self.master_value
    }

    /// True when both the key and the required value are equal
    pub fn matches(&self, master_key: &str, master_value: &str) -> bool {
        self.master_key == master_key && self.master_value == master_value
    }
}

/// A restricted (key, value) pair and the masters that veto it
///
/// Invariant: at most one `VetoEntry` per master key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaveRecord {
    key: String,
    value: String,
    vetoes: Vec<VetoEntry>,
}

impl SlaveRecord {
    /// Create a record with no veto entries
    pub(crate) fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
            vetoes: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Exact (key, value) match
    pub fn matches(&self, key: &str, value: &str) -> bool {
        self.key == key && self.value == value
    }

    /// Insert a veto entry, or overwrite the required value of the entry
    /// already registered under `master_key`
    ///
    /// Fails only if growing the entry list fails.
    pub fn upsert_veto(&mut self, master_key: &str, master_value: &str) -> Result<()> {
        if let Some(entry) = self.vetoes.iter_mut().find(|e| e.master_key == master_key) {
            if entry.master_value != master_value {
                entry.master_value.clear();
                entry.master_value.push_str(master_value);
            }
            return Ok(());
        }

        self.vetoes.try_reserve(1)?;
        self.vetoes.push(VetoEntry {
            master_key: master_key.to_string(),
            master_value: master_value.to_string(),
        });
        Ok(())
    }

    /// Find the entry for `master_key` whose required value is `master_value`
    ///
    /// An entry registered under the same key with a different value is
    /// treated as absent.
    pub fn find_veto(&self, master_key: &str, master_value: &str) -> Option<&VetoEntry> {
        self.vetoes.iter().find(|e| e.matches(master_key, master_value))
    }

    /// Remove the entry registered under `master_key`, whatever its value
    pub fn remove_veto(&mut self, master_key: &str) -> Option<VetoEntry> {
        let pos = self.vetoes.iter().position(|e| e.master_key == master_key)?;
        Some(self.vetoes.remove(pos))
    }

    pub fn veto_count(&self) -> usize {
        self.vetoes.len()
    }

    pub fn vetoes(&self) -> impl Iterator<Item = &VetoEntry> {
        self.vetoes.iter()
    }

    /// First entry whose required value equals the value `resolve` reports
    /// for its master key. `None` from `resolve` means the key is unset and
    /// never matches.
    pub fn vetoing_entry<'r, F>(&self, mut resolve: F) -> Option<&VetoEntry>
    where
        F: FnMut(&str) -> Option<&'r str>,
    {
        self.vetoes
            .iter()
            .find(|e| resolve(e.master_key.as_str()) == Some(e.master_value.as_str()))
    }
}
