//! Restriction Index
//!
//! The collection of slave records consulted before every write.

use crate::error::Result;

use super::{SlaveRecord, VetoEntry};

/// Owns every slave record and, transitively, every veto entry
///
/// Invariants:
/// - at most one record per distinct (key, value)
/// - records emptied through `remove_veto` are pruned by the caller
///   (see `RestrictedStore::unrestrict`)
#[derive(Debug, Default, Clone)]
pub struct RestrictionIndex {
    slaves: Vec<SlaveRecord>,
}

impl RestrictionIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty index with room for `capacity_hint` slave records
    pub fn with_capacity(capacity_hint: usize) -> Result<Self> {
        let mut slaves = Vec::new();
        slaves.try_reserve(capacity_hint)?;
        Ok(Self { slaves })
    }

    fn position(&self, key: &str, value: &str) -> Option<usize> {
        self.slaves.iter().position(|s| s.matches(key, value))
    }

    /// Exact-match lookup
    pub fn find_slave(&self, key: &str, value: &str) -> Option<&SlaveRecord> {
        self.slaves.iter().find(|s| s.matches(key, value))
    }

    pub fn find_slave_mut(&mut self, key: &str, value: &str) -> Option<&mut SlaveRecord> {
        self.slaves.iter_mut().find(|s| s.matches(key, value))
    }

    pub fn contains_slave(&self, key: &str, value: &str) -> bool {
        self.position(key, value).is_some()
    }

    /// Return the record for (key, value), appending an empty one if needed
    pub fn get_or_create_slave(&mut self, key: &str, value: &str) -> Result<&mut SlaveRecord> {
        let pos = match self.position(key, value) {
            Some(pos) => pos,
            None => {
                self.slaves.try_reserve(1)?;
                self.slaves.push(SlaveRecord::new(key, value));
                tracing::debug!("Created slave record {}={}", key, value);
                self.slaves.len() - 1
            }
        };

        Ok(&mut self.slaves[pos])
    }

    /// Detach and return the record for (key, value)
    ///
    /// The record is removed whatever its veto count; callers prune only
    /// records they have emptied.
    pub fn remove_slave(&mut self, key: &str, value: &str) -> Option<SlaveRecord> {
        let pos = self.position(key, value)?;
        let record = self.slaves.remove(pos);
        tracing::debug!(
            "Removed slave record {}={} ({} veto entries)",
            key,
            value,
            record.veto_count()
        );
        Some(record)
    }

    /// Release every record and entry
    pub fn clear(&mut self) {
        self.slaves.clear();
    }

    /// Master condition currently blocking (key, value), if any
    ///
    /// Restrictions are OR-combined: the first satisfied entry wins.
    pub fn vetoing_master<'r, F>(&self, key: &str, value: &str, resolve: F) -> Option<&VetoEntry>
    where
        F: FnMut(&str) -> Option<&'r str>,
    {
        self.find_slave(key, value)?.vetoing_entry(resolve)
    }

    /// Whether any currently held master value vetoes (key, value)
    ///
    /// An unregistered slave pair is never vetoed.
    pub fn is_vetoed<'r, F>(&self, key: &str, value: &str, resolve: F) -> bool
    where
        F: FnMut(&str) -> Option<&'r str>,
    {
        self.vetoing_master(key, value, resolve).is_some()
    }

    pub fn slaves(&self) -> impl Iterator<Item = &SlaveRecord> {
        self.slaves.iter()
    }

    /// Number of slave records
    pub fn slave_count(&self) -> usize {
        self.slaves.len()
    }

    /// Number of veto entries across all records
    pub fn restriction_count(&self) -> usize {
        self.slaves.iter().map(SlaveRecord::veto_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slaves.is_empty()
    }
}
