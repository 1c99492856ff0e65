//! Restricted Store Module
//!
//! The facade that composes a key/value store with the restriction index.
//!
//! ## Responsibilities
//! - Parse rule text and maintain the restriction index
//! - Consult the index before every write and reject vetoed assignments
//! - Report every failure to the injected diagnostic sink
//!
//! ## Write Path
//! ```text
//! set(key, value)
//!   │
//!   ├── index: slave record for key=value?  ── no ──┐
//!   │          │ yes                                 │
//!   │          ▼                                     │
//!   │   any master key currently holding its         │
//!   │   required value in the dictionary? ── no ─────┤
//!   │          │ yes                                 ▼
//!   │          ▼                               dictionary.set
//!   └──── Err(Vetoed)
//! ```

use crate::command::Command;
use crate::config::Config;
use crate::diagnostics::{DiagnosticSink, Sink};
use crate::dictionary::{Dictionary, KeyValueStore};
use crate::error::{RestrictError, Result};
use crate::index::{RestrictionIndex, VetoEntry};
use crate::pair::Pair;

/// A key/value store whose writes can be vetoed by other keys' values
///
/// ## Concurrency Model
/// Single owner, no internal locking. Wrap in
/// [`SharedRestrictedStore`](crate::shared::SharedRestrictedStore) to share
/// across threads.
#[derive(Debug)]
pub struct RestrictedStore<S = Dictionary> {
    /// Underlying key/value store (dropped before the index)
    dictionary: S,

    /// Slave records and their veto entries
    index: RestrictionIndex,

    /// Where failure messages go
    sink: Sink,
}

impl RestrictedStore<Dictionary> {
    /// Create a store whose dictionary reserves room for `capacity_hint` keys
    pub fn new(capacity_hint: usize) -> Result<Self> {
        Self::open(Config::builder().capacity_hint(capacity_hint).build())
    }

    /// Create a store from a full config
    pub fn open(config: Config) -> Result<Self> {
        let dictionary = Dictionary::with_capacity(config.capacity_hint)?;
        let index = RestrictionIndex::with_capacity(config.restriction_capacity_hint)?;

        tracing::info!(
            "Opened restricted store (capacity_hint={}, restriction_capacity_hint={})",
            config.capacity_hint,
            config.restriction_capacity_hint
        );

        Ok(Self {
            dictionary,
            index,
            sink: Sink::default(),
        })
    }
}

impl<S: KeyValueStore> RestrictedStore<S> {
    /// Layer an empty restriction index over an existing store
    pub fn from_store(dictionary: S) -> Self {
        Self {
            dictionary,
            index: RestrictionIndex::new(),
            sink: Sink::default(),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(mut self, sink: impl DiagnosticSink + Send + 'static) -> Self {
        self.sink = Sink::new(sink);
        self
    }

    // =========================================================================
    // Data Operations
    // =========================================================================

    /// Current value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.dictionary.get(key)
    }

    /// Set `key` to `value` unless a registered restriction vetoes it
    ///
    /// Empty keys or values are rejected as invalid arguments.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if key.is_empty() || value.is_empty() {
            return self.sink.fail(
                "set",
                RestrictError::InvalidArgument("key and value must be non-empty".to_string()),
            );
        }

        if let Some(entry) = self.vetoing_master(key, value) {
            let err = RestrictError::Vetoed {
                key: key.to_string(),
                value: value.to_string(),
                master_key: entry.master_key().to_string(),
                master_value: entry.master_value().to_string(),
            };
            return self.sink.fail("set", err);
        }

        if let Err(e) = self.dictionary.set(key, value) {
            return self.sink.fail("set", e);
        }

        Ok(())
    }

    /// Master condition that would veto setting `key` to `value` right now
    pub fn vetoing_master(&self, key: &str, value: &str) -> Option<&VetoEntry> {
        let dictionary = &self.dictionary;
        self.index.vetoing_master(key, value, |master_key| dictionary.get(master_key))
    }

    /// Whether setting `key` to `value` would be vetoed right now
    pub fn is_vetoed(&self, key: &str, value: &str) -> bool {
        self.vetoing_master(key, value).is_some()
    }

    // =========================================================================
    // Rule Operations
    // =========================================================================

    /// Forbid `slave_pair` while `master_pair` holds
    ///
    /// Both texts are validated before the index is touched. Repeating a
    /// call with the same master key overwrites its required value.
    pub fn restrict(&mut self, slave_pair: &str, master_pair: &str) -> Result<()> {
        let (slave, master) = match (Pair::parse(slave_pair), Pair::parse(master_pair)) {
            (Ok(slave), Ok(master)) => (slave, master),
            (Err(e), _) | (_, Err(e)) => return self.sink.fail("restrict", e),
        };

        let existed = self.index.contains_slave(slave.key, slave.value);
        let inserted = match self.index.get_or_create_slave(slave.key, slave.value) {
            Ok(record) => record.upsert_veto(master.key, master.value),
            Err(e) => Err(e),
        };

        if let Err(e) = inserted {
            if !existed {
                self.index.remove_slave(slave.key, slave.value);
            }
            return self.sink.fail("restrict", e);
        }

        tracing::debug!("Restricted {} while {}", slave, master);
        Ok(())
    }

    /// Forbid `slave_pair` while any of `master_pairs` holds
    ///
    /// Best effort: an invalid master pair is skipped and the rest of the
    /// batch is still applied. Returns `PartialRestrict` if any element
    /// failed; its `applied` counts accepted pairs, including ones later
    /// overwritten by a pair with the same master key. A slave record created by this call that ends up with no
    /// veto entries is pruned.
    pub fn multi_restrict<T: AsRef<str>>(&mut self, slave_pair: &str, master_pairs: &[T]) -> Result<()> {
        if master_pairs.is_empty() {
            return self.sink.fail(
                "multi_restrict",
                RestrictError::InvalidArgument("no master pairs given".to_string()),
            );
        }

        let slave = match Pair::parse(slave_pair) {
            Ok(slave) => slave,
            Err(e) => return self.sink.fail("multi_restrict", e),
        };

        let existed = self.index.contains_slave(slave.key, slave.value);
        let record = match self.index.get_or_create_slave(slave.key, slave.value) {
            Ok(record) => record,
            Err(e) => return self.sink.fail("multi_restrict", e),
        };

        let mut applied = 0;
        let mut failed = Vec::new();

        for (i, text) in master_pairs.iter().enumerate() {
            let result = Pair::parse(text.as_ref())
                .and_then(|master| record.upsert_veto(master.key, master.value));

            match result {
                Ok(()) => applied += 1,
                Err(e) => {
                    self.sink
                        .report("multi_restrict", format_args!("master pair at index {}: {}", i, e));
                    failed.push((i, e));
                }
            }
        }

        if !existed && record.veto_count() == 0 {
            self.index.remove_slave(slave.key, slave.value);
        }

        tracing::debug!(
            "Multi-restricted {}: {} accepted, {} failed",
            slave,
            applied,
            failed.len()
        );

        if failed.is_empty() {
            Ok(())
        } else {
            Err(RestrictError::PartialRestrict { applied, failed })
        }
    }

    /// Remove the restriction of `slave_pair` by `master_pair`
    ///
    /// The master's key and value must both match a registered entry. The
    /// slave record is dropped once its last entry is removed.
    pub fn unrestrict(&mut self, slave_pair: &str, master_pair: &str) -> Result<()> {
        let (slave, master) = match (Pair::parse(slave_pair), Pair::parse(master_pair)) {
            (Ok(slave), Ok(master)) => (slave, master),
            (Err(e), _) | (_, Err(e)) => return self.sink.fail("unrestrict", e),
        };

        let Some(record) = self.index.find_slave_mut(slave.key, slave.value) else {
            return self.sink.fail(
                "unrestrict",
                RestrictError::NotFound(format!("slave pair {}", slave)),
            );
        };

        if record.find_veto(master.key, master.value).is_none() {
            return self.sink.fail(
                "unrestrict",
                RestrictError::NotFound(format!("master pair {} for {}", master, slave)),
            );
        }

        record.remove_veto(master.key);
        if record.veto_count() == 0 {
            self.index.remove_slave(slave.key, slave.value);
        }

        tracing::debug!("Unrestricted {} from {}", slave, master);
        Ok(())
    }

    /// Remove every restriction on `slave_pair`, returning how many veto
    /// entries were dropped
    pub fn unrestrict_all(&mut self, slave_pair: &str) -> Result<usize> {
        let slave = match Pair::parse(slave_pair) {
            Ok(slave) => slave,
            Err(e) => return self.sink.fail("unrestrict_all", e),
        };

        match self.index.remove_slave(slave.key, slave.value) {
            Some(record) => Ok(record.veto_count()),
            None => self.sink.fail(
                "unrestrict_all",
                RestrictError::NotFound(format!("slave pair {}", slave)),
            ),
        }
    }

    /// Every registered (slave, master) restriction in index order
    pub fn restrictions(&self) -> impl Iterator<Item = (Pair<'_>, Pair<'_>)> {
        self.index.slaves().flat_map(|record| {
            let slave = Pair {
                key: record.key(),
                value: record.value(),
            };
            record.vetoes().map(move |entry| {
                let master = Pair {
                    key: entry.master_key(),
                    value: entry.master_value(),
                };
                (slave, master)
            })
        })
    }

    // =========================================================================
    // Command Execution
    // =========================================================================

    /// Execute a parsed command
    ///
    /// Returns the value for `GET`, the rule listing for `RULES` and
    /// `PONG` for `PING`; other commands return `None` on success.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::Get { key } => Ok(self.get(&key).map(str::to_string)),
            Command::Set { key, value } => self.set(&key, &value).map(|_| None),
            Command::Restrict { slave, master } => self.restrict(&slave, &master).map(|_| None),
            Command::MultiRestrict { slave, masters } => {
                self.multi_restrict(&slave, &masters).map(|_| None)
            }
            Command::Unrestrict { slave, master } => {
                self.unrestrict(&slave, &master).map(|_| None)
            }
            Command::UnrestrictAll { slave } => self
                .unrestrict_all(&slave)
                .map(|removed| Some(removed.to_string())),
            Command::Rules => {
                let listing = self
                    .restrictions()
                    .map(|(slave, master)| format!("{} <- {}", slave, master))
                    .collect::<Vec<_>>()
                    .join("\n");
                Ok(Some(listing))
            }
            Command::Ping => Ok(Some("PONG".to_string())),
        }
    }

    /// Release the dictionary, then the restriction index
    pub fn close(self) {
        let Self {
            dictionary,
            mut index,
            sink: _,
        } = self;

        let keys = dictionary.len();
        drop(dictionary);

        let slaves = index.slave_count();
        index.clear();

        tracing::info!("Closed restricted store ({} keys, {} slave records)", keys, slaves);
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// The underlying key/value store
    pub fn dictionary(&self) -> &S {
        &self.dictionary
    }

    /// The restriction index
    pub fn index(&self) -> &RestrictionIndex {
        &self.index
    }

    /// Number of slave records
    pub fn slave_count(&self) -> usize {
        self.index.slave_count()
    }

    /// Number of (slave, master) restrictions
    pub fn restriction_count(&self) -> usize {
        self.index.restriction_count()
    }
}
