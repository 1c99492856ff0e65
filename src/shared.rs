//! Shared Restricted Store
//!
//! A mutex-wrapped store for callers that drive one store from several
//! threads. Each method holds the lock for the whole operation, so
//! multi-step mutations (get-or-create then upsert, check then write) are
//! atomic with respect to each other.

use parking_lot::Mutex;

use crate::command::Command;
use crate::dictionary::{Dictionary, KeyValueStore};
use crate::error::Result;
use crate::store::RestrictedStore;

/// Thread-safe handle around a [`RestrictedStore`]
#[derive(Debug)]
pub struct SharedRestrictedStore<S = Dictionary> {
    inner: Mutex<RestrictedStore<S>>,
}

impl<S: KeyValueStore> SharedRestrictedStore<S> {
    pub fn new(store: RestrictedStore<S>) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    /// Run `f` with exclusive access to the store
    pub fn with<R>(&self, f: impl FnOnce(&mut RestrictedStore<S>) -> R) -> R {
        let mut store = self.inner.lock();
        f(&mut store)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().get(key).map(str::to_string)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.lock().set(key, value)
    }

    pub fn restrict(&self, slave_pair: &str, master_pair: &str) -> Result<()> {
        self.inner.lock().restrict(slave_pair, master_pair)
    }

    pub fn multi_restrict<T: AsRef<str>>(&self, slave_pair: &str, master_pairs: &[T]) -> Result<()> {
        self.inner.lock().multi_restrict(slave_pair, master_pairs)
    }

    pub fn unrestrict(&self, slave_pair: &str, master_pair: &str) -> Result<()> {
        self.inner.lock().unrestrict(slave_pair, master_pair)
    }

    pub fn unrestrict_all(&self, slave_pair: &str) -> Result<usize> {
        self.inner.lock().unrestrict_all(slave_pair)
    }

    pub fn is_vetoed(&self, key: &str, value: &str) -> bool {
        self.inner.lock().is_vetoed(key, value)
    }

    pub fn execute(&self, command: Command) -> Result<Option<String>> {
        self.inner.lock().execute(command)
    }

    /// Unwrap the store
    pub fn into_inner(self) -> RestrictedStore<S> {
        self.inner.into_inner()
    }
}

impl<S: KeyValueStore> From<RestrictedStore<S>> for SharedRestrictedStore<S> {
    fn from(store: RestrictedStore<S>) -> Self {
        Self::new(store)
    }
}
