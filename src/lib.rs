//! # RestrictKV
//!
//! An in-memory key-value store with a constraint layer:
//! - Rules of the form "don't allow `role=admin` while `env=production`"
//! - Rules enforced on every write
//! - Any number of master conditions per restricted pair, OR-combined
//! - Pluggable underlying store and diagnostic sink
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Commands / CLI                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 RestrictedStore                              │
//! │         (parse rules, veto check before writes)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌──────────────────┐     ┌─────────────┐
//!   │ RestrictionIndex │     │ Dictionary  │
//!   │ (slave → masters)│     │ (key/value) │
//!   └──────────────────┘     └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use restrictkv::RestrictedStore;
//!
//! let mut store = RestrictedStore::new(10).unwrap();
//! store.restrict("employee=Andy", "company=Google").unwrap();
//!
//! store.set("company", "Google").unwrap();
//! assert!(store.set("employee", "Andy").unwrap_err().is_vetoed());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;
pub mod diagnostics;

pub mod pair;
pub mod dictionary;
pub mod index;
pub mod command;
pub mod store;
pub mod shared;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{RestrictError, Result};
pub use config::Config;
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use pair::Pair;
pub use dictionary::{Dictionary, KeyValueStore};
pub use index::RestrictionIndex;
pub use command::Command;
pub use store::RestrictedStore;
pub use shared::SharedRestrictedStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RestrictKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
