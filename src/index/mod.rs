//! Restriction Index Module
//!
//! Records, for every restricted slave pair, the master pairs that veto it.
//!
//! ## Responsibilities
//! - One `SlaveRecord` per distinct (key, value) slave pair
//! - One `VetoEntry` per master key inside a record (upsert on repeat)
//! - Answer "does any currently held value veto this assignment?"
//!
//! ## Layout
//! ```text
//! RestrictionIndex
//!   ├── SlaveRecord  employee=Andy
//!   │     ├── VetoEntry company=Google
//!   │     └── VetoEntry location=USA
//!   └── SlaveRecord  employee=Billy
//!         └── VetoEntry company=Yahoo
//! ```
//!
//! ## Data Structure Choice
//! Plain `Vec`s searched linearly. Rule sets are expected to be small, and
//! an owned vector keeps removal during iteration trivial.

mod record;
mod restriction_index;

pub use record::{SlaveRecord, VetoEntry};
pub use restriction_index::RestrictionIndex;
