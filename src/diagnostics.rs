//! Diagnostic sinks
//!
//! Every failing store operation reports a human-readable message to the
//! sink injected into that store. Reporting never changes the outcome of an
//! operation; callers still inspect the returned `Result`.

use std::fmt;

use crate::error::{RestrictError, Result};

/// Receives one message per failure
pub trait DiagnosticSink {
    /// `operation` is the name of the store method that failed
    fn report(&self, operation: &'static str, message: &str);
}

/// Default sink: emits a `tracing` warning
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, operation: &'static str, message: &str) {
        tracing::warn!(operation, "{}", message);
    }
}

/// Discards every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&self, _operation: &'static str, _message: &str) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(&'static str, &str),
{
    fn report(&self, operation: &'static str, message: &str) {
        self(operation, message)
    }
}

/// Boxed sink held by a store
pub(crate) struct Sink(Box<dyn DiagnosticSink + Send>);

impl Sink {
    pub(crate) fn new(sink: impl DiagnosticSink + Send + 'static) -> Self {
        Self(Box::new(sink))
    }

    pub(crate) fn report(&self, operation: &'static str, message: impl fmt::Display) {
        self.0.report(operation, &message.to_string());
    }

    /// Report `err` and hand it back as the operation's result
    pub(crate) fn fail<T>(&self, operation: &'static str, err: RestrictError) -> Result<T> {
        self.report(operation, &err);
        Err(err)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sink")
    }
}
