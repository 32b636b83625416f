//! Structured import events.
//!
//! The loop reports outcomes through an injected observer instead of
//! logging directly, so tests assert on emitted events rather than
//! intercepting log output. [`TracingObserver`] is the production sink.

use tracing::{error, info};

use crate::error::FieldViolation;
use crate::model::FactRecord;

/// One observable outcome of an import invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportEvent {
    /// The loop is about to start fetching.
    Started { url: String },
    /// Fetching is disabled in settings; no network call was made.
    Disabled,
    /// A fetch attempt failed (transport, status, or decode).
    FetchFailed { iteration: usize, detail: String },
    /// A decoded payload violated the persistence invariant.
    ValidationFailed {
        iteration: usize,
        violations: Vec<FieldViolation>,
    },
    /// A payload passed validation.
    Validated { fact: FactRecord },
    /// A validated record was written to the store.
    Persisted { fact: FactRecord },
    /// The repository refused an insert.
    PersistFailed { iteration: usize, detail: String },
}

/// Sink for import events.
pub trait ImportObserver: Send + Sync {
    fn record(&self, event: ImportEvent);
}

impl<T: ImportObserver + ?Sized> ImportObserver for &T {
    fn record(&self, event: ImportEvent) {
        (**self).record(event)
    }
}

/// Production observer: one log line per event via `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ImportObserver for TracingObserver {
    fn record(&self, event: ImportEvent) {
        match event {
            ImportEvent::Started { url } => info!(%url, "Fetching cat facts"),
            ImportEvent::Disabled => info!("Fetch is disabled in settings"),
            ImportEvent::FetchFailed { iteration, detail } => {
                error!(iteration, %detail, "Failed to fetch data from API")
            }
            ImportEvent::ValidationFailed {
                iteration,
                violations,
            } => error!(iteration, ?violations, "Fact validation failed"),
            ImportEvent::Validated { fact } => {
                info!(text = %fact.text, length = fact.length, "Fact data is valid")
            }
            ImportEvent::Persisted { fact } => {
                info!(text = %fact.text, length = fact.length, "Fact saved successfully")
            }
            ImportEvent::PersistFailed { iteration, detail } => {
                error!(iteration, %detail, "Failed to persist fact")
            }
        }
    }
}
