//! # Fact Import Engine
//!
//! Pulls fact records from a third-party HTTP API, validates each record,
//! and persists valid ones to a relational store while emitting structured
//! import events.
//!
//! ## Components:
//! - Configuration guard: presence and type validation of the fetch
//!   settings before any network activity
//! - Fetch-validate-persist loop: a fixed batch of sequential GETs with
//!   per-iteration error recovery
//!
//! ## Seams:
//! - [`fetch::FactFetcher`]: the outbound HTTP capability
//! - [`repo::FactRepository`]: the insert-only storage port
//! - [`report::ImportObserver`]: structured event sink (tracing in
//!   production, recording fake in tests)

pub mod config;
pub mod error;
pub mod fetch;
pub mod importer;
pub mod model;
pub mod repo;
pub mod report;
pub mod testing;

pub use config::{ImportSettings, RawSettings};
pub use error::{ConfigError, FetchError, StoreError, ValidationError};
pub use fetch::{FactFetcher, HttpFactFetcher};
pub use importer::{FactImporter, BATCH_SIZE};
pub use model::FactRecord;
pub use repo::FactRepository;
pub use report::{ImportEvent, ImportObserver, TracingObserver};
