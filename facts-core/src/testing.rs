//! Testing utilities for the import engine.
//!
//! This module provides fakes for the three seams of the loop:
//! - [`ScriptedFetcher`] returns queued responses and counts calls
//! - [`MemoryRepository`] stores inserts in memory (optionally failing)
//! - [`RecordingObserver`] accumulates emitted events
//!
//! plus small factories standing in for upstream payloads.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{FetchError, StoreError};
use crate::fetch::FactFetcher;
use crate::model::FactRecord;
use crate::repo::FactRepository;
use crate::report::{ImportEvent, ImportObserver};

/// Build a fact record fixture.
pub fn fact_record(text: &str, length: i64) -> FactRecord {
    FactRecord::new(text, length)
}

/// A deterministic batch of `n` distinct, valid fact records.
pub fn fact_batch(n: usize) -> Vec<FactRecord> {
    (0..n)
        .map(|i| {
            let text = format!("Cat fact number {i}: cats sleep through most of the day.");
            let length = text.len() as i64;
            FactRecord::new(text, length)
        })
        .collect()
}

/// A fetcher that replays scripted responses in order and counts calls.
///
/// Once the script is exhausted it answers with a network error, which
/// the loop treats as a recoverable fetch failure.
pub struct ScriptedFetcher {
    responses: StdMutex<VecDeque<Result<FactRecord, FetchError>>>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub fn new(responses: Vec<Result<FactRecord, FetchError>>) -> Self {
        Self {
            responses: StdMutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A script of `n` identical successful responses.
    pub fn serving(fact: FactRecord, n: usize) -> Self {
        Self::new((0..n).map(|_| Ok(fact.clone())).collect())
    }

    /// A script of `n` failures produced by `make_err`.
    pub fn failing_with(make_err: impl Fn() -> FetchError, n: usize) -> Self {
        Self::new((0..n).map(|_| Err(make_err())).collect())
    }

    /// Number of fetch calls seen so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FactFetcher for ScriptedFetcher {
    async fn fetch_fact(&self, _url: &str) -> Result<FactRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .expect("scripted responses lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("script exhausted".into())))
    }
}

/// In-memory repository fake.
#[derive(Default)]
pub struct MemoryRepository {
    records: Mutex<Vec<FactRecord>>,
    fail_inserts: bool,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every insert fails, for persist-failure paths.
    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_inserts: true,
        }
    }

    /// Snapshot of everything inserted so far, in insert order.
    pub async fn snapshot(&self) -> Vec<FactRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl FactRepository for MemoryRepository {
    async fn insert(&self, fact: &FactRecord) -> Result<(), StoreError> {
        if self.fail_inserts {
            return Err(StoreError::Insert("memory repository set to fail".into()));
        }
        self.records.lock().await.push(fact.clone());
        Ok(())
    }
}

/// Observer that accumulates every emitted event.
#[derive(Default)]
pub struct RecordingObserver {
    events: StdMutex<Vec<ImportEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ImportEvent> {
        self.events
            .lock()
            .expect("recorded events lock poisoned")
            .clone()
    }

    /// Count of events matching a predicate.
    pub fn count(&self, pred: impl Fn(&ImportEvent) -> bool) -> usize {
        self.events().iter().filter(|e| pred(e)).count()
    }
}

impl ImportObserver for RecordingObserver {
    fn record(&self, event: ImportEvent) {
        self.events
            .lock()
            .expect("recorded events lock poisoned")
            .push(event);
    }
}

