//! The fetch-validate-persist loop.

use crate::config::{self, RawSettings};
use crate::error::ConfigError;
use crate::fetch::FactFetcher;
use crate::model::FactRecord;
use crate::repo::FactRepository;
use crate::report::{ImportEvent, ImportObserver};

/// Number of fetch attempts per invocation. Fixed by contract: the loop
/// neither shrinks on failures nor grows on successes.
pub const BATCH_SIZE: usize = 10;

/// Stateless import service over injected collaborators.
///
/// Each invocation revalidates its raw settings, then runs [`BATCH_SIZE`]
/// strictly sequential iterations. Every per-iteration failure is
/// reported to the observer and swallowed; only a configuration error
/// aborts the invocation.
pub struct FactImporter<F, R, O> {
    fetcher: F,
    repository: R,
    observer: O,
}

impl<F, R, O> FactImporter<F, R, O>
where
    F: FactFetcher,
    R: FactRepository,
    O: ImportObserver,
{
    pub fn new(fetcher: F, repository: R, observer: O) -> Self {
        Self {
            fetcher,
            repository,
            observer,
        }
    }

    /// Run one import invocation and return the accepted records in
    /// iteration order.
    ///
    /// Returns between 0 and [`BATCH_SIZE`] records. Calling twice may
    /// double-insert identical facts; the loop performs no deduplication.
    pub async fn run(&self, raw: &RawSettings) -> Result<Vec<FactRecord>, ConfigError> {
        let settings = config::validate(raw)?;

        if !settings.fetch_enabled {
            self.observer.record(ImportEvent::Disabled);
            return Ok(Vec::new());
        }

        self.observer.record(ImportEvent::Started {
            url: settings.fetch_url.clone(),
        });

        let mut accepted = Vec::with_capacity(BATCH_SIZE);
        for iteration in 0..BATCH_SIZE {
            let fact = match self.fetcher.fetch_fact(&settings.fetch_url).await {
                Ok(fact) => fact,
                Err(err) => {
                    self.observer.record(ImportEvent::FetchFailed {
                        iteration,
                        detail: err.to_string(),
                    });
                    continue;
                }
            };

            if let Err(invalid) = fact.check() {
                self.observer.record(ImportEvent::ValidationFailed {
                    iteration,
                    violations: invalid.violations,
                });
                continue;
            }

            self.observer.record(ImportEvent::Validated { fact: fact.clone() });

            match self.repository.insert(&fact).await {
                Ok(()) => {
                    self.observer.record(ImportEvent::Persisted { fact: fact.clone() });
                    accepted.push(fact);
                }
                Err(err) => {
                    self.observer.record(ImportEvent::PersistFailed {
                        iteration,
                        detail: err.to_string(),
                    });
                }
            }
        }

        Ok(accepted)
    }
}
