//! Insert-only storage port for fact records.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::model::FactRecord;

/// Repository accepting validated fact records.
///
/// The import loop only ever inserts; reads, updates and deletes are out
/// of scope for this port. One call persists one row.
#[async_trait]
pub trait FactRepository: Send + Sync {
    async fn insert(&self, fact: &FactRecord) -> Result<(), StoreError>;
}

#[async_trait]
impl<T: FactRepository + ?Sized> FactRepository for &T {
    async fn insert(&self, fact: &FactRecord) -> Result<(), StoreError> {
        (**self).insert(fact).await
    }
}
