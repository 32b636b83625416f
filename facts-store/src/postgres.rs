//! Postgres-backed fact repository.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use facts_core::error::StoreError;
use facts_core::model::FactRecord;
use facts_core::repo::FactRepository;

/// A persisted fact row, including storage metadata.
#[derive(Debug, Clone, FromRow)]
pub struct StoredFact {
    pub id: Uuid,
    pub fact: String,
    pub length: i64,
    pub created_at: DateTime<Utc>,
}

impl From<StoredFact> for FactRecord {
    fn from(row: StoredFact) -> Self {
        FactRecord::new(row.fact, row.length)
    }
}

/// Insert-only repository over a bounded Postgres pool.
#[derive(Clone)]
pub struct PgFactRepository {
    pool: PgPool,
}

impl PgFactRepository {
    /// Connect to the given database and build the pool.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!("Fact store connection pool created");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, shared pools).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }

    /// Every stored fact in insert order. Not part of the repository
    /// port; used for verification and reporting.
    pub async fn list_all(&self) -> Result<Vec<StoredFact>, StoreError> {
        sqlx::query_as::<_, StoredFact>(
            "SELECT id, fact, length, created_at FROM cat_facts ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Insert(e.to_string()))
    }
}

#[async_trait]
impl FactRepository for PgFactRepository {
    async fn insert(&self, fact: &FactRecord) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO cat_facts (id, fact, length) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(&fact.text)
            .bind(fact.length)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Insert(e.to_string()))?;
        Ok(())
    }
}
