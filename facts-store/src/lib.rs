//! Postgres storage adapter for the fact import engine.
//!
//! Implements the insert-only [`facts_core::FactRepository`] port over a
//! bounded `sqlx` connection pool. The `cat_facts` table schema lives in
//! `migrations/` and is embedded at compile time.

pub mod postgres;

pub use postgres::{PgFactRepository, StoredFact};
