//! Round-trip tests against a live Postgres instance.
//!
//! Run with `DATABASE_URL` pointing at a scratch database:
//! `cargo test -p facts-store -- --ignored`

use facts_core::model::FactRecord;
use facts_core::repo::FactRepository;
use facts_store::PgFactRepository;

#[tokio::test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
async fn inserted_facts_round_trip_with_identical_fields() {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let repository = PgFactRepository::connect(&database_url).await.unwrap();
    repository.migrate().await.unwrap();

    let fact = FactRecord::new(
        format!("Round-trip check {}", uuid::Uuid::new_v4()),
        42,
    );
    repository.insert(&fact).await.unwrap();

    let stored = repository.list_all().await.unwrap();
    let found = stored
        .into_iter()
        .find(|row| row.fact == fact.text)
        .expect("inserted fact should be retrievable");
    assert_eq!(FactRecord::from(found), fact);
}
