//! `HttpFactFetcher` against a local mock HTTP server.

use serde_json::json;

use facts_core::testing::{MemoryRepository, RecordingObserver};
use facts_core::{FactImporter, FactFetcher, FetchError, HttpFactFetcher, RawSettings, BATCH_SIZE};

#[tokio::test]
async fn decodes_a_successful_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/fact")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"fact": "Cats have whiskers on their legs.", "length": 33}"#)
        .create_async()
        .await;

    let fetcher = HttpFactFetcher::new();
    let fact = fetcher
        .fetch_fact(&format!("{}/fact", server.url()))
        .await
        .unwrap();

    assert_eq!(fact.text, "Cats have whiskers on their legs.");
    assert_eq!(fact.length, 33);
    mock.assert_async().await;
}

#[tokio::test]
async fn maps_error_statuses_to_protocol_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/fact")
        .with_status(404)
        .create_async()
        .await;

    let fetcher = HttpFactFetcher::new();
    let err = fetcher
        .fetch_fact(&format!("{}/fact", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404 }));
}

#[tokio::test]
async fn maps_malformed_bodies_to_decode_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/fact")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create_async()
        .await;

    let fetcher = HttpFactFetcher::new();
    let err = fetcher
        .fetch_fact(&format!("{}/fact", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn maps_unreachable_hosts_to_network_errors() {
    // Nothing listens on port 1.
    let fetcher = HttpFactFetcher::new();
    let err = fetcher
        .fetch_fact("http://127.0.0.1:1/fact")
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn full_import_over_http_persists_the_whole_batch() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/fact")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"fact": "A group of cats is called a clowder.", "length": 36}"#)
        .expect(BATCH_SIZE)
        .create_async()
        .await;

    let repository = MemoryRepository::new();
    let observer = RecordingObserver::new();
    let importer = FactImporter::new(HttpFactFetcher::new(), &repository, &observer);

    let raw = RawSettings::new(
        Some(json!(format!("{}/fact", server.url()))),
        Some(json!(true)),
    );
    let accepted = importer.run(&raw).await.unwrap();

    assert_eq!(accepted.len(), BATCH_SIZE);
    assert_eq!(repository.snapshot().await.len(), BATCH_SIZE);
    mock.assert_async().await;
}
