//! Outbound HTTP capability for fetching fact records.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::model::FactRecord;

/// A capability that performs one GET against the upstream API and
/// decodes the response body into a fact record.
#[async_trait]
pub trait FactFetcher: Send + Sync {
    async fn fetch_fact(&self, url: &str) -> Result<FactRecord, FetchError>;
}

#[async_trait]
impl<T: FactFetcher + ?Sized> FactFetcher for &T {
    async fn fetch_fact(&self, url: &str) -> Result<FactRecord, FetchError> {
        (**self).fetch_fact(url).await
    }
}

/// Production fetcher over [`reqwest::Client`].
///
/// Uses the client's default timeout behavior; no retry, no custom
/// headers, no request body.
#[derive(Debug, Clone, Default)]
pub struct HttpFactFetcher {
    client: reqwest::Client,
}

impl HttpFactFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl FactFetcher for HttpFactFetcher {
    async fn fetch_fact(&self, url: &str) -> Result<FactRecord, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<FactRecord>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
