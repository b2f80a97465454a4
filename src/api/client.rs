//! HTTP client for the academy content endpoint.

use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{Collection, ContentError};

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for `/api/content/{collection}`.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ContentClient {
    client: Client,
    base_url: String,
}

impl ContentClient {
    /// Create a new client against the given site base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one collection as a JSON array of `T`.
    ///
    /// Any failure along the way - send error, non-2xx status, body that does
    /// not decode - is reported as the same retrieval error for the
    /// collection.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Vec<T>, ContentError> {
        let url = format!("{}/api/content/{}", self.base_url, collection.path());
        debug!(%collection, url = %url, "fetching collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ContentError::retrieval(collection, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%collection, status = %status, "content endpoint returned non-success");
            return Err(ContentError::status(collection, status));
        }

        let items = response
            .json::<Vec<T>>()
            .await
            .map_err(|e| ContentError::retrieval(collection, e))?;

        debug!(%collection, count = items.len(), "collection fetched");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = ContentClient::new("https://www.example.com").unwrap();
        assert_eq!(client.base_url(), "https://www.example.com");
    }
}
