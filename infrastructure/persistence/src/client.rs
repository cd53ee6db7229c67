use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProductKey;

/// Shared HTTP client for a JSON endpoint.
///
/// For the document store, `base_url` is the collection path without the
/// `.json` suffix (`https://<db>.firebaseio.com/products`). For the static
/// catalog it is the full file URL.
pub struct JsonHttpClient {
    pub client: Client,
    pub base_url: String,
}

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

impl JsonHttpClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RepositoryError> {
        Ok(Self {
            client: build_client(REQUEST_TIMEOUT)?,
            base_url: normalize_base_url(&base_url.into()),
        })
    }

    /// `<base>.json`, the whole collection.
    pub fn collection_url(&self) -> String {
        format!("{}.json", self.base_url)
    }

    /// `<base>/<key>.json`, a single document.
    pub fn document_url(&self, key: &ProductKey) -> String {
        format!("{}/{}.json", self.base_url, key.as_str())
    }

    /// GETs `url` and parses the body as JSON. Transport failures and
    /// non-2xx statuses map to `Unavailable`, bad bodies to `InvalidPayload`.
    pub async fn get_json(&self, url: &str) -> Result<Value, RepositoryError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(url, error = %e, "catalog request failed");
            RepositoryError::Unavailable
        })?;

        if !response.status().is_success() {
            tracing::warn!(url, status = %response.status(), "catalog request rejected");
            return Err(RepositoryError::Unavailable);
        }

        parse_json(response).await
    }
}

pub(crate) async fn parse_json(response: Response) -> Result<Value, RepositoryError> {
    response.json::<Value>().await.map_err(|e| {
        tracing::warn!(error = %e, "response body is not valid JSON");
        RepositoryError::InvalidPayload
    })
}

/// Every request through the returned client gives up after `timeout`.
fn build_client(timeout: Duration) -> Result<Client, RepositoryError> {
    Client::builder().timeout(timeout).build().map_err(|e| {
        tracing::error!(error = %e, "http client could not be built");
        RepositoryError::Unavailable
    })
}

/// Trims whitespace, trailing slashes and a `.json` suffix so URLs can be
/// composed uniformly.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    trimmed
        .strip_suffix(".json")
        .unwrap_or(trimmed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_collection_and_document_urls() {
        let client = JsonHttpClient::new("https://shop.firebaseio.com/products ").unwrap();

        assert_eq!(
            client.collection_url(),
            "https://shop.firebaseio.com/products.json"
        );
        assert_eq!(
            client.document_url(&ProductKey::new("-NabC")),
            "https://shop.firebaseio.com/products/-NabC.json"
        );
    }

    #[test]
    fn should_normalize_json_suffix_and_slashes() {
        assert_eq!(
            normalize_base_url("https://shop.firebaseio.com/products.json"),
            "https://shop.firebaseio.com/products"
        );
        assert_eq!(
            normalize_base_url("https://shop.firebaseio.com/products/"),
            "https://shop.firebaseio.com/products"
        );
    }

    #[test]
    fn should_build_client_with_request_timeout() {
        assert!(build_client(REQUEST_TIMEOUT).is_ok());
        assert!(build_client(Duration::from_millis(1)).is_ok());
    }

    #[tokio::test]
    async fn should_give_up_after_the_timeout() {
        let client = build_client(Duration::from_millis(1)).unwrap();

        // Non-routable address, the connect attempt can only time out
        let result = client.get("http://10.255.255.1/products.json").send().await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_report_unreachable_endpoint_as_unavailable() {
        let client = JsonHttpClient::new("http://127.0.0.1:9/products").unwrap();

        let result = client.get_json(&client.collection_url()).await;

        assert!(matches!(result, Err(RepositoryError::Unavailable)));
    }
}
