use async_trait::async_trait;

use business::domain::catalog::model::CatalogSnapshot;
use business::domain::catalog::source::CatalogSource;
use business::domain::errors::RepositoryError;

use crate::client::JsonHttpClient;

use super::entity::CatalogDocument;

/// Reads the whole catalog from a single JSON file served over HTTP.
pub struct StaticCatalogSource {
    http: JsonHttpClient,
    url: String,
}

impl StaticCatalogSource {
    pub fn new(url: impl Into<String>) -> Result<Self, RepositoryError> {
        let url = url.into().trim().to_string();
        Ok(Self {
            http: JsonHttpClient::new(url.clone())?,
            url,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch(&self) -> Result<CatalogSnapshot, RepositoryError> {
        let body = self.http.get_json(&self.url).await?;

        let document = serde_json::from_value::<CatalogDocument>(body).map_err(|e| {
            tracing::warn!(url = %self.url, error = %e, "catalog file has an unexpected shape");
            RepositoryError::InvalidPayload
        })?;

        let snapshot = document.into_snapshot();
        tracing::debug!(
            products = snapshot.products.len(),
            banners = snapshot.banners.len(),
            "static catalog fetched"
        );
        Ok(snapshot)
    }
}
