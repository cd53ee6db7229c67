use std::cmp::Ordering;

use async_trait::async_trait;
use serde_json::Value;

use business::domain::catalog::model::CatalogSnapshot;
use business::domain::catalog::source::CatalogSource;
use business::domain::errors::RepositoryError;
use business::domain::product::model::{ProductFields, ProductRecord};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductKey;

use crate::client::{JsonHttpClient, parse_json};

use super::entity::{ProductDocument, project_documents};

/// Products stored as a keyed JSON collection in a REST document store.
pub struct DocumentStoreProductRepository {
    http: JsonHttpClient,
}

impl DocumentStoreProductRepository {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RepositoryError> {
        Ok(Self {
            http: JsonHttpClient::new(endpoint)?,
        })
    }

    /// Every readable document of the collection, in store order.
    async fn fetch_documents(&self) -> Result<Vec<(String, ProductDocument)>, RepositoryError> {
        let body = self.http.get_json(&self.http.collection_url()).await?;
        Ok(collection_entries(body)?
            .into_iter()
            .filter_map(|(key, value)| ProductDocument::from_value(value).map(|doc| (key, doc)))
            .collect())
    }
}

/// Splits a collection body into `(key, document)` pairs, in store order.
///
/// An empty collection reads back as `null`. Collections whose keys are all
/// small integers may come back as an array with holes, already in order.
/// Map keys follow the store's ordering: integer-like keys numerically
/// first, then the rest lexicographically.
fn collection_entries(body: Value) -> Result<Vec<(String, Value)>, RepositoryError> {
    match body {
        Value::Null => Ok(Vec::new()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| store_key_order(a, b));
            Ok(entries)
        }
        Value::Array(items) => Ok(items
            .into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_null())
            .map(|(index, value)| (index.to_string(), value))
            .collect()),
        other => {
            tracing::warn!(kind = %json_kind(&other), "product collection is not a map");
            Err(RepositoryError::InvalidPayload)
        }
    }
}

fn store_key_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl ProductRepository for DocumentStoreProductRepository {
    async fn get_all(&self) -> Result<Vec<ProductRecord>, RepositoryError> {
        Ok(self
            .fetch_documents()
            .await?
            .into_iter()
            .map(|(key, document)| ProductRecord {
                key: ProductKey::new(key),
                fields: document.into_fields(),
            })
            .collect())
    }

    async fn get_by_key(&self, key: &ProductKey) -> Result<ProductRecord, RepositoryError> {
        let body = self.http.get_json(&self.http.document_url(key)).await?;
        if body.is_null() {
            return Err(RepositoryError::NotFound);
        }

        let document = serde_json::from_value::<ProductDocument>(body).map_err(|e| {
            tracing::warn!(key = %key, error = %e, "stored product has an unexpected shape");
            RepositoryError::InvalidPayload
        })?;

        Ok(ProductRecord {
            key: key.clone(),
            fields: document.into_fields(),
        })
    }

    async fn create(&self, fields: &ProductFields) -> Result<ProductKey, RepositoryError> {
        let response = self
            .http
            .client
            .post(self.http.collection_url())
            .json(&ProductDocument::from(fields))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "product create request failed");
                RepositoryError::Persistence
            })?;

        if !response.status().is_success() {
            tracing::error!(status = %response.status(), "product create rejected");
            return Err(RepositoryError::Persistence);
        }

        let body = parse_json(response).await?;
        body.get("name")
            .and_then(Value::as_str)
            .map(ProductKey::new)
            .ok_or_else(|| {
                tracing::error!("product create response carries no key");
                RepositoryError::InvalidPayload
            })
    }

    async fn update(&self, key: &ProductKey, fields: &ProductFields) -> Result<(), RepositoryError> {
        let response = self
            .http
            .client
            .put(self.http.document_url(key))
            .json(&ProductDocument::from(fields))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "product update request failed");
                RepositoryError::Persistence
            })?;

        if !response.status().is_success() {
            tracing::error!(key = %key, status = %response.status(), "product update rejected");
            return Err(RepositoryError::Persistence);
        }
        Ok(())
    }

    async fn delete(&self, key: &ProductKey) -> Result<(), RepositoryError> {
        let response = self
            .http
            .client
            .delete(self.http.document_url(key))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(key = %key, error = %e, "product delete request failed");
                RepositoryError::Persistence
            })?;

        if !response.status().is_success() {
            tracing::error!(key = %key, status = %response.status(), "product delete rejected");
            return Err(RepositoryError::Persistence);
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for DocumentStoreProductRepository {
    async fn fetch(&self) -> Result<CatalogSnapshot, RepositoryError> {
        let entries = self
            .fetch_documents()
            .await?
            .into_iter()
            .map(|(key, document)| (Some(key), document))
            .collect();

        Ok(CatalogSnapshot {
            products: project_documents(entries),
            banners: Vec::new(),
        })
    }
}
