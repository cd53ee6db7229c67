use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProductKey;

use super::model::{ProductFields, ProductRecord};

/// Admin-side access to the product documents.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
    async fn get_by_key(&self, key: &ProductKey) -> Result<ProductRecord, RepositoryError>;
    /// Stores a new document and returns the key the store assigned.
    async fn create(&self, fields: &ProductFields) -> Result<ProductKey, RepositoryError>;
    async fn update(&self, key: &ProductKey, fields: &ProductFields) -> Result<(), RepositoryError>;
    async fn delete(&self, key: &ProductKey) -> Result<(), RepositoryError>;
}
