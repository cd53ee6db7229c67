use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::CatalogSnapshot;

/// Port for the one-shot catalog fetch performed at startup.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<CatalogSnapshot, RepositoryError>;
}
