use async_trait::async_trait;

use crate::domain::catalog::model::Catalog;

/// Fetches the catalog once. Never fails: a failed fetch yields the
/// fallback catalog.
#[async_trait]
pub trait LoadCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Catalog;
}
