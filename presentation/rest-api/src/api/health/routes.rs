use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use business::domain::catalog::model::Catalog;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
#[oai(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
    /// `remote` when the startup fetch succeeded, `fallback` otherwise
    pub catalog_origin: String,
    /// Number of products in the loaded catalog
    pub catalog_products: u64,
    /// When the catalog was loaded
    pub catalog_loaded_at: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    catalog: Arc<Catalog>,
}

impl Api {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service and which catalog it serves.
    /// A `fallback` origin means the catalog source could not be reached at
    /// startup and the built-in catalog is being shown.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_origin: self.catalog.origin().to_string(),
            catalog_products: self.catalog.products().len() as u64,
            catalog_loaded_at: self.catalog.loaded_at().to_rfc3339(),
        })
    }
}
