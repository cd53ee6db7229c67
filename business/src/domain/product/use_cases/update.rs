use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductRecord;
use crate::domain::shared::value_objects::ProductKey;

pub struct UpdateProductParams {
    pub key: ProductKey,
    pub name: String,
    pub price: u64,
    pub image: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub storage: Option<String>,
    pub battery_health: Option<String>,
    pub condition: Option<String>,
    pub extra_images: Vec<String>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<ProductRecord, ProductError>;
}
