use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductRecord;
use crate::domain::shared::value_objects::ProductKey;

pub struct GetProductByKeyParams {
    pub key: ProductKey,
}

#[async_trait]
pub trait GetProductByKeyUseCase: Send + Sync {
    async fn execute(&self, params: GetProductByKeyParams) -> Result<ProductRecord, ProductError>;
}
