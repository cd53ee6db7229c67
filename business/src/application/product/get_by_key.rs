use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductRecord;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_key::{GetProductByKeyParams, GetProductByKeyUseCase};

pub struct GetProductByKeyUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByKeyUseCase for GetProductByKeyUseCaseImpl {
    async fn execute(&self, params: GetProductByKeyParams) -> Result<ProductRecord, ProductError> {
        if !params.key.is_valid() {
            return Err(ProductError::InvalidKey);
        }

        self.logger
            .info(&format!("Fetching product by key: {}", params.key));
        self.repository
            .get_by_key(&params.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })
    }
}
