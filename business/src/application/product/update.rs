use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, ProductFields, ProductRecord};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<ProductRecord, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.key));

        if !params.key.is_valid() {
            return Err(ProductError::InvalidKey);
        }

        let fields = ProductFields::new(NewProductProps {
            name: params.name,
            price: params.price,
            image: params.image,
            category: params.category,
            description: params.description,
            storage: params.storage,
            battery_health: params.battery_health,
            condition: params.condition,
            extra_images: params.extra_images,
        })?;

        // A PUT on a missing key would silently create a document
        self.repository
            .get_by_key(&params.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.repository
            .update(&params.key, &fields)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Failed to update product {}: {}", params.key, e))
            })?;

        self.logger
            .info(&format!("Product updated: {}", params.key));
        Ok(ProductRecord {
            key: params.key,
            fields,
        })
    }
}
