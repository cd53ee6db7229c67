use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, ProductFields, ProductRecord};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<ProductRecord, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

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

        let key = self.repository.create(&fields).await.inspect_err(|e| {
            self.logger
                .error(&format!("Failed to create product '{}': {}", fields.name, e))
        })?;

        self.logger
            .info(&format!("Product created with key: {}", key));
        Ok(ProductRecord { key, fields })
    }
}
