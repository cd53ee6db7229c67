use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.key));

        if !params.key.is_valid() {
            return Err(ProductError::InvalidKey);
        }

        // Verify product exists before deleting
        self.repository
            .get_by_key(&params.key)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.repository.delete(&params.key).await?;

        self.logger.info(&format!("Product deleted: {}", params.key));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{ProductFields, ProductRecord};
    use crate::domain::shared::value_objects::ProductKey;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<ProductRecord>, RepositoryError>;
            async fn get_by_key(&self, key: &ProductKey) -> Result<ProductRecord, RepositoryError>;
            async fn create(&self, fields: &ProductFields) -> Result<ProductKey, RepositoryError>;
            async fn update(&self, key: &ProductKey, fields: &ProductFields) -> Result<(), RepositoryError>;
            async fn delete(&self, key: &ProductKey) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_key().returning(|key| {
            Ok(ProductRecord {
                key: key.clone(),
                fields: ProductFields {
                    name: "Beats Studio Pro".to_string(),
                    price: 24990,
                    image: "img".to_string(),
                    category: "Headphones".to_string(),
                    description: String::new(),
                    storage: None,
                    battery_health: None,
                    condition: None,
                    extra_images: vec![],
                },
            })
        });
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                key: ProductKey::new("-Nbeats"),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_key()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_delete().never();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                key: ProductKey::new("-Nnothing"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_delete_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_key().returning(|key| {
            Ok(ProductRecord {
                key: key.clone(),
                fields: ProductFields {
                    name: "Beats Solo 4".to_string(),
                    price: 14990,
                    image: "img".to_string(),
                    category: "Headphones".to_string(),
                    description: String::new(),
                    storage: None,
                    battery_health: None,
                    condition: None,
                    extra_images: vec![],
                },
            })
        });
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::Unavailable));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                key: ProductKey::new("-Nsolo"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Unavailable)
        ));
    }
}
