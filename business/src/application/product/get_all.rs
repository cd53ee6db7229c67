use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductRecord;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductRecord>, ProductError> {
        self.logger.info("Fetching all stored products");
        let products = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} stored products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductFields;
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
    async fn should_return_all_stored_products() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![ProductRecord {
                key: ProductKey::new("-Nabc"),
                fields: ProductFields {
                    name: "Nintendo Switch OLED".to_string(),
                    price: 32990,
                    image: "img".to_string(),
                    category: "Game consoles".to_string(),
                    description: String::new(),
                    storage: None,
                    battery_health: None,
                    condition: None,
                    extra_images: vec![],
                },
            }])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].fields.name, "Nintendo Switch OLED");
    }

    #[tokio::test]
    async fn should_surface_unavailable_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Unavailable));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Unavailable)
        ));
    }
}
