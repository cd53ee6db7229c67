use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::fallback::fallback_catalog;
use crate::domain::catalog::model::{Catalog, CatalogOrigin};
use crate::domain::catalog::source::CatalogSource;
use crate::domain::catalog::use_cases::load::LoadCatalogUseCase;
use crate::domain::logger::Logger;

pub struct LoadCatalogUseCaseImpl {
    pub source: Arc<dyn CatalogSource>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCatalogUseCase for LoadCatalogUseCaseImpl {
    async fn execute(&self) -> Catalog {
        self.logger.info("Loading catalog");

        match self.source.fetch().await {
            Ok(snapshot) => {
                self.logger.info(&format!(
                    "Catalog loaded: {} products, {} banners",
                    snapshot.products.len(),
                    snapshot.banners.len()
                ));
                Catalog::new(snapshot, CatalogOrigin::Remote)
            }
            Err(err) => {
                self.logger.warn(&format!(
                    "Catalog fetch failed ({}), serving fallback catalog",
                    err
                ));
                Catalog::new(fallback_catalog(), CatalogOrigin::Fallback)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::CatalogSnapshot;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::Product;
    use mockall::mock;

    mock! {
        pub Source {}

        #[async_trait]
        impl CatalogSource for Source {
            async fn fetch(&self) -> Result<CatalogSnapshot, RepositoryError>;
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
    async fn should_use_fetched_catalog_when_source_succeeds() {
        let mut source = MockSource::new();
        source.expect_fetch().times(1).returning(|| {
            Ok(CatalogSnapshot {
                products: vec![Product::new(10, "AirPods Pro 2", 19990, "Headphones", "img")],
                banners: vec![],
            })
        });

        let use_case = LoadCatalogUseCaseImpl {
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let catalog = use_case.execute().await;

        assert_eq!(catalog.origin(), CatalogOrigin::Remote);
        assert_eq!(catalog.products().len(), 1);
        assert_eq!(catalog.products()[0].name.as_deref(), Some("AirPods Pro 2"));
    }

    #[tokio::test]
    async fn should_substitute_fallback_when_source_fails() {
        let mut source = MockSource::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(RepositoryError::Unavailable));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let use_case = LoadCatalogUseCaseImpl {
            source: Arc::new(source),
            logger: Arc::new(logger),
        };

        let catalog = use_case.execute().await;

        assert_eq!(catalog.origin(), CatalogOrigin::Fallback);
        assert_eq!(catalog.products(), fallback_catalog().products.as_slice());
        assert!(catalog.banners().is_empty());
    }

    #[tokio::test]
    async fn should_keep_empty_remote_catalog_without_fallback() {
        let mut source = MockSource::new();
        source
            .expect_fetch()
            .returning(|| Ok(CatalogSnapshot::default()));

        let use_case = LoadCatalogUseCaseImpl {
            source: Arc::new(source),
            logger: mock_logger(),
        };

        let catalog = use_case.execute().await;

        assert_eq!(catalog.origin(), CatalogOrigin::Remote);
        assert!(catalog.products().is_empty());
    }
}
