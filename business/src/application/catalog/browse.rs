use std::sync::Arc;

use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use crate::domain::catalog::view::{self, CatalogPage, CatalogViewConfig, ViewState};
use crate::domain::logger::Logger;

pub struct BrowseCatalogUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub config: CatalogViewConfig,
    pub logger: Arc<dyn Logger>,
}

impl BrowseCatalogUseCase for BrowseCatalogUseCaseImpl {
    fn execute(&self, params: BrowseCatalogParams) -> CatalogPage {
        self.logger.debug(&format!(
            "Browsing catalog: search='{}' category='{}' page={}",
            params.search_term, params.category, params.page
        ));

        let state = ViewState {
            search_term: params.search_term,
            selected_category: params.category,
            current_page: params.page,
        };
        view::derive_page(self.catalog.products(), &state, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::category::ALL_CATEGORIES;
    use crate::domain::catalog::model::{CatalogOrigin, CatalogSnapshot};
    use crate::domain::product::model::Product;
    use mockall::mock;

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

    fn use_case() -> BrowseCatalogUseCaseImpl {
        let products = vec![
            Product::new(1, "iPhone 15 Pro", 99990, "New iPhone", "a"),
            Product::new(2, "iPhone 13", 45990, "iPhone", "b"),
            Product::new(3, "MacBook Air M3", 119990, "Macbook", "c"),
            Product::new(4, "Apple Watch Ultra", 69990, "Watches", "d"),
            Product::new(5, "iPhone 12", 35990, "iPhone", "e"),
            Product::new(6, "iPhone 11", 25990, "iPhone", "f"),
            Product::new(7, "iPhone XR", 15990, "iPhone", "g"),
        ];
        BrowseCatalogUseCaseImpl {
            catalog: Arc::new(Catalog::new(
                CatalogSnapshot {
                    products,
                    banners: vec![],
                },
                CatalogOrigin::Remote,
            )),
            config: CatalogViewConfig::default(),
            logger: mock_logger(),
        }
    }

    #[test]
    fn should_return_first_page_of_all_products() {
        let page = use_case().execute(BrowseCatalogParams {
            search_term: String::new(),
            category: ALL_CATEGORIES.to_string(),
            page: 1,
        });

        assert_eq!(page.products.len(), 6);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.total_items, 7);
    }

    #[test]
    fn should_filter_by_category_and_search() {
        let page = use_case().execute(BrowseCatalogParams {
            search_term: "IPHONE 1".to_string(),
            category: "iPhone".to_string(),
            page: 1,
        });

        let names: Vec<_> = page.products.iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["iPhone 13", "iPhone 12", "iPhone 11"]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn should_return_empty_page_without_error_when_nothing_matches() {
        let page = use_case().execute(BrowseCatalogParams {
            search_term: "android".to_string(),
            category: ALL_CATEGORIES.to_string(),
            page: 1,
        });

        assert!(page.products.is_empty());
        assert_eq!(page.total_pages, 1);
    }
}
