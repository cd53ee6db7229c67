use std::sync::Arc;

use crate::domain::catalog::category::{DEFAULT_CATEGORIES, categories_in};
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::use_cases::list_categories::{CategoryListing, ListCategoriesUseCase};

pub struct ListCategoriesUseCaseImpl {
    pub catalog: Arc<Catalog>,
}

impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    fn execute(&self) -> CategoryListing {
        CategoryListing {
            menu: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            available: categories_in(self.catalog.products()),
        }
    }
}
