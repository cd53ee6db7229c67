use std::sync::Arc;

use crate::domain::banner::model::Banner;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::use_cases::list_banners::ListBannersUseCase;

pub struct ListBannersUseCaseImpl {
    pub catalog: Arc<Catalog>,
}

impl ListBannersUseCase for ListBannersUseCaseImpl {
    fn execute(&self) -> Vec<Banner> {
        self.catalog.banners().to_vec()
    }
}
