use std::sync::Arc;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::use_cases::get_product_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use crate::domain::catalog::view::CatalogViewConfig;
use crate::domain::logger::Logger;
use crate::domain::product::detail::ProductDetail;

pub struct GetProductDetailUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub config: CatalogViewConfig,
    pub logger: Arc<dyn Logger>,
}

impl GetProductDetailUseCase for GetProductDetailUseCaseImpl {
    fn execute(&self, params: GetProductDetailParams) -> Result<ProductDetail, CatalogError> {
        let product = self
            .catalog
            .find_product(params.id)
            .cloned()
            .ok_or(CatalogError::ProductNotFound)?;

        self.logger
            .debug(&format!("Opening product detail: {}", params.id));
        Ok(ProductDetail::new(product, self.config.gallery_enabled))
    }
}
