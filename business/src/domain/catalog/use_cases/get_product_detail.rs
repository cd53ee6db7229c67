use crate::domain::catalog::errors::CatalogError;
use crate::domain::product::detail::ProductDetail;
use crate::domain::shared::value_objects::ProductId;

pub struct GetProductDetailParams {
    pub id: ProductId,
}

pub trait GetProductDetailUseCase: Send + Sync {
    fn execute(&self, params: GetProductDetailParams) -> Result<ProductDetail, CatalogError>;
}
