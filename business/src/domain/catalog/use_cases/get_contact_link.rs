use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::value_objects::ProductId;

pub struct GetContactLinkParams {
    pub product_id: ProductId,
}

pub trait GetContactLinkUseCase: Send + Sync {
    fn execute(&self, params: GetContactLinkParams) -> Result<String, CatalogError>;
}
