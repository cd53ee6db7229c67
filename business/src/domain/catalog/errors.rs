#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.banner_not_found")]
    BannerNotFound,
    #[error("catalog.session_not_found")]
    SessionNotFound,
    #[error("contact.invalid_handle")]
    Contact(#[from] crate::domain::contact::errors::ContactError),
}
