use crate::domain::catalog::view::CatalogPage;

pub struct BrowseCatalogParams {
    pub search_term: String,
    pub category: String,
    pub page: usize,
}

pub trait BrowseCatalogUseCase: Send + Sync {
    fn execute(&self, params: BrowseCatalogParams) -> CatalogPage;
}
