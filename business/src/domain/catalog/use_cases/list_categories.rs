pub struct CategoryListing {
    /// The storefront's fixed category menu.
    pub menu: Vec<String>,
    /// Categories actually present in the loaded catalog.
    pub available: Vec<String>,
}

pub trait ListCategoriesUseCase: Send + Sync {
    fn execute(&self) -> CategoryListing;
}
