use crate::domain::banner::resolution::BannerAction;
use crate::domain::catalog::errors::CatalogError;

pub struct ResolveBannerParams {
    pub index: usize,
}

pub trait ResolveBannerUseCase: Send + Sync {
    /// Fails only when no banner sits at `index`; a dangling link resolves
    /// to `BannerAction::None`.
    fn execute(&self, params: ResolveBannerParams) -> Result<BannerAction, CatalogError>;
}
