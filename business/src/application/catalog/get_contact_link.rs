use std::sync::Arc;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::use_cases::get_contact_link::{
    GetContactLinkParams, GetContactLinkUseCase,
};
use crate::domain::contact::link::contact_link;
use crate::domain::logger::Logger;

pub struct GetContactLinkUseCaseImpl {
    pub catalog: Arc<Catalog>,
    /// Telegram username of the seller.
    pub handle: String,
    pub logger: Arc<dyn Logger>,
}

impl GetContactLinkUseCase for GetContactLinkUseCaseImpl {
    fn execute(&self, params: GetContactLinkParams) -> Result<String, CatalogError> {
        let product = self
            .catalog
            .find_product(params.product_id)
            .ok_or(CatalogError::ProductNotFound)?;

        let link = contact_link(&self.handle, product).inspect_err(|_| {
            self.logger
                .error(&format!("Invalid contact handle configured: '{}'", self.handle))
        })?;
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{CatalogOrigin, CatalogSnapshot};
    use crate::domain::product::model::Product;
    use crate::domain::shared::value_objects::ProductId;
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

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::new(
            CatalogSnapshot {
                products: vec![Product::new(1, "MacBook Air M3", 119990, "Macbook", "img")],
                banners: vec![],
            },
            CatalogOrigin::Remote,
        ))
    }

    #[test]
    fn should_build_link_for_known_product() {
        let use_case = GetContactLinkUseCaseImpl {
            catalog: catalog(),
            handle: "feliks_df".to_string(),
            logger: Arc::new(MockLog::new()),
        };

        let link = use_case
            .execute(GetContactLinkParams {
                product_id: ProductId::new(1),
            })
            .unwrap();

        assert!(link.starts_with("https://t.me/feliks_df?text="));
    }

    #[test]
    fn should_fail_for_unknown_product() {
        let use_case = GetContactLinkUseCaseImpl {
            catalog: catalog(),
            handle: "feliks_df".to_string(),
            logger: Arc::new(MockLog::new()),
        };

        let result = use_case.execute(GetContactLinkParams {
            product_id: ProductId::new(2),
        });

        assert!(matches!(result, Err(CatalogError::ProductNotFound)));
    }

    #[test]
    fn should_log_and_fail_for_invalid_handle() {
        let mut logger = MockLog::new();
        logger.expect_error().times(1).returning(|_| ());

        let use_case = GetContactLinkUseCaseImpl {
            catalog: catalog(),
            handle: "not a handle".to_string(),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(GetContactLinkParams {
            product_id: ProductId::new(1),
        });

        assert!(matches!(result, Err(CatalogError::Contact(_))));
    }
}
