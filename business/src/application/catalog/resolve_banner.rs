use std::sync::Arc;

use crate::domain::banner::resolution::{BannerAction, resolve};
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::use_cases::resolve_banner::{ResolveBannerParams, ResolveBannerUseCase};
use crate::domain::catalog::view::CatalogViewConfig;
use crate::domain::logger::Logger;

pub struct ResolveBannerUseCaseImpl {
    pub catalog: Arc<Catalog>,
    pub config: CatalogViewConfig,
    pub logger: Arc<dyn Logger>,
}

impl ResolveBannerUseCase for ResolveBannerUseCaseImpl {
    fn execute(&self, params: ResolveBannerParams) -> Result<BannerAction, CatalogError> {
        let banner = self
            .catalog
            .banner(params.index)
            .ok_or(CatalogError::BannerNotFound)?;

        let action = resolve(
            banner,
            self.catalog.products(),
            self.config.banner_linking_enabled,
        );
        if action == BannerAction::None {
            self.logger.debug(&format!(
                "Banner {} ('{}') resolved to no action",
                params.index, banner.title
            ));
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::banner::model::{Banner, BannerKind, LinkTarget};
    use crate::domain::catalog::model::{CatalogOrigin, CatalogSnapshot};
    use crate::domain::product::model::Product;
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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn banner(title: &str, kind: BannerKind, link: LinkTarget) -> Banner {
        Banner {
            title: title.to_string(),
            text: String::new(),
            background: "bg-cyan-500".to_string(),
            image: None,
            link_to_product: Some(link),
            kind,
        }
    }

    fn use_case() -> ResolveBannerUseCaseImpl {
        ResolveBannerUseCaseImpl {
            catalog: Arc::new(Catalog::new(
                CatalogSnapshot {
                    products: vec![Product::new(2, "PlayStation 5", 54990, "Game consoles", "img")],
                    banners: vec![
                        banner("Consoles", BannerKind::Product, LinkTarget::Id(2)),
                        banner(
                            "Channel",
                            BannerKind::External,
                            LinkTarget::Text("https://t.me/a_device".to_string()),
                        ),
                        banner("Gone", BannerKind::Product, LinkTarget::Id(404)),
                    ],
                },
                CatalogOrigin::Remote,
            )),
            config: CatalogViewConfig::default(),
            logger: mock_logger(),
        }
    }

    #[test]
    fn should_resolve_product_banner() {
        let action = use_case().execute(ResolveBannerParams { index: 0 }).unwrap();
        assert!(matches!(action, BannerAction::ShowProduct(p) if p.id.value() == 2));
    }

    #[test]
    fn should_resolve_external_banner() {
        let action = use_case().execute(ResolveBannerParams { index: 1 }).unwrap();
        assert_eq!(
            action,
            BannerAction::OpenExternal("https://t.me/a_device".to_string())
        );
    }

    #[test]
    fn should_resolve_dangling_banner_to_no_action() {
        let action = use_case().execute(ResolveBannerParams { index: 2 }).unwrap();
        assert_eq!(action, BannerAction::None);
    }

    #[test]
    fn should_fail_for_unknown_banner_index() {
        let result = use_case().execute(ResolveBannerParams { index: 3 });
        assert!(matches!(result, Err(CatalogError::BannerNotFound)));
    }
}
