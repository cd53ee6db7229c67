use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::static_source::StaticCatalogSource;
use persistence::product::repository::DocumentStoreProductRepository;

use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
use business::application::catalog::get_contact_link::GetContactLinkUseCaseImpl;
use business::application::catalog::get_product_detail::GetProductDetailUseCaseImpl;
use business::application::catalog::list_banners::ListBannersUseCaseImpl;
use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
use business::application::catalog::load::LoadCatalogUseCaseImpl;
use business::application::catalog::resolve_banner::ResolveBannerUseCaseImpl;
use business::application::catalog::sessions::CatalogSessionsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_key::GetProductByKeyUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::catalog::source::CatalogSource;
use business::domain::catalog::use_cases::load::LoadCatalogUseCase;
use business::domain::logger::Logger;

use crate::config::storefront_config::{CatalogSourceKind, StorefrontConfig};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
    pub session_api: crate::api::session::routes::SessionApi,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    /// Fetches the catalog once and wires every API around it.
    pub async fn new(config: &StorefrontConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(DocumentStoreProductRepository::new(
            config.document_store_url.clone(),
        )?);
        let catalog_source: Arc<dyn CatalogSource> = match config.source {
            CatalogSourceKind::Static => Arc::new(StaticCatalogSource::new(
                config.catalog_url.clone().unwrap_or_default(),
            )?),
            CatalogSourceKind::DocumentStore => product_repository.clone(),
        };

        // Catalog, loaded before serving
        let catalog = Arc::new(
            LoadCatalogUseCaseImpl {
                source: catalog_source,
                logger: logger.clone(),
            }
            .execute()
            .await,
        );

        let health_api = crate::api::health::routes::Api::new(catalog.clone());

        // Catalog use cases
        let browse_use_case = Arc::new(BrowseCatalogUseCaseImpl {
            catalog: catalog.clone(),
            config: config.view.clone(),
            logger: logger.clone(),
        });
        let get_product_detail_use_case = Arc::new(GetProductDetailUseCaseImpl {
            catalog: catalog.clone(),
            config: config.view.clone(),
            logger: logger.clone(),
        });
        let get_contact_link_use_case = Arc::new(GetContactLinkUseCaseImpl {
            catalog: catalog.clone(),
            handle: config.contact_handle.clone(),
            logger: logger.clone(),
        });
        let list_categories_use_case = Arc::new(ListCategoriesUseCaseImpl {
            catalog: catalog.clone(),
        });
        let list_banners_use_case = Arc::new(ListBannersUseCaseImpl {
            catalog: catalog.clone(),
        });
        let resolve_banner_use_case = Arc::new(ResolveBannerUseCaseImpl {
            catalog: catalog.clone(),
            config: config.view.clone(),
            logger: logger.clone(),
        });
        let sessions_use_case = Arc::new(CatalogSessionsUseCaseImpl::new(
            catalog,
            config.view.clone(),
            logger.clone(),
        ));

        // Admin product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_key_use_case = Arc::new(GetProductByKeyUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            browse_use_case,
            get_product_detail_use_case,
            get_contact_link_use_case,
            list_categories_use_case,
            list_banners_use_case,
            resolve_banner_use_case,
        );

        let session_api = crate::api::session::routes::SessionApi::new(sessions_use_case);

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            get_by_key_use_case,
            update_use_case,
            delete_use_case,
        );

        Ok(Self {
            health_api,
            catalog_api,
            session_api,
            product_api,
        })
    }
}
