use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::catalog::category::ALL_CATEGORIES;
use business::domain::catalog::use_cases::browse::{BrowseCatalogParams, BrowseCatalogUseCase};
use business::domain::catalog::use_cases::get_contact_link::{
    GetContactLinkParams, GetContactLinkUseCase,
};
use business::domain::catalog::use_cases::get_product_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};
use business::domain::catalog::use_cases::list_banners::ListBannersUseCase;
use business::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use business::domain::catalog::use_cases::resolve_banner::{
    ResolveBannerParams, ResolveBannerUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::catalog::dto::{
    BannerActionResponse, BannerResponse, CatalogPageResponse, CategoriesResponse,
    ContactLinkResponse, ProductDetailResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    browse_use_case: Arc<dyn BrowseCatalogUseCase>,
    get_product_detail_use_case: Arc<dyn GetProductDetailUseCase>,
    get_contact_link_use_case: Arc<dyn GetContactLinkUseCase>,
    list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
    list_banners_use_case: Arc<dyn ListBannersUseCase>,
    resolve_banner_use_case: Arc<dyn ResolveBannerUseCase>,
}

impl CatalogApi {
    pub fn new(
        browse_use_case: Arc<dyn BrowseCatalogUseCase>,
        get_product_detail_use_case: Arc<dyn GetProductDetailUseCase>,
        get_contact_link_use_case: Arc<dyn GetContactLinkUseCase>,
        list_categories_use_case: Arc<dyn ListCategoriesUseCase>,
        list_banners_use_case: Arc<dyn ListBannersUseCase>,
        resolve_banner_use_case: Arc<dyn ResolveBannerUseCase>,
    ) -> Self {
        Self {
            browse_use_case,
            get_product_detail_use_case,
            get_contact_link_use_case,
            list_categories_use_case,
            list_banners_use_case,
            resolve_banner_use_case,
        }
    }
}

/// Storefront catalog API
///
/// Stateless browsing of the catalog loaded at startup.
#[OpenApi]
impl CatalogApi {
    /// Browse the catalog
    ///
    /// Filters by category and case-insensitive name search, then returns the
    /// requested page. Out-of-range pages come back empty.
    #[oai(path = "/catalog/products", method = "get", tag = "ApiTags::Catalog")]
    async fn browse(
        &self,
        search: Query<Option<String>>,
        category: Query<Option<String>>,
        page: Query<Option<u32>>,
    ) -> Json<CatalogPageResponse> {
        let page = self.browse_use_case.execute(BrowseCatalogParams {
            search_term: search.0.unwrap_or_default(),
            category: category.0.unwrap_or_else(|| ALL_CATEGORIES.to_string()),
            page: page.0.unwrap_or(1) as usize,
        });

        Json(page.into())
    }

    /// Get a product with its gallery
    #[oai(path = "/catalog/products/:id", method = "get", tag = "ApiTags::Catalog")]
    async fn get_product(&self, id: Path<i64>) -> GetProductDetailResponse {
        match self
            .get_product_detail_use_case
            .execute(GetProductDetailParams {
                id: ProductId::new(id.0),
            }) {
            Ok(detail) => GetProductDetailResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductDetailResponse::NotFound(json),
                    _ => GetProductDetailResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the purchase contact link for a product
    ///
    /// Returns a Telegram link that opens a chat with the purchase message
    /// already typed in.
    #[oai(
        path = "/catalog/products/:id/contact",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn get_contact_link(&self, id: Path<i64>) -> GetContactLinkResponse {
        match self
            .get_contact_link_use_case
            .execute(GetContactLinkParams {
                product_id: ProductId::new(id.0),
            }) {
            Ok(url) => GetContactLinkResponse::Ok(Json(ContactLinkResponse { url })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetContactLinkResponse::NotFound(json),
                    _ => GetContactLinkResponse::InternalError(json),
                }
            }
        }
    }

    /// List categories
    #[oai(path = "/catalog/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn list_categories(&self) -> Json<CategoriesResponse> {
        Json(self.list_categories_use_case.execute().into())
    }

    /// List banners
    #[oai(path = "/catalog/banners", method = "get", tag = "ApiTags::Catalog")]
    async fn list_banners(&self) -> Json<Vec<BannerResponse>> {
        Json(
            self.list_banners_use_case
                .execute()
                .into_iter()
                .enumerate()
                .map(|(index, banner)| BannerResponse::new(index, banner))
                .collect(),
        )
    }

    /// Resolve what clicking a banner does
    ///
    /// Dangling product links and disabled linking resolve to `none`.
    #[oai(
        path = "/catalog/banners/:index/action",
        method = "get",
        tag = "ApiTags::Catalog"
    )]
    async fn resolve_banner(&self, index: Path<u32>) -> ResolveBannerResponse {
        match self.resolve_banner_use_case.execute(ResolveBannerParams {
            index: index.0 as usize,
        }) {
            Ok(action) => ResolveBannerResponse::Ok(Json(action.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ResolveBannerResponse::NotFound(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductDetailResponse {
    #[oai(status = 200)]
    Ok(Json<ProductDetailResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetContactLinkResponse {
    #[oai(status = 200)]
    Ok(Json<ContactLinkResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ResolveBannerResponse {
    #[oai(status = 200)]
    Ok(Json<BannerActionResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::catalog::browse::BrowseCatalogUseCaseImpl;
    use business::application::catalog::get_contact_link::GetContactLinkUseCaseImpl;
    use business::application::catalog::get_product_detail::GetProductDetailUseCaseImpl;
    use business::application::catalog::list_banners::ListBannersUseCaseImpl;
    use business::application::catalog::list_categories::ListCategoriesUseCaseImpl;
    use business::application::catalog::resolve_banner::ResolveBannerUseCaseImpl;
    use business::domain::banner::model::{Banner, BannerKind, LinkTarget};
    use business::domain::catalog::model::{Catalog, CatalogOrigin, CatalogSnapshot};
    use business::domain::catalog::view::CatalogViewConfig;
    use business::domain::logger::Logger;
    use business::domain::product::model::Product;
    use logger::TracingLogger;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;

    fn test_client() -> TestClient<poem::endpoint::BoxEndpoint<'static>> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let config = CatalogViewConfig::default();
        let products = (1..=8i64)
            .map(|i| Product::new(i, format!("iPhone {}", 8 + i), 10000 * i as u64, "iPhone", "img"))
            .chain([Product::new(20, "AirPods Max", 49990, "Headphones", "img")])
            .collect();
        let banners = vec![Banner {
            title: "Trade-in".to_string(),
            text: "Swap your old iPhone".to_string(),
            background: "dark".to_string(),
            image: None,
            link_to_product: Some(LinkTarget::Id(20)),
            kind: BannerKind::Product,
        }];
        let catalog = Arc::new(Catalog::new(
            CatalogSnapshot { products, banners },
            CatalogOrigin::Remote,
        ));

        let api = CatalogApi::new(
            Arc::new(BrowseCatalogUseCaseImpl {
                catalog: catalog.clone(),
                config: config.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductDetailUseCaseImpl {
                catalog: catalog.clone(),
                config: config.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetContactLinkUseCaseImpl {
                catalog: catalog.clone(),
                handle: "shop".to_string(),
                logger: logger.clone(),
            }),
            Arc::new(ListCategoriesUseCaseImpl {
                catalog: catalog.clone(),
            }),
            Arc::new(ListBannersUseCaseImpl {
                catalog: catalog.clone(),
            }),
            Arc::new(ResolveBannerUseCaseImpl {
                catalog,
                config,
                logger,
            }),
        );

        TestClient::new(OpenApiService::new(api, "Storefront API", "test"))
    }

    #[tokio::test]
    async fn should_return_first_page_by_default() {
        let cli = test_client();

        let resp = cli.get("/catalog/products").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let page = json.value().object();
        page.get("totalItems").assert_i64(9);
        page.get("totalPages").assert_i64(2);
        page.get("currentPage").assert_i64(1);
        page.get("products").array().assert_len(6);
    }

    #[tokio::test]
    async fn should_filter_by_category_and_search() {
        let cli = test_client();

        let resp = cli
            .get("/catalog/products")
            .query("category", &"iPhone")
            .query("search", &"IPHONE 1")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        // iPhone 10 .. iPhone 16
        json.value().object().get("totalItems").assert_i64(7);
    }

    #[tokio::test]
    async fn should_return_empty_page_past_the_end() {
        let cli = test_client();

        let resp = cli.get("/catalog/products").query("page", &5).send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        json.value().object().get("products").array().assert_len(0);
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_product() {
        let cli = test_client();

        let resp = cli.get("/catalog/products/404").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_resolve_banner_to_linked_product() {
        let cli = test_client();

        let resp = cli.get("/catalog/banners/0/action").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let action = json.value().object();
        action.get("action").assert_string("show_product");
        action.get("product").object().get("id").assert_i64(20);
    }

    #[tokio::test]
    async fn should_return_404_for_unknown_banner() {
        let cli = test_client();

        let resp = cli.get("/catalog/banners/3/action").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_build_contact_link() {
        let cli = test_client();

        let resp = cli.get("/catalog/products/20/contact").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let url = json.value().object().get("url").string().to_string();
        assert!(url.starts_with("https://t.me/shop?text="));
    }
}
