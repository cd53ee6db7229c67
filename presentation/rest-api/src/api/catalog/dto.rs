use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::banner::model::{Banner, BannerKind};
use business::domain::banner::resolution::BannerAction;
use business::domain::catalog::use_cases::list_categories::CategoryListing;
use business::domain::catalog::view::CatalogPage;
use business::domain::product::detail::ProductDetail;
use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Catalog identifier
    pub id: i64,
    /// Product name, absent when the source document has none
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// Name to show, empty when the product has none
    pub display_name: String,
    /// Price in whole rubles
    pub price: u64,
    pub category: String,
    pub image: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub storage: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub battery_health: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub condition: Option<String>,
    pub extra_images: Vec<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            display_name: product.display_name().to_string(),
            name: product.name,
            price: product.price,
            category: product.category,
            image: product.image,
            description: product.description,
            storage: product.storage,
            battery_health: product.battery_health,
            condition: product.condition,
            extra_images: product.extra_images,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    /// Main image first, then the extra images when the gallery is enabled
    pub gallery: Vec<String>,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        Self {
            product: detail.product.into(),
            gallery: detail.gallery,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CatalogPageResponse {
    /// Products on the requested page, in catalog order
    pub products: Vec<ProductResponse>,
    pub total_pages: u64,
    pub current_page: u64,
    /// Products matching the filters across all pages
    pub total_items: u64,
}

impl From<CatalogPage> for CatalogPageResponse {
    fn from(page: CatalogPage) -> Self {
        Self {
            products: page.products.into_iter().map(Into::into).collect(),
            total_pages: page.total_pages as u64,
            current_page: page.current_page as u64,
            total_items: page.total_items as u64,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ContactLinkResponse {
    /// Telegram deep link with the purchase message prefilled
    pub url: String,
}

#[derive(Debug, Clone, Object)]
pub struct CategoriesResponse {
    /// The storefront's fixed category menu
    pub menu: Vec<String>,
    /// `All` followed by the categories present in the catalog
    pub available: Vec<String>,
}

impl From<CategoryListing> for CategoriesResponse {
    fn from(listing: CategoryListing) -> Self {
        Self {
            menu: listing.menu,
            available: listing.available,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum BannerKindDto {
    #[oai(rename = "product")]
    Product,
    #[oai(rename = "external")]
    External,
}

impl From<BannerKind> for BannerKindDto {
    fn from(kind: BannerKind) -> Self {
        match kind {
            BannerKind::Product => BannerKindDto::Product,
            BannerKind::External => BannerKindDto::External,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct BannerResponse {
    /// Position of the banner, used to resolve its action
    pub index: u32,
    pub title: String,
    pub text: String,
    /// Background style token
    pub bg: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Product id or external URL, as text
    #[oai(skip_serializing_if_is_none)]
    pub link_to_product: Option<String>,
    #[oai(rename = "type")]
    pub kind: BannerKindDto,
}

impl BannerResponse {
    pub fn new(index: usize, banner: Banner) -> Self {
        Self {
            index: index as u32,
            title: banner.title,
            text: banner.text,
            bg: banner.background,
            image: banner.image,
            link_to_product: banner.link_to_product.map(|link| link.to_string()),
            kind: banner.kind.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum BannerActionKindDto {
    #[oai(rename = "none")]
    None,
    #[oai(rename = "open_external")]
    OpenExternal,
    #[oai(rename = "show_product")]
    ShowProduct,
}

#[derive(Debug, Clone, Object)]
pub struct BannerActionResponse {
    pub action: BannerActionKindDto,
    /// Set for `open_external`
    #[oai(skip_serializing_if_is_none)]
    pub url: Option<String>,
    /// Set for `show_product`
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
}

impl From<BannerAction> for BannerActionResponse {
    fn from(action: BannerAction) -> Self {
        match action {
            BannerAction::None => Self {
                action: BannerActionKindDto::None,
                url: None,
                product: None,
            },
            BannerAction::OpenExternal(url) => Self {
                action: BannerActionKindDto::OpenExternal,
                url: Some(url),
                product: None,
            },
            BannerAction::ShowProduct(product) => Self {
                action: BannerActionKindDto::ShowProduct,
                url: None,
                product: Some(product.into()),
            },
        }
    }
}
