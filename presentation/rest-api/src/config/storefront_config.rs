use std::env;
use std::num::NonZeroUsize;

use anyhow::{Context, anyhow, bail};

use business::domain::catalog::view::{
    CatalogViewConfig, DEFAULT_ITEMS_PER_PAGE, SearchResetPolicy,
};

const DEFAULT_DOCUMENT_STORE_URL: &str = "http://127.0.0.1:9000/products";
const DEFAULT_CONTACT_HANDLE: &str = "feliks_df";

/// Where the storefront catalog is fetched from at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSourceKind {
    /// A single JSON file with `products` and `banners`.
    Static,
    /// The admin-managed product collection. Carries no banners.
    DocumentStore,
}

impl std::str::FromStr for CatalogSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(CatalogSourceKind::Static),
            "document_store" => Ok(CatalogSourceKind::DocumentStore),
            _ => Err(format!("Invalid catalog source: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    pub source: CatalogSourceKind,
    /// Required when `source` is `Static`.
    pub catalog_url: Option<String>,
    pub document_store_url: String,
    pub view: CatalogViewConfig,
    pub contact_handle: String,
}

impl StorefrontConfig {
    /// Load storefront configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_SOURCE: `static` or `document_store` (default: "static")
    /// - CATALOG_URL: URL of the static catalog file
    /// - DOCUMENT_STORE_URL: product collection endpoint, without `.json`
    ///   (default: "http://127.0.0.1:9000/products")
    /// - ITEMS_PER_PAGE: page size (default: 6)
    /// - PAGINATION_ENABLED / GALLERY_ENABLED / BANNER_LINKING_ENABLED:
    ///   feature flags (default: true)
    /// - SEARCH_RESET_POLICY: `keep_page` or `reset_page` (default: "keep_page")
    /// - CONTACT_HANDLE: Telegram handle buyers are sent to
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let source = match read("CATALOG_SOURCE") {
            Some(raw) => raw.parse::<CatalogSourceKind>().map_err(|e| anyhow!(e))?,
            None => CatalogSourceKind::Static,
        };

        let catalog_url = read("CATALOG_URL");
        if source == CatalogSourceKind::Static && catalog_url.is_none() {
            bail!("CATALOG_URL must be set when CATALOG_SOURCE is static");
        }

        let items_per_page = match read("ITEMS_PER_PAGE") {
            Some(raw) => raw
                .parse::<NonZeroUsize>()
                .with_context(|| format!("ITEMS_PER_PAGE must be a positive integer, got {raw}"))?,
            None => DEFAULT_ITEMS_PER_PAGE,
        };

        let search_reset_policy = match read("SEARCH_RESET_POLICY") {
            Some(raw) => raw.parse::<SearchResetPolicy>().map_err(|e| anyhow!(e))?,
            None => SearchResetPolicy::default(),
        };

        let view = CatalogViewConfig {
            pagination_enabled: flag(read("PAGINATION_ENABLED"), "PAGINATION_ENABLED")?,
            gallery_enabled: flag(read("GALLERY_ENABLED"), "GALLERY_ENABLED")?,
            banner_linking_enabled: flag(read("BANNER_LINKING_ENABLED"), "BANNER_LINKING_ENABLED")?,
            items_per_page,
            search_reset_policy,
        };

        Ok(Self {
            source,
            catalog_url,
            document_store_url: read("DOCUMENT_STORE_URL")
                .unwrap_or_else(|| DEFAULT_DOCUMENT_STORE_URL.to_string()),
            view,
            contact_handle: read("CONTACT_HANDLE")
                .unwrap_or_else(|| DEFAULT_CONTACT_HANDLE.to_string()),
        })
    }
}

/// Feature flags default to on.
fn flag(raw: Option<String>, name: &str) -> anyhow::Result<bool> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(true),
        Some("true" | "1" | "yes" | "on") => Ok(true),
        Some("false" | "0" | "no" | "off") => Ok(false),
        Some(other) => bail!("{name} must be a boolean, got {other}"),
    }
}
