use chrono::{DateTime, Utc};

use crate::domain::banner::model::Banner;
use crate::domain::product::model::Product;
use crate::domain::shared::value_objects::ProductId;

/// Raw result of a catalog fetch, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub banners: Vec<Banner>,
}

/// Where the loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogOrigin {
    Remote,
    Fallback,
}

impl std::fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogOrigin::Remote => write!(f, "remote"),
            CatalogOrigin::Fallback => write!(f, "fallback"),
        }
    }
}

/// The catalog a storefront session browses.
///
/// Built once when the startup fetch settles and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    banners: Vec<Banner>,
    origin: CatalogOrigin,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(snapshot: CatalogSnapshot, origin: CatalogOrigin) -> Self {
        Self {
            products: snapshot.products,
            banners: snapshot.banners,
            origin,
            loaded_at: Utc::now(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn banners(&self) -> &[Banner] {
        &self.banners
    }

    pub fn origin(&self) -> CatalogOrigin {
        self.origin
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// First product carrying `id`, in source order.
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn banner(&self, index: usize) -> Option<&Banner> {
        self.banners.get(index)
    }
}
