use serde::Deserialize;
use serde_json::Value;

use business::domain::banner::model::{Banner, BannerKind, LinkTarget};
use business::domain::catalog::model::CatalogSnapshot;

use crate::product::entity::{ProductDocument, project_documents};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub link_to_product: Option<Value>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl BannerDocument {
    pub fn into_domain(self) -> Banner {
        let link_to_product = match self.link_to_product {
            Some(Value::Number(n)) => n.as_i64().map(LinkTarget::Id),
            Some(Value::String(s)) => Some(LinkTarget::Text(s)),
            _ => None,
        };

        // Anything but "external" links to a product
        let kind = self
            .kind
            .as_deref()
            .and_then(|k| k.trim().parse::<BannerKind>().ok())
            .unwrap_or_default();

        Banner {
            title: self.title.unwrap_or_default(),
            text: self.text.unwrap_or_default(),
            background: self.bg.unwrap_or_default(),
            image: self.image.filter(|i| !i.trim().is_empty()),
            link_to_product,
            kind,
        }
    }
}

/// The static catalog file: `{"products": [...], "banners": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub products: Option<Vec<Value>>,
    #[serde(default)]
    pub banners: Option<Vec<Value>>,
}

impl CatalogDocument {
    pub fn into_snapshot(self) -> CatalogSnapshot {
        let products = project_documents(
            self.products
                .unwrap_or_default()
                .into_iter()
                .filter_map(ProductDocument::from_value)
                .map(|document| (None, document))
                .collect(),
        );

        let banners = self
            .banners
            .unwrap_or_default()
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<BannerDocument>(value) {
                Ok(document) => Some(document.into_domain()),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable banner document");
                    None
                }
            })
            .collect();

        CatalogSnapshot { products, banners }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(value: Value) -> CatalogSnapshot {
        serde_json::from_value::<CatalogDocument>(value)
            .unwrap()
            .into_snapshot()
    }

    #[test]
    fn should_default_missing_arrays_to_empty() {
        let snapshot = catalog(json!({}));

        assert!(snapshot.products.is_empty());
        assert!(snapshot.banners.is_empty());
    }

    #[test]
    fn should_read_products_and_banners_in_order() {
        let snapshot = catalog(json!({
            "products": [
                {"id": 1, "name": "iPhone 15", "price": 79990, "category": "New iPhone"},
                {"id": 2, "name": "AirPods Pro 2", "price": 19990, "category": "Headphones"}
            ],
            "banners": [
                {"title": "Trade-in", "text": "Bring your old phone", "bg": "gradient-blue", "linkToProduct": 2},
                {"title": "Channel", "text": "News", "bg": "dark", "type": "external", "linkToProduct": " https://t.me/shop "}
            ]
        }));

        let names: Vec<_> = snapshot
            .products
            .iter()
            .map(|p| p.name.clone().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["iPhone 15", "AirPods Pro 2"]);

        assert_eq!(snapshot.banners[0].kind, BannerKind::Product);
        assert_eq!(snapshot.banners[0].link_to_product, Some(LinkTarget::Id(2)));
        assert_eq!(snapshot.banners[0].background, "gradient-blue");
        assert_eq!(snapshot.banners[1].kind, BannerKind::External);
        assert_eq!(
            snapshot.banners[1].link_to_product,
            Some(LinkTarget::Text(" https://t.me/shop ".to_string()))
        );
    }

    #[test]
    fn should_treat_unknown_banner_type_as_product_link() {
        let banner = serde_json::from_value::<BannerDocument>(json!({"type": "promo", "linkToProduct": 3}))
            .unwrap()
            .into_domain();

        assert_eq!(banner.kind, BannerKind::Product);
        assert_eq!(banner.image, None);
    }

    #[test]
    fn should_drop_unsupported_link_values() {
        let banner = serde_json::from_value::<BannerDocument>(json!({"linkToProduct": true}))
            .unwrap()
            .into_domain();

        assert_eq!(banner.link_to_product, None);
    }

    #[test]
    fn should_skip_broken_entries_and_keep_the_rest() {
        let snapshot = catalog(json!({
            "products": [
                {"name": ["not", "a", "string"]},
                {"name": "Apple Watch SE", "price": "24990"}
            ],
            "banners": [{"title": 5}]
        }));

        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].price, 24990);
        assert_eq!(snapshot.products[0].id.value(), 1);
        assert!(snapshot.banners.is_empty());
    }
}
