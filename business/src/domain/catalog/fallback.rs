use crate::domain::product::model::Product;

use super::model::CatalogSnapshot;

/// Fixed catalog served when the startup fetch fails. Has no banners.
pub fn fallback_catalog() -> CatalogSnapshot {
    CatalogSnapshot {
        products: vec![
            Product {
                description: Some("The perfect balance of price and quality".to_string()),
                storage: Some("128 GB".to_string()),
                battery_health: Some("88%".to_string()),
                condition: Some("Perfect".to_string()),
                ..Product::new(
                    1,
                    "iPhone 14 Pro Max",
                    60990,
                    "Phones",
                    "https://placehold.co/400x400?text=iPhone+14+Pro+Max",
                )
            },
            Product {
                description: Some("A light and powerful Apple laptop on the M3 chip".to_string()),
                storage: Some("1 TB SSD".to_string()),
                battery_health: Some("100%".to_string()),
                condition: Some("New".to_string()),
                ..Product::new(
                    2,
                    "MacBook Air M3",
                    119990,
                    "Laptops",
                    "https://placehold.co/400x400?text=MacBook+Air+M3",
                )
            },
        ],
        banners: vec![],
    }
}
