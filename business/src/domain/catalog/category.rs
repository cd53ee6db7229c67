use crate::domain::product::model::Product;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// The storefront's category menu, in display order.
pub const DEFAULT_CATEGORIES: [&str; 9] = [
    ALL_CATEGORIES,
    "iPhone",
    "New iPhone",
    "Accessories",
    "Macbook",
    "Headphones",
    "Game consoles",
    "Watches",
    "Beauty",
];

/// Distinct categories present in `products`, in first-appearance order,
/// preceded by [`ALL_CATEGORIES`]. Blank categories are skipped.
pub fn categories_in(products: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        let category = product.category.as_str();
        if category.trim().is_empty() || categories.iter().any(|c| c == category) {
            continue;
        }
        categories.push(category.to_string());
    }
    categories
}
