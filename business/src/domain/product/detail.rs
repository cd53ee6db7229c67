use super::model::Product;

/// A product opened in the detail view, with the images its gallery shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub product: Product,
    pub gallery: Vec<String>,
}

impl ProductDetail {
    /// The main image always comes first. Extra images follow only when the
    /// gallery is enabled; blank entries are skipped.
    pub fn new(product: Product, gallery_enabled: bool) -> Self {
        let mut gallery = Vec::with_capacity(1 + product.extra_images.len());
        let main = product.image.trim();
        if !main.is_empty() {
            gallery.push(main.to_string());
        }

        if gallery_enabled {
            gallery.extend(
                product
                    .extra_images
                    .iter()
                    .map(|url| url.trim())
                    .filter(|url| !url.is_empty())
                    .map(str::to_string),
            );
        }

        Self { product, gallery }
    }
}
