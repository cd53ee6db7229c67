use super::errors::ProductError;
use crate::domain::shared::value_objects::{ProductId, ProductKey};

/// Image used when an admin saves a product without one.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/400x400?text=No+Image";

/// A catalog product as shown in the storefront.
///
/// Loaded once from the catalog source and never mutated afterwards.
/// Upstream data is not schema-validated, so `name` may be absent and
/// every descriptive field besides price/category/image is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: Option<String>,
    /// Whole currency units.
    pub price: u64,
    pub category: String,
    pub image: String,
    pub description: Option<String>,
    pub storage: Option<String>,
    pub battery_health: Option<String>,
    pub condition: Option<String>,
    pub extra_images: Vec<String>,
}

impl Product {
    /// Builds a product with every optional field absent.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: u64,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            price,
            category: category.into(),
            image: image.into(),
            description: None,
            storage: None,
            battery_health: None,
            condition: None,
            extra_images: Vec::new(),
        }
    }

    /// Name used in messages; products without one render as an empty string.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Admin-editable product fields, as written to the document store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFields {
    pub name: String,
    pub price: u64,
    pub image: String,
    pub category: String,
    pub description: String,
    pub storage: Option<String>,
    pub battery_health: Option<String>,
    pub condition: Option<String>,
    pub extra_images: Vec<String>,
}

pub struct NewProductProps {
    pub name: String,
    pub price: u64,
    pub image: Option<String>,
    pub category: String,
    pub description: Option<String>,
    pub storage: Option<String>,
    pub battery_health: Option<String>,
    pub condition: Option<String>,
    pub extra_images: Vec<String>,
}

impl ProductFields {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.category.trim().is_empty() {
            return Err(ProductError::CategoryEmpty);
        }

        let image = props
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

        Ok(Self {
            name: props.name.trim().to_string(),
            price: props.price,
            image,
            category: props.category,
            description: props.description.unwrap_or_default(),
            storage: non_blank(props.storage),
            battery_health: non_blank(props.battery_health),
            condition: non_blank(props.condition),
            extra_images: props
                .extra_images
                .into_iter()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A stored product together with the key the document store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub key: ProductKey,
    pub fields: ProductFields,
}
