use serde::{Deserialize, Serialize};
use serde_json::Value;

use business::domain::product::model::{Product, ProductFields};
use business::domain::shared::value_objects::ProductId;

/// A product as stored in the document store or the static catalog file.
///
/// Nothing upstream validates this shape, so every field is optional and
/// the loosely typed ones (`id`, `price`) are kept as raw JSON until
/// conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_health: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_images: Option<Vec<String>>,
}

impl ProductDocument {
    /// Parses one raw document, logging and skipping the ones whose shape
    /// cannot be read at all.
    pub fn from_value(value: Value) -> Option<Self> {
        match serde_json::from_value::<ProductDocument>(value) {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable product document");
                None
            }
        }
    }

    /// Integer id carried by the document itself, if any.
    pub fn explicit_id(&self) -> Option<i64> {
        self.id.as_ref().and_then(Value::as_i64)
    }

    /// Price in whole units. Missing, negative or non-numeric prices read as 0.
    pub fn price_units(&self) -> u64 {
        match &self.price {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse::<u64>().unwrap_or(0),
            _ => 0,
        }
    }

    pub fn into_domain(self, id: ProductId) -> Product {
        let price = self.price_units();
        Product {
            id,
            name: self.name,
            price,
            category: self.category.unwrap_or_default(),
            image: self.image.map(|i| i.trim().to_string()).unwrap_or_default(),
            description: self.description,
            storage: self.storage,
            battery_health: self.battery_health,
            condition: self.condition,
            extra_images: self
                .extra_images
                .unwrap_or_default()
                .into_iter()
                .map(|url| url.trim().to_string())
                .collect(),
        }
    }

    pub fn into_fields(self) -> ProductFields {
        let price = self.price_units();
        ProductFields {
            name: self.name.unwrap_or_default(),
            price,
            image: self.image.map(|i| i.trim().to_string()).unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            storage: self.storage,
            battery_health: self.battery_health,
            condition: self.condition,
            extra_images: self.extra_images.unwrap_or_default(),
        }
    }
}

impl From<&ProductFields> for ProductDocument {
    fn from(fields: &ProductFields) -> Self {
        Self {
            id: None,
            name: Some(fields.name.clone()),
            price: Some(Value::from(fields.price)),
            category: Some(fields.category.clone()),
            image: Some(fields.image.clone()),
            description: Some(fields.description.clone()),
            storage: fields.storage.clone(),
            battery_health: fields.battery_health.clone(),
            condition: fields.condition.clone(),
            extra_images: (!fields.extra_images.is_empty()).then(|| fields.extra_images.clone()),
        }
    }
}

/// Assigns catalog ids to documents, keeping their order.
///
/// A document's own integer `id` wins, then its store key read as an
/// integer. Documents with neither get ids counting up from the highest
/// one seen, so generated ids never collide with explicit ones.
pub fn project_documents(entries: Vec<(Option<String>, ProductDocument)>) -> Vec<Product> {
    let resolved: Vec<Option<i64>> = entries
        .iter()
        .map(|(key, document)| {
            document
                .explicit_id()
                .or_else(|| key.as_deref().and_then(|k| k.trim().parse::<i64>().ok()))
        })
        .collect();

    let mut next_id = resolved.iter().flatten().copied().max().unwrap_or(0).max(0);

    entries
        .into_iter()
        .zip(resolved)
        .map(|((_, document), id)| {
            let id = id.unwrap_or_else(|| {
                next_id += 1;
                next_id
            });
            document.into_domain(ProductId::new(id))
        })
        .collect()
}
