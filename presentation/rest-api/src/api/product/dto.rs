use poem_openapi::Object;

use business::domain::product::model::ProductRecord;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Price in whole rubles
    pub price: u64,
    /// Main image URL, a placeholder is used when blank
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    /// Category (cannot be empty)
    pub category: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// e.g. "256 GB"
    #[oai(skip_serializing_if_is_none)]
    pub storage: Option<String>,
    /// e.g. "89%"
    #[oai(skip_serializing_if_is_none)]
    pub battery_health: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub condition: Option<String>,
    #[oai(default)]
    pub extra_images: Vec<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AdminProductResponse {
    /// Document store key
    pub key: String,
    pub name: String,
    pub price: u64,
    pub image: String,
    pub category: String,
    pub description: String,
    #[oai(skip_serializing_if_is_none)]
    pub storage: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub battery_health: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub condition: Option<String>,
    pub extra_images: Vec<String>,
}

impl From<ProductRecord> for AdminProductResponse {
    fn from(record: ProductRecord) -> Self {
        let fields = record.fields;
        Self {
            key: record.key.to_string(),
            name: fields.name,
            price: fields.price,
            image: fields.image,
            category: fields.category,
            description: fields.description,
            storage: fields.storage,
            battery_health: fields.battery_health,
            condition: fields.condition,
            extra_images: fields.extra_images,
        }
    }
}
