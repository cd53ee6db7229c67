use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    /// Read-only storefront browsing
    Catalog,
    /// Server-held browsing sessions
    Sessions,
    /// Product management in the document store
    Admin,
}
