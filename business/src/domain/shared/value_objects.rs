use serde::{Deserialize, Serialize};

/// Numeric product identifier, unique within a loaded catalog.
/// Banners reference products through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Opaque key under which the document store keeps a product.
/// Used to address admin reads and writes (`<endpoint>/<key>.json`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductKey(String);

impl ProductKey {
    /// Creates a new ProductKey from any type that can be converted into a String.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Keys end up in URL paths, so blank keys and path separators are rejected.
    pub fn is_valid(&self) -> bool {
        let key = self.0.trim();
        !key.is_empty() && !key.contains(['/', '.', '?', '#'])
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
