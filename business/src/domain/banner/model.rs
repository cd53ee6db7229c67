/// What a banner's `linkToProduct` field holds. Product banners carry a
/// numeric id; external banners carry a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Id(i64),
    Text(String),
}

impl LinkTarget {
    /// Mirrors the storefront's falsy check: `0` and blank text link nowhere.
    pub fn is_empty(&self) -> bool {
        match self {
            LinkTarget::Id(id) => *id == 0,
            LinkTarget::Text(text) => text.trim().is_empty(),
        }
    }
}

impl std::fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkTarget::Id(id) => write!(f, "{}", id),
            LinkTarget::Text(text) => write!(f, "{}", text.trim()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerKind {
    /// Links to a product of the catalog.
    #[default]
    Product,
    /// Links to an arbitrary URL.
    External,
}

impl std::fmt::Display for BannerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BannerKind::Product => write!(f, "product"),
            BannerKind::External => write!(f, "external"),
        }
    }
}

impl std::str::FromStr for BannerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(BannerKind::Product),
            "external" => Ok(BannerKind::External),
            _ => Err(format!("Invalid banner type: {}", s)),
        }
    }
}

/// A promotional tile shown next to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub title: String,
    pub text: String,
    /// Background style token, passed through to the client untouched.
    pub background: String,
    pub image: Option<String>,
    /// Weak reference: the target may not exist in the catalog.
    pub link_to_product: Option<LinkTarget>,
    pub kind: BannerKind,
}
