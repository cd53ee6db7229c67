use crate::domain::product::model::Product;

use super::model::{Banner, BannerKind, LinkTarget};

/// What clicking a banner does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerAction {
    /// The banner is inert.
    None,
    OpenExternal(String),
    ShowProduct(Product),
}

/// Resolves a banner click against the catalog.
///
/// Never fails: a dangling product reference, a non-numeric product link
/// or disabled linking all resolve to [`BannerAction::None`].
pub fn resolve(banner: &Banner, products: &[Product], linking_enabled: bool) -> BannerAction {
    if !linking_enabled {
        return BannerAction::None;
    }

    let link = match &banner.link_to_product {
        Some(link) if !link.is_empty() => link,
        _ => return BannerAction::None,
    };

    match banner.kind {
        BannerKind::External => BannerAction::OpenExternal(link.to_string()),
        BannerKind::Product => match link {
            LinkTarget::Id(id) => products
                .iter()
                .find(|p| p.id.value() == *id)
                .cloned()
                .map(BannerAction::ShowProduct)
                .unwrap_or(BannerAction::None),
            LinkTarget::Text(_) => BannerAction::None,
        },
    }
}
