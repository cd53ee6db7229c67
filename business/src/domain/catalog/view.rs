//! Derivation of the visible catalog page from the full product list and
//! the user's current view state.
//!
//! Everything here is pure: identical inputs always produce identical
//! pages, and no input is ever an error. An empty match set is just an
//! empty page.

use std::num::NonZeroUsize;

use crate::domain::product::model::Product;

use super::category::ALL_CATEGORIES;

pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => unreachable!(),
};

/// Whether editing the search text sends the user back to page 1.
/// Selecting a category always does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchResetPolicy {
    /// The page survives search edits (historical storefront behavior).
    #[default]
    KeepPage,
    ResetPage,
}

impl std::fmt::Display for SearchResetPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResetPolicy::KeepPage => write!(f, "keep_page"),
            SearchResetPolicy::ResetPage => write!(f, "reset_page"),
        }
    }
}

impl std::str::FromStr for SearchResetPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep_page" => Ok(SearchResetPolicy::KeepPage),
            "reset_page" => Ok(SearchResetPolicy::ResetPage),
            _ => Err(format!("Invalid search reset policy: {}", s)),
        }
    }
}

/// Optional storefront features, one flag per historical variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewConfig {
    pub pagination_enabled: bool,
    pub gallery_enabled: bool,
    pub banner_linking_enabled: bool,
    pub items_per_page: NonZeroUsize,
    pub search_reset_policy: SearchResetPolicy,
}

impl Default for CatalogViewConfig {
    fn default() -> Self {
        Self {
            pagination_enabled: true,
            gallery_enabled: true,
            banner_linking_enabled: true,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            search_reset_policy: SearchResetPolicy::default(),
        }
    }
}

impl CatalogViewConfig {
    /// Page size, or `None` when everything fits on a single page.
    pub fn page_size(&self) -> Option<NonZeroUsize> {
        self.pagination_enabled.then_some(self.items_per_page)
    }
}

/// User-driven filter and pagination context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub selected_category: String,
    /// 1-based.
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            current_page: 1,
        }
    }
}

impl ViewState {
    pub fn set_search_term(&mut self, term: impl Into<String>, policy: SearchResetPolicy) {
        self.search_term = term.into();
        if policy == SearchResetPolicy::ResetPage {
            self.current_page = 1;
        }
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.current_page = 1;
    }

    /// Moves to `requested` if it lies within `1..=total_pages`.
    /// Returns whether the page was accepted; out-of-range requests leave
    /// the state untouched.
    pub fn change_page(&mut self, requested: usize, total_pages: usize) -> bool {
        if requested < 1 || requested > total_pages {
            return false;
        }
        self.current_page = requested;
        true
    }
}

/// One derived page of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub products: Vec<Product>,
    /// Number of products matching the filters, across all pages.
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
}

/// Exact, case-sensitive match unless `category` is [`ALL_CATEGORIES`].
pub fn matches_category(product: &Product, category: &str) -> bool {
    category == ALL_CATEGORIES || product.category == category
}

/// Case-insensitive substring match on the name. Nameless products only
/// match the empty search.
pub fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    match &product.name {
        Some(name) => name.to_lowercase().contains(&term.to_lowercase()),
        None => false,
    }
}

/// Products passing both predicates, in source order.
pub fn filter<'a>(products: &'a [Product], view: &ViewState) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_category(p, &view.selected_category))
        .filter(|p| matches_search(p, &view.search_term))
        .collect()
}

/// Page count for `filtered_len` items, never below 1 so an empty result
/// still reads "page 1 of 1".
pub fn total_pages(filtered_len: usize, page_size: Option<NonZeroUsize>) -> usize {
    match page_size {
        Some(size) => filtered_len.div_ceil(size.get()).max(1),
        None => 1,
    }
}

/// Half-open slice `[(page-1)*size, page*size)` of `filtered`, clamped to
/// its length. Without a page size the whole slice is returned.
pub fn paginate<T>(filtered: &[T], page: usize, page_size: Option<NonZeroUsize>) -> &[T] {
    let Some(size) = page_size else {
        return filtered;
    };
    if page == 0 {
        return &[];
    }

    let start = (page - 1).saturating_mul(size.get());
    if start >= filtered.len() {
        return &[];
    }
    let end = start.saturating_add(size.get()).min(filtered.len());
    &filtered[start..end]
}

/// Runs [`filter`] then [`paginate`] for the given view.
pub fn derive_page(products: &[Product], view: &ViewState, config: &CatalogViewConfig) -> CatalogPage {
    let page_size = config.page_size();
    let filtered = filter(products, view);

    CatalogPage {
        products: paginate(&filtered, view.current_page, page_size)
            .iter()
            .map(|p| (*p).clone())
            .collect(),
        total_items: filtered.len(),
        total_pages: total_pages(filtered.len(), page_size),
        current_page: view.current_page,
    }
}
