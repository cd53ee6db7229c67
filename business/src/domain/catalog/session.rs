use std::sync::Arc;

use super::model::Catalog;
use super::view::{self, CatalogPage, CatalogViewConfig, ViewState};

/// One shopper's browsing context over a loaded catalog.
///
/// The catalog is shared read-only; the view state belongs to this session
/// alone and every mutation goes through the methods below.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    catalog: Arc<Catalog>,
    config: CatalogViewConfig,
    view: ViewState,
}

impl CatalogSession {
    pub fn new(catalog: Arc<Catalog>, config: CatalogViewConfig) -> Self {
        Self {
            catalog,
            config,
            view: ViewState::default(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view
            .set_search_term(term, self.config.search_reset_policy);
    }

    pub fn select_category(&mut self, category: impl Into<String>) {
        self.view.select_category(category);
    }

    /// Total pages for the current filters.
    pub fn total_pages(&self) -> usize {
        let filtered = view::filter(self.catalog.products(), &self.view);
        view::total_pages(filtered.len(), self.config.page_size())
    }

    /// Returns whether the page was accepted.
    pub fn change_page(&mut self, requested: usize) -> bool {
        let total = self.total_pages();
        self.view.change_page(requested, total)
    }

    pub fn next_page(&mut self) -> bool {
        self.change_page(self.view.current_page.saturating_add(1))
    }

    pub fn previous_page(&mut self) -> bool {
        self.change_page(self.view.current_page.saturating_sub(1))
    }

    pub fn current_page(&self) -> CatalogPage {
        view::derive_page(self.catalog.products(), &self.view, &self.config)
    }
}
