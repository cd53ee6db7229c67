use poem_openapi::Object;
use uuid::Uuid;

use business::domain::catalog::use_cases::sessions::SessionView;

use crate::api::catalog::dto::CatalogPageResponse;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: Uuid,
    pub search_term: String,
    pub selected_category: String,
    pub current_page: u64,
    /// False when the last page change was refused and the page stayed put
    pub accepted: bool,
    /// The page derived from the session's current view
    pub page: CatalogPageResponse,
}

impl From<SessionView> for SessionResponse {
    fn from(session: SessionView) -> Self {
        Self {
            id: session.id,
            search_term: session.view.search_term,
            selected_category: session.view.selected_category,
            current_page: session.view.current_page as u64,
            accepted: session.accepted,
            page: session.page.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SetSearchRequest {
    /// Raw search text, matched case-insensitively against product names
    pub term: String,
}

#[derive(Debug, Clone, Object)]
pub struct SelectCategoryRequest {
    /// Category name, or `All`
    pub category: String,
}

#[derive(Debug, Clone, Object)]
pub struct ChangePageRequest {
    /// 1-based page number
    pub page: u32,
}
