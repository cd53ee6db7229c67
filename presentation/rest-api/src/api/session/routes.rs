use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::catalog::use_cases::sessions::{CatalogSessionsUseCase, SessionCommand};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::session::dto::{
    ChangePageRequest, SelectCategoryRequest, SessionResponse, SetSearchRequest,
};
use crate::api::tags::ApiTags;

pub struct SessionApi {
    sessions_use_case: Arc<dyn CatalogSessionsUseCase>,
}

impl SessionApi {
    pub fn new(sessions_use_case: Arc<dyn CatalogSessionsUseCase>) -> Self {
        Self { sessions_use_case }
    }

    async fn apply(&self, id: Uuid, command: SessionCommand) -> SessionCommandResponse {
        match self.sessions_use_case.apply(id, command).await {
            Ok(session) => SessionCommandResponse::Ok(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SessionCommandResponse::NotFound(json)
            }
        }
    }
}

/// Browsing sessions API
///
/// A session keeps search text, selected category and current page on the
/// server, so clients can drive the storefront with one call per action.
#[OpenApi]
impl SessionApi {
    /// Open a session
    ///
    /// Starts at page 1 of all products with an empty search.
    #[oai(path = "/sessions", method = "post", tag = "ApiTags::Sessions")]
    async fn open_session(&self) -> OpenSessionResponse {
        let session = self.sessions_use_case.open().await;
        OpenSessionResponse::Created(Json(session.into()))
    }

    /// Get a session and its current page
    #[oai(path = "/sessions/:id", method = "get", tag = "ApiTags::Sessions")]
    async fn get_session(&self, id: Path<Uuid>) -> SessionCommandResponse {
        match self.sessions_use_case.get(id.0).await {
            Ok(session) => SessionCommandResponse::Ok(Json(session.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SessionCommandResponse::NotFound(json)
            }
        }
    }

    /// Set the search text
    #[oai(path = "/sessions/:id/search", method = "put", tag = "ApiTags::Sessions")]
    async fn set_search(
        &self,
        id: Path<Uuid>,
        body: Json<SetSearchRequest>,
    ) -> SessionCommandResponse {
        self.apply(id.0, SessionCommand::SetSearchTerm(body.0.term))
            .await
    }

    /// Select a category
    ///
    /// Always returns to page 1.
    #[oai(path = "/sessions/:id/category", method = "put", tag = "ApiTags::Sessions")]
    async fn select_category(
        &self,
        id: Path<Uuid>,
        body: Json<SelectCategoryRequest>,
    ) -> SessionCommandResponse {
        self.apply(id.0, SessionCommand::SelectCategory(body.0.category))
            .await
    }

    /// Go to a page
    ///
    /// Pages outside `1..=totalPages` are refused: the session keeps its page
    /// and the response has `accepted: false`.
    #[oai(path = "/sessions/:id/page", method = "put", tag = "ApiTags::Sessions")]
    async fn change_page(
        &self,
        id: Path<Uuid>,
        body: Json<ChangePageRequest>,
    ) -> SessionCommandResponse {
        self.apply(id.0, SessionCommand::ChangePage(body.0.page as usize))
            .await
    }

    /// Go to the next page
    #[oai(path = "/sessions/:id/next", method = "post", tag = "ApiTags::Sessions")]
    async fn next_page(&self, id: Path<Uuid>) -> SessionCommandResponse {
        self.apply(id.0, SessionCommand::NextPage).await
    }

    /// Go to the previous page
    #[oai(path = "/sessions/:id/previous", method = "post", tag = "ApiTags::Sessions")]
    async fn previous_page(&self, id: Path<Uuid>) -> SessionCommandResponse {
        self.apply(id.0, SessionCommand::PreviousPage).await
    }

    /// Close a session
    #[oai(path = "/sessions/:id", method = "delete", tag = "ApiTags::Sessions")]
    async fn close_session(&self, id: Path<Uuid>) -> CloseSessionResponse {
        match self.sessions_use_case.close(id.0).await {
            Ok(()) => CloseSessionResponse::NoContent,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CloseSessionResponse::NotFound(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum OpenSessionResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SessionCommandResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CloseSessionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}
