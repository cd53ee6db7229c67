use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::view::{CatalogPage, ViewState};

/// Snapshot of a session after an operation.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub id: Uuid,
    pub view: ViewState,
    pub page: CatalogPage,
    /// False when a page change was rejected as out of range.
    pub accepted: bool,
}

pub enum SessionCommand {
    SetSearchTerm(String),
    SelectCategory(String),
    ChangePage(usize),
    NextPage,
    PreviousPage,
}

#[async_trait]
pub trait CatalogSessionsUseCase: Send + Sync {
    async fn open(&self) -> SessionView;
    async fn get(&self, id: Uuid) -> Result<SessionView, CatalogError>;
    async fn apply(&self, id: Uuid, command: SessionCommand) -> Result<SessionView, CatalogError>;
    async fn close(&self, id: Uuid) -> Result<(), CatalogError>;
}
