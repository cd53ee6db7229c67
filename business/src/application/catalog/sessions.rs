use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Catalog;
use crate::domain::catalog::session::CatalogSession;
use crate::domain::catalog::use_cases::sessions::{
    CatalogSessionsUseCase, SessionCommand, SessionView,
};
use crate::domain::catalog::view::CatalogViewConfig;
use crate::domain::logger::Logger;

/// Bounds on how many sessions are kept and for how long.
#[derive(Debug, Clone, Copy)]
pub struct SessionLimits {
    /// A session untouched for this long is dropped.
    pub idle_timeout: Duration,
    /// Opening past this count drops the least recently used session.
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(30 * 60),
            max_sessions: 10_000,
        }
    }
}

struct SessionEntry {
    session: CatalogSession,
    last_seen: Instant,
}

/// In-memory registry of browsing sessions over one loaded catalog.
pub struct CatalogSessionsUseCaseImpl {
    catalog: Arc<Catalog>,
    config: CatalogViewConfig,
    limits: SessionLimits,
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    logger: Arc<dyn Logger>,
}

impl CatalogSessionsUseCaseImpl {
    pub fn new(catalog: Arc<Catalog>, config: CatalogViewConfig, logger: Arc<dyn Logger>) -> Self {
        Self::with_limits(catalog, config, SessionLimits::default(), logger)
    }

    pub fn with_limits(
        catalog: Arc<Catalog>,
        config: CatalogViewConfig,
        limits: SessionLimits,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            catalog,
            config,
            limits,
            sessions: RwLock::new(HashMap::new()),
            logger,
        }
    }

    fn snapshot(id: Uuid, session: &CatalogSession, accepted: bool) -> SessionView {
        SessionView {
            id,
            view: session.view().clone(),
            page: session.current_page(),
            accepted,
        }
    }

    fn is_idle(&self, entry: &SessionEntry, now: Instant) -> bool {
        now.duration_since(entry.last_seen) >= self.limits.idle_timeout
    }

    /// Drops idle sessions, then the least recently used ones until one more fits.
    fn make_room(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, entry| !self.is_idle(entry, now));

        while !sessions.is_empty() && sessions.len() >= self.limits.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            self.logger.debug(&format!("Sessions evicted: {}", evicted));
        }
    }

    /// Looks up a live session and marks it as used.
    fn touch<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, SessionEntry>,
        id: Uuid,
    ) -> Result<&'a mut CatalogSession, CatalogError> {
        let now = Instant::now();
        if sessions.get(&id).is_some_and(|entry| self.is_idle(entry, now)) {
            sessions.remove(&id);
            self.logger.debug(&format!("Session expired: {}", id));
        }

        let entry = sessions.get_mut(&id).ok_or(CatalogError::SessionNotFound)?;
        entry.last_seen = now;
        Ok(&mut entry.session)
    }
}

#[async_trait]
impl CatalogSessionsUseCase for CatalogSessionsUseCaseImpl {
    async fn open(&self) -> SessionView {
        let id = Uuid::new_v4();
        let session = CatalogSession::new(self.catalog.clone(), self.config.clone());
        let view = Self::snapshot(id, &session, true);

        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        self.make_room(&mut sessions, now);
        sessions.insert(
            id,
            SessionEntry {
                session,
                last_seen: now,
            },
        );
        drop(sessions);

        self.logger.info(&format!("Session opened: {}", id));
        view
    }

    async fn get(&self, id: Uuid) -> Result<SessionView, CatalogError> {
        let mut sessions = self.sessions.write().await;
        let session = self.touch(&mut sessions, id)?;
        Ok(Self::snapshot(id, session, true))
    }

    async fn apply(&self, id: Uuid, command: SessionCommand) -> Result<SessionView, CatalogError> {
        let mut sessions = self.sessions.write().await;
        let session = self.touch(&mut sessions, id)?;

        let accepted = match command {
            SessionCommand::SetSearchTerm(term) => {
                session.set_search_term(term);
                true
            }
            SessionCommand::SelectCategory(category) => {
                session.select_category(category);
                true
            }
            SessionCommand::ChangePage(page) => session.change_page(page),
            SessionCommand::NextPage => session.next_page(),
            SessionCommand::PreviousPage => session.previous_page(),
        };

        if !accepted {
            self.logger.debug(&format!(
                "Session {}: page change rejected, staying on page {}",
                id,
                session.view().current_page
            ));
        }
        Ok(Self::snapshot(id, session, accepted))
    }

    async fn close(&self, id: Uuid) -> Result<(), CatalogError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or(CatalogError::SessionNotFound)?;
        self.logger.info(&format!("Session closed: {}", id));
        Ok(())
    }
}
