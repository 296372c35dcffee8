use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Percentage, SectionId, SessionId};
use super::scoring::ReadinessTier;
use super::session::{AssessmentSession, AssessmentStage, SectionProgress};

/// Repository record wrapping one respondent's session with bookkeeping timestamps.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub session_id: SessionId,
    pub session: AssessmentSession,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn status_view(&self) -> SessionStatusView {
        let result = self.session.result();
        SessionStatusView {
            session_id: self.session_id.clone(),
            stage: self.session.stage(),
            active_section: self.session.active_section(),
            progress: self.session.progress(),
            overall: result.map(|result| result.overall),
            tier: result.map(|result| result.tier),
            started_at: self.started_at,
            updated_at: self.updated_at,
        }
    }
}

/// Storage abstraction so the service can be exercised without a backing store.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Progress snapshot exposed to API callers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusView {
    pub session_id: SessionId,
    pub stage: AssessmentStage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_section: Option<SectionId>,
    pub progress: Vec<SectionProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<Percentage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<ReadinessTier>,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
