use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::{debug, info, warn};

use super::domain::{AnswerSheet, AnswerValue, QuestionId, SectionId, SessionId};
use super::error::AssessmentError;
use super::repository::{RepositoryError, SessionRecord, SessionRepository};
use super::scoring::{AssessmentResult, ScoringEngine, SectionResult};
use super::session::AssessmentSession;

/// Service composing the scoring engine with session storage.
///
/// Operations on one session run one at a time, so a step never persists a
/// record loaded before another step on the same session committed.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    session_locks: Mutex<HashMap<SessionId, Arc<Mutex<()>>>>,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("asmt-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self {
            repository,
            engine: Arc::new(engine),
            session_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Open a new session and store it.
    pub fn start(&self) -> Result<SessionRecord, AssessmentServiceError> {
        let now = Utc::now();
        let record = SessionRecord {
            session_id: next_session_id(),
            session: AssessmentSession::new(Arc::clone(&self.engine)),
            started_at: now,
            updated_at: now,
        };

        let stored = self.repository.insert(record)?;
        info!(session_id = %stored.session_id, "assessment session started");
        Ok(stored)
    }

    pub fn get(&self, session_id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(session_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn submit_answer(
        &self,
        session_id: &SessionId,
        question_id: &QuestionId,
        value: AnswerValue,
    ) -> Result<SessionRecord, AssessmentServiceError> {
        self.apply(session_id, "submit_answer", |session| {
            let stored = session.submit_answer(question_id, value)?;
            debug!(%session_id, question = %question_id, value = %stored, "answer recorded");
            Ok(())
        })
        .map(|(record, ())| record)
    }

    pub fn finalize_section(
        &self,
        session_id: &SessionId,
        section: SectionId,
    ) -> Result<SectionResult, AssessmentServiceError> {
        let (_, result) = self.apply(session_id, "finalize_section", |session| {
            session.finalize_section(section)
        })?;
        info!(%session_id, %section, overall = %result.overall, "section finalized");
        Ok(result)
    }

    pub fn compute_result(
        &self,
        session_id: &SessionId,
    ) -> Result<AssessmentResult, AssessmentServiceError> {
        let (_, result) = self.apply(session_id, "compute_result", |session| {
            session.compute_result()
        })?;
        info!(
            %session_id,
            overall = %result.overall,
            tier = result.tier.label(),
            "assessment result computed"
        );
        Ok(result)
    }

    pub fn restart(&self, session_id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        let (record, ()) = self.apply(session_id, "restart", |session| {
            session.restart();
            Ok(())
        })?;
        info!(%session_id, "assessment session restarted");
        Ok(record)
    }

    /// Stateless scoring of a complete answer map.
    pub fn score(&self, answers: &AnswerSheet) -> Result<AssessmentResult, AssessmentServiceError> {
        self.engine.evaluate(answers).map_err(|error| {
            warn!(%error, "stateless scoring rejected");
            AssessmentServiceError::from(error)
        })
    }

    /// Load a record, run one session operation, and persist the record on success.
    fn apply<T>(
        &self,
        session_id: &SessionId,
        operation: &'static str,
        step: impl FnOnce(&mut AssessmentSession) -> Result<T, AssessmentError>,
    ) -> Result<(SessionRecord, T), AssessmentServiceError> {
        let lock = self.session_lock(session_id)?;
        // The guard protects no data, so a poisoned lock is still usable.
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut record = self.get(session_id)?;

        let output = step(&mut record.session).map_err(|error| {
            warn!(%session_id, operation, %error, "assessment operation rejected");
            error
        })?;

        record.touch();
        self.repository.update(record.clone())?;
        Ok((record, output))
    }

    fn session_lock(&self, session_id: &SessionId) -> Result<Arc<Mutex<()>>, RepositoryError> {
        let mut locks = self.session_locks.lock().map_err(|_| {
            RepositoryError::Unavailable("session lock table poisoned".to_string())
        })?;
        Ok(Arc::clone(locks.entry(session_id.clone()).or_default()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
