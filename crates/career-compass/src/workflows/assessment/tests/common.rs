use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::domain::{
    AnswerSheet, AnswerValue, Modality, Question, SectionId, SessionId,
};
use crate::workflows::assessment::repository::{
    RepositoryError, SessionRecord, SessionRepository,
};
use crate::workflows::assessment::{assessment_router, AssessmentService, ScoringEngine};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

/// Answer value giving every rating question `rating` and every choice question
/// its correct (or a wrong) option.
pub(super) fn answer_for(question: &Question, rating: u8, correct: bool) -> AnswerValue {
    match &question.modality {
        Modality::RatingScale { .. } => AnswerValue::Rating(rating),
        Modality::SingleChoice { options } => {
            let option = options
                .iter()
                .find(|option| option.correct == correct)
                .expect("catalog declares matching option");
            AnswerValue::Choice(option.value.clone())
        }
    }
}

pub(super) fn section_answers(section: SectionId, rating: u8, correct: bool) -> AnswerSheet {
    engine()
        .catalog()
        .section_questions(section)
        .into_iter()
        .map(|question| (question.id.clone(), answer_for(question, rating, correct)))
        .collect()
}

/// Complete answer map for the standard catalog.
///
/// Psychometric and WISCAR sections score `rating * 20`; technical scores 100
/// when `correct` and 0 otherwise.
pub(super) fn uniform_answers(rating: u8, correct: bool) -> AnswerSheet {
    engine()
        .catalog()
        .questions()
        .iter()
        .map(|question| (question.id.clone(), answer_for(question, rating, correct)))
        .collect()
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), engine());
    (service, repository)
}

/// Walk a fresh session through all three sections.
pub(super) fn complete_session(
    service: &AssessmentService<MemoryRepository>,
    rating: u8,
    correct: bool,
) -> SessionId {
    let record = service.start().expect("session starts");
    for section in SectionId::ALL {
        for (question, value) in section_answers(section, rating, correct).iter() {
            service
                .submit_answer(&record.session_id, question, value.clone())
                .expect("answer accepted");
        }
        service
            .finalize_section(&record.session_id, section)
            .expect("section finalizes");
    }
    record.session_id
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.session_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Shares storage with a [`MemoryRepository`] but pauses on every fetch, widening
/// the window between loading a session and writing it back.
pub(super) struct SlowFetchRepository {
    pub(super) inner: MemoryRepository,
    pub(super) pause: Duration,
}

impl SessionRepository for SlowFetchRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        self.inner.insert(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        self.inner.update(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let record = self.inner.fetch(id)?;
        thread::sleep(self.pause);
        Ok(record)
    }
}

pub(super) struct ConflictRepository;

impl SessionRepository for ConflictRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn router_with_service(service: AssessmentService<MemoryRepository>) -> axum::Router {
    assessment_router(Arc::new(service))
}

pub(super) fn json_request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
            .expect("request builds"),
        None => builder.body(Body::empty()).expect("request builds"),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
