use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::catalog::CatalogView;
use super::domain::{AnswerSheet, AnswerValue, QuestionId, SectionId, SessionId};
use super::error::AssessmentError;
use super::repository::{RepositoryError, SessionRepository};
use super::service::{AssessmentService, AssessmentServiceError};

/// Body of an answer submission: `{"value": 4}` or `{"value": "32"}`.
#[derive(Debug, Deserialize)]
pub struct AnswerSubmission {
    pub value: AnswerValue,
}

/// Router builder exposing the catalog, stateless scoring, and session endpoints.
pub fn assessment_router<R>(service: Arc<AssessmentService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/assessment/catalog", get(catalog_handler::<R>))
        .route("/api/v1/assessment/score", post(score_handler::<R>))
        .route("/api/v1/assessments", post(start_handler::<R>))
        .route(
            "/api/v1/assessments/:session_id",
            get(status_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/answers/:question_id",
            put(answer_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/sections/:section/finalize",
            post(finalize_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/result",
            post(result_handler::<R>),
        )
        .route(
            "/api/v1/assessments/:session_id/restart",
            post(restart_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn catalog_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let view = CatalogView::from_catalog(service.engine().catalog());
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn score_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Json(answers): Json<AnswerSheet>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.score(&answers) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn start_handler<R>(State(service): State<Arc<AssessmentService<R>>>) -> Response
where
    R: SessionRepository + 'static,
{
    match service.start() {
        Ok(record) => (StatusCode::CREATED, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path((session_id, question_id)): Path<(String, String)>,
    Json(submission): Json<AnswerSubmission>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let session_id = SessionId(session_id);
    let question_id = QuestionId(question_id);
    match service.submit_answer(&session_id, &question_id, submission.value) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn finalize_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path((session_id, section)): Path<(String, String)>,
) -> Response
where
    R: SessionRepository + 'static,
{
    let section: SectionId = match section.parse() {
        Ok(section) => section,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::NOT_FOUND, Json(payload)).into_response();
        }
    };

    match service.finalize_section(&SessionId(session_id), section) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn result_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.compute_result(&SessionId(session_id)) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn restart_handler<R>(
    State(service): State<Arc<AssessmentService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.restart(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(error) => error_response(error),
    }
}

/// Single status and body mapping for assessment and session store failures.
pub(crate) fn error_response(error: AssessmentServiceError) -> Response {
    let message = error.to_string();
    let (status, payload) = match error {
        AssessmentServiceError::Assessment(AssessmentError::InvalidAnswer { question, .. }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "error": message, "question": question }),
        ),
        AssessmentServiceError::Assessment(AssessmentError::IncompleteSection {
            section,
            missing,
        }) => (
            StatusCode::CONFLICT,
            json!({ "error": message, "section": section, "missing": missing }),
        ),
        AssessmentServiceError::Assessment(AssessmentError::IncompleteAssessment { pending }) => (
            StatusCode::CONFLICT,
            json!({ "error": message, "pending": pending }),
        ),
        AssessmentServiceError::Assessment(
            AssessmentError::SectionFinalized(_) | AssessmentError::SectionOutOfOrder { .. },
        ) => (StatusCode::CONFLICT, json!({ "error": message })),
        AssessmentServiceError::Repository(RepositoryError::NotFound) => (
            StatusCode::NOT_FOUND,
            json!({ "error": "assessment session not found" }),
        ),
        AssessmentServiceError::Repository(RepositoryError::Conflict) => (
            StatusCode::CONFLICT,
            json!({ "error": "assessment session already exists" }),
        ),
        AssessmentServiceError::Assessment(AssessmentError::Configuration(_))
        | AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": message }),
        ),
    };
    (status, Json(payload)).into_response()
}
