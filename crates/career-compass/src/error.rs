use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::assessment::router::error_response;
use crate::workflows::assessment::{
    AssessmentError, AssessmentServiceError, CatalogError, RepositoryError,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Server(axum::Error),
    Catalog(CatalogError),
    Assessment(AssessmentError),
    Repository(RepositoryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid JSON: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Assessment(err) => write!(f, "assessment error: {}", err),
            AppError::Repository(err) => write!(f, "session store error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Assessment(err) => Some(err),
            AppError::Repository(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Assessment(err) => error_response(AssessmentServiceError::Assessment(err)),
            AppError::Repository(err) => error_response(AssessmentServiceError::Repository(err)),
            other => {
                let body = Json(json!({ "error": other.to_string() }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<CatalogError> for AppError {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Repository(value)
    }
}

impl From<AssessmentServiceError> for AppError {
    fn from(value: AssessmentServiceError) -> Self {
        match value {
            AssessmentServiceError::Assessment(err) => Self::Assessment(err),
            AssessmentServiceError::Repository(err) => Self::Repository(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::SectionId;

    #[test]
    fn assessment_errors_map_to_client_statuses() {
        let incomplete = AppError::from(AssessmentError::IncompleteAssessment {
            pending: vec![SectionId::Wiscar],
        });
        assert_eq!(incomplete.into_response().status(), StatusCode::CONFLICT);

        let duplicate = AppError::from(RepositoryError::Conflict);
        assert_eq!(duplicate.into_response().status(), StatusCode::CONFLICT);

        let missing = AppError::from(RepositoryError::NotFound);
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let config = AppError::from(ConfigError::InvalidPort);
        assert_eq!(
            config.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn display_prefixes_the_failing_layer() {
        let err = AppError::from(CatalogError::DuplicateQuestion(
            crate::workflows::assessment::QuestionId::new("will_1"),
        ));
        assert_eq!(
            err.to_string(),
            "catalog error: question will_1 is defined more than once"
        );
    }
}
