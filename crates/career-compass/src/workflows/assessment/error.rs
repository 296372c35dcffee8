use super::catalog::CatalogError;
use super::domain::{QuestionId, SectionId};

/// Failures raised by the scoring engine and the assessment flow.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("configuration error: {0}")]
    Configuration(#[from] CatalogError),
    #[error("invalid answer for question {question}: {reason}")]
    InvalidAnswer {
        question: QuestionId,
        reason: InvalidAnswerReason,
    },
    #[error("section {section} has unanswered questions: {}", join(.missing))]
    IncompleteSection {
        section: SectionId,
        missing: Vec<QuestionId>,
    },
    #[error("assessment incomplete, sections not finalized: {}", join(.pending))]
    IncompleteAssessment { pending: Vec<SectionId> },
    #[error("section {0} is already finalized")]
    SectionFinalized(SectionId),
    #[error("section {requested} is not active yet (current section: {active})")]
    SectionOutOfOrder {
        requested: SectionId,
        active: SectionId,
    },
}

/// Why a submitted value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAnswerReason {
    #[error("question is not part of the catalog")]
    UnknownQuestion,
    #[error("expected a rating between 1 and 5, got {0:?}")]
    NotARating(String),
    #[error("rating {0} is outside 1-5")]
    RatingOutOfRange(i64),
    #[error("{0:?} is not one of the declared options")]
    UnknownOption(String),
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
