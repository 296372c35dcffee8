//! Design research readiness assessment: question catalog, scoring pipeline,
//! per-respondent sessions, and the HTTP surface over them.

pub mod catalog;
pub mod domain;
pub mod error;
mod intake;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogFile, CatalogView, QuestionCatalog};
pub use domain::{
    AnswerSheet, AnswerValue, Category, ChoiceOption, Modality, Percentage, Question, QuestionId,
    RatingScale, SectionId, SessionId, SkillCategory, TraitCategory, WiscarCategory,
};
pub use error::{AssessmentError, InvalidAnswerReason};
pub use repository::{RepositoryError, SessionRecord, SessionRepository, SessionStatusView};
pub use router::assessment_router;
pub use scoring::{
    AssessmentResult, CareerMatch, CareerPath, CategoryScore, ReadinessTier, ScoringEngine,
    SectionResult, SectionScores, TierGuidance,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use session::{AssessmentSession, AssessmentStage, SectionProgress};
