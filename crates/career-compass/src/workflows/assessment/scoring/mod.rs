mod aggregate;
mod careers;
mod category;
mod guidance;
mod synthesis;

pub use aggregate::{SectionResult, SectionScores};
pub use careers::{CareerMatch, CareerPath, ScoreInput};
pub use category::CategoryScore;
pub use guidance::{LearningResource, ResourceKind, TierGuidance};
pub use synthesis::ReadinessTier;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerSheet, Percentage, SectionId};
use super::error::AssessmentError;
use super::intake::partition;
use aggregate::aggregate_section;
use careers::rank_careers;
use category::score_category;
use synthesis::overall_readiness;

/// Stateless scorer applying the catalog and career table to answer sheets.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: Arc<QuestionCatalog>,
    careers: Vec<CareerPath>,
}

impl ScoringEngine {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self::with_careers(catalog, CareerPath::standard())
    }

    pub fn with_careers(catalog: QuestionCatalog, careers: Vec<CareerPath>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            careers,
        }
    }

    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn careers(&self) -> &[CareerPath] {
        &self.careers
    }

    /// Score one section. Every question of the section must be answered.
    pub fn score_section(
        &self,
        section: SectionId,
        answers: &AnswerSheet,
    ) -> Result<SectionResult, AssessmentError> {
        let missing: Vec<_> = self
            .catalog
            .section_questions(section)
            .into_iter()
            .filter(|question| !answers.contains(&question.id))
            .map(|question| question.id.clone())
            .collect();
        if !missing.is_empty() {
            return Err(AssessmentError::IncompleteSection { section, missing });
        }

        let categories = section
            .categories()
            .map(|category| {
                let questions = self.catalog.category_questions(category);
                score_category(category, &questions, answers)
                    .map(|score| CategoryScore { category, score })
            })
            .collect::<Result<Vec<_>, _>>()?;

        aggregate_section(section, categories)
    }

    /// Combine three finalized sections into the final result.
    pub fn synthesize(&self, sections: SectionScores) -> Result<AssessmentResult, AssessmentError> {
        let overall = overall_readiness(&sections);
        let tier = ReadinessTier::classify(overall);
        let career_matches = rank_careers(&self.careers, &sections)?;

        Ok(AssessmentResult {
            sections,
            overall,
            tier,
            guidance: TierGuidance::for_tier(tier),
            career_matches,
        })
    }

    /// Score a complete answer map in one pass, without a session.
    pub fn evaluate(&self, answers: &AnswerSheet) -> Result<AssessmentResult, AssessmentError> {
        let mut sheets = partition(&self.catalog, answers)?;

        let mut finalized = BTreeMap::new();
        for section in SectionId::ALL {
            let sheet = sheets.remove(&section).unwrap_or_default();
            finalized.insert(section, self.score_section(section, &sheet)?);
        }

        self.synthesize(SectionScores::from_finalized(&finalized)?)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Read-only outcome handed to presentation once all sections are finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub sections: SectionScores,
    pub overall: Percentage,
    pub tier: ReadinessTier,
    pub guidance: &'static TierGuidance,
    pub career_matches: Vec<CareerMatch>,
}
