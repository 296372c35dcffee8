use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::category::CategoryScore;
use crate::workflows::assessment::catalog::CatalogError;
use crate::workflows::assessment::domain::{Category, Percentage, SectionId};
use crate::workflows::assessment::error::AssessmentError;

/// Category scores of one finalized section plus the section's overall score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    pub section: SectionId,
    pub categories: Vec<CategoryScore>,
    pub overall: Percentage,
}

impl SectionResult {
    pub fn category(&self, category: Category) -> Option<Percentage> {
        self.categories
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.score)
    }
}

/// Overall score is the rounded mean of however many categories the section has.
pub(crate) fn aggregate_section(
    section: SectionId,
    categories: Vec<CategoryScore>,
) -> Result<SectionResult, AssessmentError> {
    let overall = Percentage::mean(categories.iter().map(|entry| entry.score))
        .ok_or(CatalogError::EmptySection(section))?;

    Ok(SectionResult {
        section,
        categories,
        overall,
    })
}

/// The three finalized sections feeding synthesis and career ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScores {
    pub psychometric: SectionResult,
    pub technical: SectionResult,
    pub wiscar: SectionResult,
}

impl SectionScores {
    /// Collect finalized sections, failing with the list of sections still pending.
    pub fn from_finalized(
        finalized: &BTreeMap<SectionId, SectionResult>,
    ) -> Result<Self, AssessmentError> {
        let pending: Vec<SectionId> = SectionId::ALL
            .into_iter()
            .filter(|section| !finalized.contains_key(section))
            .collect();

        match (
            finalized.get(&SectionId::Psychometric),
            finalized.get(&SectionId::Technical),
            finalized.get(&SectionId::Wiscar),
        ) {
            (Some(psychometric), Some(technical), Some(wiscar)) => Ok(Self {
                psychometric: psychometric.clone(),
                technical: technical.clone(),
                wiscar: wiscar.clone(),
            }),
            _ => Err(AssessmentError::IncompleteAssessment { pending }),
        }
    }

    pub fn get(&self, section: SectionId) -> &SectionResult {
        match section {
            SectionId::Psychometric => &self.psychometric,
            SectionId::Technical => &self.technical,
            SectionId::Wiscar => &self.wiscar,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionResult> {
        [&self.psychometric, &self.technical, &self.wiscar].into_iter()
    }
}
