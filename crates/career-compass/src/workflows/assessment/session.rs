//! Per-respondent assessment flow.
//!
//! Sections are completed strictly in order. Answers go to the active section
//! (the first one not yet finalized), finalization freezes a section's result,
//! and the overall result is computed once every section is finalized.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use super::domain::{AnswerSheet, AnswerValue, QuestionId, SectionId};
use super::error::{AssessmentError, InvalidAnswerReason};
use super::intake::{invalid, normalize_answer};
use super::scoring::{AssessmentResult, ScoringEngine, SectionResult, SectionScores};

/// Where a session sits in the assessment flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "section", rename_all = "snake_case")]
pub enum AssessmentStage {
    NotStarted,
    SectionInProgress(SectionId),
    SectionFinalized(SectionId),
    AllFinalized,
    ResultComputed,
}

impl AssessmentStage {
    pub fn label(self) -> &'static str {
        match self {
            AssessmentStage::NotStarted => "not_started",
            AssessmentStage::SectionInProgress(_) => "section_in_progress",
            AssessmentStage::SectionFinalized(_) => "section_finalized",
            AssessmentStage::AllFinalized => "all_finalized",
            AssessmentStage::ResultComputed => "result_computed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionProgress {
    pub section: SectionId,
    pub answered: usize,
    pub total: usize,
    pub finalized: bool,
}

/// Answers, frozen section results and the cached final result of one respondent.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    engine: Arc<ScoringEngine>,
    answers: BTreeMap<SectionId, AnswerSheet>,
    finalized: BTreeMap<SectionId, SectionResult>,
    result: Option<AssessmentResult>,
}

impl AssessmentSession {
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self {
            engine,
            answers: BTreeMap::new(),
            finalized: BTreeMap::new(),
            result: None,
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// First section not yet finalized; `None` once all are.
    pub fn active_section(&self) -> Option<SectionId> {
        SectionId::ALL
            .into_iter()
            .find(|section| !self.finalized.contains_key(section))
    }

    pub fn stage(&self) -> AssessmentStage {
        if self.result.is_some() {
            return AssessmentStage::ResultComputed;
        }
        let Some(active) = self.active_section() else {
            return AssessmentStage::AllFinalized;
        };
        if self.answers.get(&active).is_some_and(|sheet| !sheet.is_empty()) {
            return AssessmentStage::SectionInProgress(active);
        }
        match self.finalized.keys().next_back() {
            Some(last) => AssessmentStage::SectionFinalized(*last),
            None => AssessmentStage::NotStarted,
        }
    }

    /// Validate and store an answer, replacing any earlier answer to the same question.
    ///
    /// Returns the normalized value that was stored.
    pub fn submit_answer(
        &mut self,
        question_id: &QuestionId,
        value: AnswerValue,
    ) -> Result<AnswerValue, AssessmentError> {
        let question = self.engine.catalog().question(question_id).ok_or_else(|| {
            AssessmentError::InvalidAnswer {
                question: question_id.clone(),
                reason: InvalidAnswerReason::UnknownQuestion,
            }
        })?;

        let section = question.section();
        self.ensure_active(section)?;

        let normalized = normalize_answer(question, value).map_err(|reason| invalid(question, reason))?;
        self.answers
            .entry(section)
            .or_default()
            .insert(question_id.clone(), normalized.clone());
        Ok(normalized)
    }

    /// Freeze the section's scores. Calling it again returns the stored result.
    pub fn finalize_section(&mut self, section: SectionId) -> Result<SectionResult, AssessmentError> {
        if let Some(existing) = self.finalized.get(&section) {
            return Ok(existing.clone());
        }
        self.ensure_active(section)?;

        let empty = AnswerSheet::new();
        let sheet = self.answers.get(&section).unwrap_or(&empty);
        let result = self.engine.score_section(section, sheet)?;
        self.finalized.insert(section, result.clone());
        Ok(result)
    }

    /// Synthesize the final result. Requires all sections finalized; cached after the first call.
    pub fn compute_result(&mut self) -> Result<AssessmentResult, AssessmentError> {
        if let Some(result) = &self.result {
            return Ok(result.clone());
        }

        let sections = SectionScores::from_finalized(&self.finalized)?;
        let result = self.engine.synthesize(sections)?;
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Discard every answer and result.
    pub fn restart(&mut self) {
        self.answers.clear();
        self.finalized.clear();
        self.result = None;
    }

    pub fn answers(&self, section: SectionId) -> Option<&AnswerSheet> {
        self.answers.get(&section)
    }

    pub fn section_result(&self, section: SectionId) -> Option<&SectionResult> {
        self.finalized.get(&section)
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        self.result.as_ref()
    }

    pub fn progress(&self) -> Vec<SectionProgress> {
        SectionId::ALL
            .into_iter()
            .map(|section| SectionProgress {
                section,
                answered: self.answers.get(&section).map_or(0, AnswerSheet::len),
                total: self.engine.catalog().section_len(section),
                finalized: self.finalized.contains_key(&section),
            })
            .collect()
    }

    fn ensure_active(&self, section: SectionId) -> Result<(), AssessmentError> {
        if self.finalized.contains_key(&section) {
            return Err(AssessmentError::SectionFinalized(section));
        }
        match self.active_section() {
            Some(active) if active == section => Ok(()),
            Some(active) => Err(AssessmentError::SectionOutOfOrder {
                requested: section,
                active,
            }),
            None => Err(AssessmentError::SectionFinalized(section)),
        }
    }
}
