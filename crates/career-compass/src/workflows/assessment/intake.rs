//! Answer validation against the catalog.
//!
//! Rating questions accept either a JSON number or its string form ("4"); whole
//! numbers outside 1-5 are out of range and anything else is not a rating. Choice
//! questions accept the option value as a string or a number. Accepted values
//! are stored normalized: ratings as [`AnswerValue::Rating`], choices as
//! [`AnswerValue::Choice`].

use std::collections::BTreeMap;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerSheet, AnswerValue, Modality, Question, RatingScale, SectionId};
use super::error::{AssessmentError, InvalidAnswerReason};

pub(crate) fn normalize_answer(
    question: &Question,
    value: AnswerValue,
) -> Result<AnswerValue, InvalidAnswerReason> {
    match &question.modality {
        Modality::RatingScale { .. } => {
            let rating = match value {
                AnswerValue::Rating(rating) => i64::from(rating),
                AnswerValue::Choice(raw) => raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| InvalidAnswerReason::NotARating(raw.clone()))?,
            };
            u8::try_from(rating)
                .ok()
                .filter(|rating| RatingScale::accepts(*rating))
                .map(AnswerValue::Rating)
                .ok_or(InvalidAnswerReason::RatingOutOfRange(rating))
        }
        Modality::SingleChoice { options } => {
            let raw = match value {
                AnswerValue::Choice(raw) => raw,
                AnswerValue::Rating(number) => number.to_string(),
            };
            if options.iter().any(|option| option.value == raw) {
                Ok(AnswerValue::Choice(raw))
            } else {
                Err(InvalidAnswerReason::UnknownOption(raw))
            }
        }
    }
}

pub(crate) fn invalid(question: &Question, reason: InvalidAnswerReason) -> AssessmentError {
    AssessmentError::InvalidAnswer {
        question: question.id.clone(),
        reason,
    }
}

/// Validate a full answer map and split it into one sheet per section.
pub(crate) fn partition(
    catalog: &QuestionCatalog,
    answers: &AnswerSheet,
) -> Result<BTreeMap<SectionId, AnswerSheet>, AssessmentError> {
    let mut sheets: BTreeMap<SectionId, AnswerSheet> = BTreeMap::new();
    for (id, value) in answers.iter() {
        let question = catalog
            .question(id)
            .ok_or_else(|| AssessmentError::InvalidAnswer {
                question: id.clone(),
                reason: InvalidAnswerReason::UnknownQuestion,
            })?;
        let normalized =
            normalize_answer(question, value.clone()).map_err(|reason| invalid(question, reason))?;
        sheets
            .entry(question.section())
            .or_default()
            .insert(id.clone(), normalized);
    }
    Ok(sheets)
}
