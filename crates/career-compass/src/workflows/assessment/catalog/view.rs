use serde::Serialize;

use super::QuestionCatalog;
use crate::workflows::assessment::domain::{Category, Modality, Question, QuestionId, SectionId};

/// Respondent-facing catalog; correct options are never exposed.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionView {
    pub section: SectionId,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: Vec<QuestionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

impl CatalogView {
    pub fn from_catalog(catalog: &QuestionCatalog) -> Self {
        let sections = SectionId::ALL
            .into_iter()
            .map(|section| SectionView {
                section,
                title: section.title(),
                description: section.description(),
                questions: catalog
                    .section_questions(section)
                    .into_iter()
                    .map(QuestionView::from_question)
                    .collect(),
            })
            .collect();

        Self { sections }
    }
}

impl QuestionView {
    fn from_question(question: &Question) -> Self {
        let options = match &question.modality {
            Modality::RatingScale { scale } => scale
                .labels()
                .iter()
                .zip(1u8..)
                .map(|(label, rating)| OptionView {
                    value: rating.to_string(),
                    label: label.to_string(),
                })
                .collect(),
            Modality::SingleChoice { options } => options
                .iter()
                .map(|option| OptionView {
                    value: option.value.clone(),
                    label: option.label.clone(),
                })
                .collect(),
        };

        Self {
            id: question.id.clone(),
            category: question.category,
            prompt: question.prompt.clone(),
            options,
        }
    }
}
