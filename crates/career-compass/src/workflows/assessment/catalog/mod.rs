//! Immutable question catalog with a category index built once at load time.

mod standard;
pub mod view;

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::domain::{Category, Modality, Question, QuestionId, SectionId};

pub use view::{CatalogView, QuestionView, SectionView};

/// Malformed catalog definitions. Raised at load time and never recovered.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("category {0} has no questions")]
    EmptyCategory(Category),
    #[error("section {0} has no categories to aggregate")]
    EmptySection(SectionId),
    #[error("question {0} is defined more than once")]
    DuplicateQuestion(QuestionId),
    #[error("single-choice question {question} must declare exactly one correct option (found {found})")]
    CorrectOptionCount { question: QuestionId, found: usize },
    #[error("question {question} declares option {value:?} more than once")]
    DuplicateOption { question: QuestionId, value: String },
    #[error("unable to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk representation accepted by [`QuestionCatalog::from_reader`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
    by_id: HashMap<QuestionId, usize>,
    by_category: BTreeMap<Category, Vec<usize>>,
    by_section: BTreeMap<SectionId, Vec<usize>>,
}

impl QuestionCatalog {
    /// The built-in design research questionnaire.
    pub fn standard() -> Self {
        Self::index(standard::standard_questions())
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        validate(&questions)?;
        Ok(Self::index(questions))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_reader(reader)?;
        Self::new(file.questions)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    fn index(questions: Vec<Question>) -> Self {
        let mut by_id = HashMap::with_capacity(questions.len());
        let mut by_category: BTreeMap<Category, Vec<usize>> = BTreeMap::new();
        let mut by_section: BTreeMap<SectionId, Vec<usize>> = BTreeMap::new();

        for (position, question) in questions.iter().enumerate() {
            by_id.insert(question.id.clone(), position);
            by_category
                .entry(question.category)
                .or_default()
                .push(position);
            by_section
                .entry(question.section())
                .or_default()
                .push(position);
        }

        Self {
            questions,
            by_id,
            by_category,
            by_section,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.by_id
            .get(id)
            .map(|&position| &self.questions[position])
    }

    /// Questions of one category, in catalog order.
    pub fn category_questions(&self, category: Category) -> Vec<&Question> {
        self.resolve(self.by_category.get(&category))
    }

    /// Questions of one section, in catalog order.
    pub fn section_questions(&self, section: SectionId) -> Vec<&Question> {
        self.resolve(self.by_section.get(&section))
    }

    pub fn section_len(&self, section: SectionId) -> usize {
        self.by_section.get(&section).map_or(0, Vec::len)
    }

    fn resolve(&self, positions: Option<&Vec<usize>>) -> Vec<&Question> {
        positions
            .map(|positions| {
                positions
                    .iter()
                    .map(|&position| &self.questions[position])
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn validate(questions: &[Question]) -> Result<(), CatalogError> {
    let mut seen = BTreeSet::new();
    for question in questions {
        if !seen.insert(&question.id) {
            return Err(CatalogError::DuplicateQuestion(question.id.clone()));
        }

        if let Modality::SingleChoice { options } = &question.modality {
            let found = options.iter().filter(|option| option.correct).count();
            if found != 1 {
                return Err(CatalogError::CorrectOptionCount {
                    question: question.id.clone(),
                    found,
                });
            }

            let mut values = BTreeSet::new();
            for option in options {
                if !values.insert(option.value.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        question: question.id.clone(),
                        value: option.value.clone(),
                    });
                }
            }
        }
    }

    for category in Category::ALL {
        if !questions.iter().any(|question| question.category == category) {
            return Err(CatalogError::EmptyCategory(category));
        }
    }

    Ok(())
}
