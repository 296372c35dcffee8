use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for one respondent's assessment session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three assessment phases, in the order a respondent completes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Psychometric,
    Technical,
    Wiscar,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [
        SectionId::Psychometric,
        SectionId::Technical,
        SectionId::Wiscar,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Psychometric => "psychometric",
            SectionId::Technical => "technical",
            SectionId::Wiscar => "wiscar",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            SectionId::Psychometric => "Psychometric Assessment",
            SectionId::Technical => "Technical & Aptitude",
            SectionId::Wiscar => "WISCAR Framework",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            SectionId::Psychometric => {
                "Evaluate your personality traits and motivational patterns"
            }
            SectionId::Technical => "Assess your current skills and learning foundation",
            SectionId::Wiscar => "Comprehensive evaluation of your readiness factors",
        }
    }

    /// Zero-based position in the assessment flow.
    pub const fn position(self) -> usize {
        match self {
            SectionId::Psychometric => 0,
            SectionId::Technical => 1,
            SectionId::Wiscar => 2,
        }
    }

    pub fn categories(self) -> impl Iterator<Item = Category> {
        Category::ALL
            .into_iter()
            .filter(move |category| category.section() == self)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown assessment section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "psychometric" => Ok(SectionId::Psychometric),
            "technical" => Ok(SectionId::Technical),
            "wiscar" => Ok(SectionId::Wiscar),
            _ => Err(UnknownSection(raw.to_string())),
        }
    }
}

/// Trait and interest categories of the psychometric section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitCategory {
    Interest,
    Personality,
    Motivation,
}

/// Knowledge categories of the technical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Aptitude,
    Knowledge,
    Domain,
}

/// Readiness factors of the WISCAR framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarCategory {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarCategory {
    pub const fn label(self) -> &'static str {
        match self {
            WiscarCategory::Will => "will",
            WiscarCategory::Interest => "interest",
            WiscarCategory::Skill => "skill",
            WiscarCategory::Cognitive => "cognitive",
            WiscarCategory::Ability => "ability",
            WiscarCategory::RealWorld => "real_world",
        }
    }
}

/// Section-scoped question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Psychometric(TraitCategory),
    Technical(SkillCategory),
    Wiscar(WiscarCategory),
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Psychometric(TraitCategory::Interest),
        Category::Psychometric(TraitCategory::Personality),
        Category::Psychometric(TraitCategory::Motivation),
        Category::Technical(SkillCategory::Aptitude),
        Category::Technical(SkillCategory::Knowledge),
        Category::Technical(SkillCategory::Domain),
        Category::Wiscar(WiscarCategory::Will),
        Category::Wiscar(WiscarCategory::Interest),
        Category::Wiscar(WiscarCategory::Skill),
        Category::Wiscar(WiscarCategory::Cognitive),
        Category::Wiscar(WiscarCategory::Ability),
        Category::Wiscar(WiscarCategory::RealWorld),
    ];

    pub const fn section(self) -> SectionId {
        match self {
            Category::Psychometric(_) => SectionId::Psychometric,
            Category::Technical(_) => SectionId::Technical,
            Category::Wiscar(_) => SectionId::Wiscar,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::Psychometric(TraitCategory::Interest) => "interest",
            Category::Psychometric(TraitCategory::Personality) => "personality",
            Category::Psychometric(TraitCategory::Motivation) => "motivation",
            Category::Technical(SkillCategory::Aptitude) => "aptitude",
            Category::Technical(SkillCategory::Knowledge) => "knowledge",
            Category::Technical(SkillCategory::Domain) => "domain",
            Category::Wiscar(category) => category.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section(), self.label())
    }
}

/// Label set shown next to a 1-5 rating. Both flavours score identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingScale {
    Agreement,
    Proficiency,
}

impl RatingScale {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const fn labels(self) -> [&'static str; 5] {
        match self {
            RatingScale::Agreement => [
                "Strongly Disagree",
                "Disagree",
                "Neutral",
                "Agree",
                "Strongly Agree",
            ],
            RatingScale::Proficiency => [
                "Beginner - No experience",
                "Novice - Basic understanding",
                "Intermediate - Some experience",
                "Advanced - Significant experience",
                "Expert - Professional level",
            ],
        }
    }

    pub const fn accepts(rating: u8) -> bool {
        rating >= Self::MIN && rating <= Self::MAX
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub correct: bool,
}

/// How a question is answered and scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Modality {
    RatingScale { scale: RatingScale },
    SingleChoice { options: Vec<ChoiceOption> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: Category,
    pub prompt: String,
    pub modality: Modality,
}

impl Question {
    pub fn section(&self) -> SectionId {
        self.category.section()
    }

    pub fn correct_value(&self) -> Option<&str> {
        match &self.modality {
            Modality::SingleChoice { options } => options
                .iter()
                .find(|option| option.correct)
                .map(|option| option.value.as_str()),
            Modality::RatingScale { .. } => None,
        }
    }
}

/// Raw value chosen by a respondent: a 1-5 rating or a declared option value.
///
/// Any JSON value deserializes. Whole numbers that fit a `u8` become
/// [`AnswerValue::Rating`]; everything else keeps its JSON text as
/// [`AnswerValue::Choice`] so validation can name the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Rating(u8),
    Choice(String),
}

impl From<Value> for AnswerValue {
    fn from(raw: Value) -> Self {
        match raw {
            Value::Number(number) => match number.as_u64().map(u8::try_from) {
                Some(Ok(rating)) => AnswerValue::Rating(rating),
                _ => AnswerValue::Choice(number.to_string()),
            },
            Value::String(text) => AnswerValue::Choice(text),
            other => AnswerValue::Choice(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(AnswerValue::from)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Rating(rating) => write!(f, "{rating}"),
            AnswerValue::Choice(value) => write!(f, "{value:?}"),
        }
    }
}

/// Answer store keyed by question identifier; an unanswered question has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an answer, returning the value it replaced.
    pub fn insert(&mut self, question: QuestionId, value: AnswerValue) -> Option<AnswerValue> {
        self.answers.insert(question, value)
    }

    pub fn get(&self, question: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(question)
    }

    pub fn contains(&self, question: &QuestionId) -> bool {
        self.answers.contains_key(question)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Whole-number percentage in `[0, 100]`.
///
/// Rounding is done in integer arithmetic with halves rounding up, so a mean of
/// 50 and 51 yields 51.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("percentage {0} exceeds 100")]
pub struct PercentageOutOfRange(pub u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const FULL: Percentage = Percentage(100);

    pub fn new(value: u8) -> Option<Self> {
        (value <= 100).then_some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// `round(numerator / denominator * 100)`; `None` when the ratio is undefined or above one.
    pub fn from_ratio(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 || numerator > denominator {
            return None;
        }
        let scaled = (200 * numerator + denominator) / (2 * denominator);
        Some(Self(scaled as u8))
    }

    /// Rounded arithmetic mean, or `None` for an empty input.
    pub fn mean<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Percentage>,
    {
        let (sum, count) = values
            .into_iter()
            .fold((0u64, 0u64), |(sum, count), value| {
                (sum + u64::from(value.0), count + 1)
            });
        if count == 0 {
            return None;
        }
        Some(Self(((2 * sum + count) / (2 * count)) as u8))
    }
}

impl TryFrom<u8> for Percentage {
    type Error = PercentageOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PercentageOutOfRange(value))
    }
}

impl From<Percentage> for u8 {
    fn from(value: Percentage) -> Self {
        value.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
