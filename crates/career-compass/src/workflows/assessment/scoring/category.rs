use serde::{Deserialize, Serialize};

use crate::workflows::assessment::catalog::CatalogError;
use crate::workflows::assessment::domain::{
    AnswerSheet, AnswerValue, Category, Percentage, Question, RatingScale,
};
use crate::workflows::assessment::error::{AssessmentError, InvalidAnswerReason};
use crate::workflows::assessment::intake::{invalid, normalize_answer};

/// Normalized score for one category of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: Percentage,
}

/// Points one answered question contributes to its category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Tally {
    earned: u64,
    possible: u64,
}

impl std::ops::Add for Tally {
    type Output = Tally;

    fn add(self, other: Tally) -> Tally {
        Tally {
            earned: self.earned + other.earned,
            possible: self.possible + other.possible,
        }
    }
}

/// Dispatches on the question's own modality: a rating earns `rating / 5`, a
/// single-choice answer earns `1 / 1` when it matches the correct option.
fn tally(question: &Question, answer: &AnswerValue) -> Result<Tally, InvalidAnswerReason> {
    match normalize_answer(question, answer.clone())? {
        AnswerValue::Rating(rating) => Ok(Tally {
            earned: u64::from(rating),
            possible: u64::from(RatingScale::MAX),
        }),
        AnswerValue::Choice(value) => Ok(Tally {
            earned: u64::from(question.correct_value() == Some(value.as_str())),
            possible: 1,
        }),
    }
}

/// Reduce the answers for one category into a percentage.
///
/// Every question must be answered; a missing answer is reported as an
/// incomplete section rather than defaulted.
pub(crate) fn score_category(
    category: Category,
    questions: &[&Question],
    answers: &AnswerSheet,
) -> Result<Percentage, AssessmentError> {
    if questions.is_empty() {
        return Err(CatalogError::EmptyCategory(category).into());
    }

    let missing: Vec<_> = questions
        .iter()
        .filter(|question| !answers.contains(&question.id))
        .map(|question| question.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(AssessmentError::IncompleteSection {
            section: category.section(),
            missing,
        });
    }

    let mut total = Tally::default();
    for question in questions {
        if let Some(answer) = answers.get(&question.id) {
            total = total + tally(question, answer).map_err(|reason| invalid(question, reason))?;
        }
    }

    Percentage::from_ratio(total.earned, total.possible)
        .ok_or_else(|| CatalogError::EmptyCategory(category).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::domain::{
        ChoiceOption, Modality, QuestionId, SkillCategory, TraitCategory,
    };

    const INTEREST: Category = Category::Psychometric(TraitCategory::Interest);
    const APTITUDE: Category = Category::Technical(SkillCategory::Aptitude);

    fn rating_question(id: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            category: INTEREST,
            prompt: format!("Prompt {id}"),
            modality: Modality::RatingScale {
                scale: RatingScale::Agreement,
            },
        }
    }

    fn choice_question(id: &str, category: Category) -> Question {
        Question {
            id: QuestionId::new(id),
            category,
            prompt: format!("Prompt {id}"),
            modality: Modality::SingleChoice {
                options: vec![
                    ChoiceOption {
                        value: "right".to_string(),
                        label: "Right".to_string(),
                        correct: true,
                    },
                    ChoiceOption {
                        value: "wrong".to_string(),
                        label: "Wrong".to_string(),
                        correct: false,
                    },
                ],
            },
        }
    }

    fn sheet(entries: &[(&str, AnswerValue)]) -> AnswerSheet {
        entries
            .iter()
            .map(|(id, value)| (QuestionId::new(*id), value.clone()))
            .collect()
    }

    fn rating_category(ratings: &[u8]) -> (Vec<Question>, AnswerSheet) {
        let questions: Vec<Question> = (1..=ratings.len())
            .map(|n| rating_question(&format!("interest_{n}")))
            .collect();
        let answers = questions
            .iter()
            .zip(ratings)
            .map(|(question, rating)| (question.id.clone(), AnswerValue::Rating(*rating)))
            .collect();
        (questions, answers)
    }

    fn score(category: Category, questions: &[Question], answers: &AnswerSheet) -> u8 {
        let refs: Vec<&Question> = questions.iter().collect();
        score_category(category, &refs, answers)
            .expect("category scores")
            .value()
    }

    #[test]
    fn all_top_ratings_score_full_marks() {
        let (questions, answers) = rating_category(&[5, 5, 5, 5, 5]);
        assert_eq!(score(INTEREST, &questions, &answers), 100);
    }

    #[test]
    fn all_lowest_ratings_score_twenty() {
        let (questions, answers) = rating_category(&[1, 1, 1]);
        assert_eq!(score(INTEREST, &questions, &answers), 20);
    }

    #[test]
    fn ratings_of_four_score_eighty() {
        let (questions, answers) = rating_category(&[4, 4, 4, 4, 4]);
        assert_eq!(score(INTEREST, &questions, &answers), 80);
    }

    #[test]
    fn uneven_ratings_round_to_nearest() {
        // mean 11/3 => 73.33
        let (questions, answers) = rating_category(&[3, 4, 4]);
        assert_eq!(score(INTEREST, &questions, &answers), 73);
    }

    #[test]
    fn two_of_three_correct_scores_sixty_seven() {
        let questions = vec![
            choice_question("aptitude_1", APTITUDE),
            choice_question("aptitude_2", APTITUDE),
            choice_question("aptitude_3", APTITUDE),
        ];
        let answers = sheet(&[
            ("aptitude_1", AnswerValue::Choice("right".to_string())),
            ("aptitude_2", AnswerValue::Choice("right".to_string())),
            ("aptitude_3", AnswerValue::Choice("wrong".to_string())),
        ]);

        assert_eq!(score(APTITUDE, &questions, &answers), 67);
    }

    #[test]
    fn correctness_extremes() {
        let questions = vec![
            choice_question("aptitude_1", APTITUDE),
            choice_question("aptitude_2", APTITUDE),
        ];
        let right = sheet(&[
            ("aptitude_1", AnswerValue::Choice("right".to_string())),
            ("aptitude_2", AnswerValue::Choice("right".to_string())),
        ]);
        let wrong = sheet(&[
            ("aptitude_1", AnswerValue::Choice("wrong".to_string())),
            ("aptitude_2", AnswerValue::Choice("wrong".to_string())),
        ]);

        assert_eq!(score(APTITUDE, &questions, &right), 100);
        assert_eq!(score(APTITUDE, &questions, &wrong), 0);
    }

    #[test]
    fn mixed_modalities_dispatch_per_question() {
        // rating 5 earns 5/5, correct choice earns 1/1, wrong choice 0/1 => 6/7
        let questions = vec![
            rating_question("interest_1"),
            choice_question("interest_2", INTEREST),
            choice_question("interest_3", INTEREST),
        ];
        let answers = sheet(&[
            ("interest_1", AnswerValue::Rating(5)),
            ("interest_2", AnswerValue::Choice("right".to_string())),
            ("interest_3", AnswerValue::Choice("wrong".to_string())),
        ]);

        assert_eq!(score(INTEREST, &questions, &answers), 86);
    }

    #[test]
    fn empty_category_is_a_configuration_error() {
        let result = score_category(INTEREST, &[], &AnswerSheet::new());
        assert!(matches!(
            result,
            Err(AssessmentError::Configuration(CatalogError::EmptyCategory(category))) if category == INTEREST
        ));
    }

    #[test]
    fn missing_rating_fails_instead_of_defaulting() {
        let (mut questions, answers) = rating_category(&[5, 5]);
        questions.push(rating_question("interest_3"));

        let refs: Vec<&Question> = questions.iter().collect();
        match score_category(INTEREST, &refs, &answers) {
            Err(AssessmentError::IncompleteSection { missing, .. }) => {
                assert_eq!(missing, vec![QuestionId::new("interest_3")]);
            }
            other => panic!("expected incomplete section, got {other:?}"),
        }
    }

    #[test]
    fn invalid_stored_answers_are_rejected() {
        let (questions, mut answers) = rating_category(&[5]);
        answers.insert(QuestionId::new("interest_1"), AnswerValue::Rating(9));

        let refs: Vec<&Question> = questions.iter().collect();
        assert!(matches!(
            score_category(INTEREST, &refs, &answers),
            Err(AssessmentError::InvalidAnswer {
                reason: InvalidAnswerReason::RatingOutOfRange(9),
                ..
            })
        ));
    }
}
