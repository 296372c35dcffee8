use serde::Serialize;

use super::aggregate::SectionScores;
use crate::workflows::assessment::catalog::CatalogError;
use crate::workflows::assessment::domain::{Category, Percentage, SectionId, WiscarCategory};
use crate::workflows::assessment::error::AssessmentError;

/// One score feeding a career match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum ScoreInput {
    Section(SectionId),
    Wiscar(WiscarCategory),
}

impl ScoreInput {
    fn resolve(self, scores: &SectionScores) -> Result<Percentage, AssessmentError> {
        match self {
            ScoreInput::Section(section) => Ok(scores.get(section).overall),
            ScoreInput::Wiscar(factor) => {
                let category = Category::Wiscar(factor);
                scores
                    .wiscar
                    .category(category)
                    .ok_or_else(|| CatalogError::EmptyCategory(category).into())
            }
        }
    }
}

/// A career profile: its match is the rounded mean of exactly three scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerPath {
    pub role: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub inputs: [ScoreInput; 3],
}

impl CareerPath {
    pub fn standard() -> Vec<CareerPath> {
        vec![
            CareerPath {
                role: "UX Researcher",
                description: "Conducts studies to inform UX/UI design",
                skills: &["User Interviews", "Data Analysis", "Research Design"],
                inputs: [
                    ScoreInput::Section(SectionId::Psychometric),
                    ScoreInput::Wiscar(WiscarCategory::Interest),
                    ScoreInput::Wiscar(WiscarCategory::Skill),
                ],
            },
            CareerPath {
                role: "Design Strategist",
                description: "Combines business and research for product strategy",
                skills: &["Strategic Thinking", "Business Analysis", "Design Vision"],
                inputs: [
                    ScoreInput::Wiscar(WiscarCategory::Cognitive),
                    ScoreInput::Section(SectionId::Technical),
                    ScoreInput::Wiscar(WiscarCategory::RealWorld),
                ],
            },
            CareerPath {
                role: "Service Designer",
                description: "Designs holistic customer journeys",
                skills: &["Journey Mapping", "Service Design", "Stakeholder Management"],
                inputs: [
                    ScoreInput::Wiscar(WiscarCategory::Will),
                    ScoreInput::Section(SectionId::Psychometric),
                    ScoreInput::Wiscar(WiscarCategory::RealWorld),
                ],
            },
            CareerPath {
                role: "Accessibility Researcher",
                description: "Focuses on inclusive design research",
                skills: &["Accessibility Standards", "Inclusive Research", "User Empathy"],
                inputs: [
                    ScoreInput::Section(SectionId::Psychometric),
                    ScoreInput::Wiscar(WiscarCategory::Ability),
                    ScoreInput::Section(SectionId::Technical),
                ],
            },
        ]
    }

    fn fit(&self, scores: &SectionScores) -> Result<Percentage, AssessmentError> {
        let inputs = self
            .inputs
            .iter()
            .map(|input| input.resolve(scores))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Percentage::mean(inputs).unwrap_or(Percentage::ZERO))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerMatch {
    pub role: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub fit: Percentage,
    pub highlighted: bool,
}

impl CareerMatch {
    pub const HIGHLIGHT_THRESHOLD: u8 = 70;
}

/// Matches sorted by descending fit; equal fits keep table order.
pub(crate) fn rank_careers(
    paths: &[CareerPath],
    scores: &SectionScores,
) -> Result<Vec<CareerMatch>, AssessmentError> {
    let mut matches = paths
        .iter()
        .map(|path| {
            let fit = path.fit(scores)?;
            Ok(CareerMatch {
                role: path.role,
                description: path.description,
                skills: path.skills,
                fit,
                highlighted: fit.value() >= CareerMatch::HIGHLIGHT_THRESHOLD,
            })
        })
        .collect::<Result<Vec<_>, AssessmentError>>()?;

    // `sort_by` is stable.
    matches.sort_by(|a, b| b.fit.cmp(&a.fit));
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::assessment::scoring::aggregate::{aggregate_section, SectionResult};
    use crate::workflows::assessment::scoring::category::CategoryScore;

    fn pct(value: u8) -> Percentage {
        Percentage::new(value).expect("valid percentage")
    }

    fn section(section: SectionId, values: &[u8]) -> SectionResult {
        let categories = section
            .categories()
            .zip(values)
            .map(|(category, value)| CategoryScore {
                category,
                score: pct(*value),
            })
            .collect();
        aggregate_section(section, categories).expect("aggregates")
    }

    fn scores(psychometric: &[u8], technical: &[u8], wiscar: &[u8]) -> SectionScores {
        SectionScores {
            psychometric: section(SectionId::Psychometric, psychometric),
            technical: section(SectionId::Technical, technical),
            wiscar: section(SectionId::Wiscar, wiscar),
        }
    }

    fn fit_of(matches: &[CareerMatch], role: &str) -> u8 {
        matches
            .iter()
            .find(|entry| entry.role == role)
            .map(|entry| entry.fit.value())
            .expect("role ranked")
    }

    #[test]
    fn fits_use_the_configured_inputs() {
        // psychometric overall 80, technical overall 60
        // wiscar: will 90, interest 70, skill 40, cognitive 50, ability 100, real_world 30
        let scores = scores(&[80, 80, 80], &[60, 60, 60], &[90, 70, 40, 50, 100, 30]);
        let matches = rank_careers(&CareerPath::standard(), &scores).expect("ranks");

        // (80 + 70 + 40) / 3 = 63.33
        assert_eq!(fit_of(&matches, "UX Researcher"), 63);
        // (50 + 60 + 30) / 3 = 46.67
        assert_eq!(fit_of(&matches, "Design Strategist"), 47);
        // (90 + 80 + 30) / 3 = 66.67
        assert_eq!(fit_of(&matches, "Service Designer"), 67);
        // (80 + 100 + 60) / 3 = 80
        assert_eq!(fit_of(&matches, "Accessibility Researcher"), 80);

        let order: Vec<&str> = matches.iter().map(|entry| entry.role).collect();
        assert_eq!(
            order,
            vec![
                "Accessibility Researcher",
                "Service Designer",
                "UX Researcher",
                "Design Strategist"
            ]
        );
    }

    #[test]
    fn equal_fits_keep_table_order() {
        let uniform = scores(&[75, 75, 75], &[75, 75, 75], &[75; 6]);
        let matches = rank_careers(&CareerPath::standard(), &uniform).expect("ranks");

        let order: Vec<&str> = matches.iter().map(|entry| entry.role).collect();
        assert_eq!(
            order,
            vec![
                "UX Researcher",
                "Design Strategist",
                "Service Designer",
                "Accessibility Researcher"
            ]
        );
        assert!(matches.iter().all(|entry| entry.fit == pct(75)));
    }

    #[test]
    fn highlight_starts_at_seventy() {
        let at_threshold = scores(&[70, 70, 70], &[70, 70, 70], &[70; 6]);
        let below = scores(&[69, 69, 69], &[69, 69, 69], &[69; 6]);

        let highlighted = rank_careers(&CareerPath::standard(), &at_threshold).expect("ranks");
        let plain = rank_careers(&CareerPath::standard(), &below).expect("ranks");

        assert!(highlighted.iter().all(|entry| entry.highlighted));
        assert!(plain.iter().all(|entry| !entry.highlighted));
    }

    #[test]
    fn missing_wiscar_category_is_a_configuration_error() {
        let mut incomplete = scores(&[50, 50, 50], &[50, 50, 50], &[50; 6]);
        incomplete
            .wiscar
            .categories
            .retain(|entry| entry.category != Category::Wiscar(WiscarCategory::Skill));

        assert!(matches!(
            rank_careers(&CareerPath::standard(), &incomplete),
            Err(AssessmentError::Configuration(CatalogError::EmptyCategory(_)))
        ));
    }
}
