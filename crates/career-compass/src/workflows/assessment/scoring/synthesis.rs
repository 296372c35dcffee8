use serde::{Deserialize, Serialize};

use super::aggregate::SectionScores;
use crate::workflows::assessment::domain::Percentage;

/// Qualitative bucket assigned from overall readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    StrongMatch,
    ConditionalFit,
    NeedsDevelopment,
}

impl ReadinessTier {
    pub const STRONG_MATCH_FLOOR: u8 = 80;
    pub const CONDITIONAL_FIT_FLOOR: u8 = 50;

    /// Boundaries are inclusive at the floor: 80 is a strong match, 50 a conditional fit.
    pub fn classify(score: Percentage) -> Self {
        let score = score.value();
        if score >= Self::STRONG_MATCH_FLOOR {
            ReadinessTier::StrongMatch
        } else if score >= Self::CONDITIONAL_FIT_FLOOR {
            ReadinessTier::ConditionalFit
        } else {
            ReadinessTier::NeedsDevelopment
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ReadinessTier::StrongMatch => "Strong Match",
            ReadinessTier::ConditionalFit => "Conditional Fit",
            ReadinessTier::NeedsDevelopment => "Needs Development",
        }
    }
}

/// Rounded mean of the three section overall scores.
pub(crate) fn overall_readiness(sections: &SectionScores) -> Percentage {
    Percentage::mean(sections.iter().map(|section| section.overall)).unwrap_or(Percentage::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(value: u8) -> ReadinessTier {
        ReadinessTier::classify(Percentage::new(value).expect("valid percentage"))
    }

    #[test]
    fn tier_boundaries_are_inclusive_at_the_floor() {
        assert_eq!(tier(100), ReadinessTier::StrongMatch);
        assert_eq!(tier(80), ReadinessTier::StrongMatch);
        assert_eq!(tier(79), ReadinessTier::ConditionalFit);
        assert_eq!(tier(50), ReadinessTier::ConditionalFit);
        assert_eq!(tier(49), ReadinessTier::NeedsDevelopment);
        assert_eq!(tier(0), ReadinessTier::NeedsDevelopment);
    }

    #[test]
    fn labels_match_presentation_copy() {
        assert_eq!(ReadinessTier::StrongMatch.label(), "Strong Match");
        assert_eq!(ReadinessTier::ConditionalFit.label(), "Conditional Fit");
        assert_eq!(ReadinessTier::NeedsDevelopment.label(), "Needs Development");
    }
}
