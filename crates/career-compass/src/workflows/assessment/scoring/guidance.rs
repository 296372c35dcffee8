use serde::Serialize;

use super::synthesis::ReadinessTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Resource,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub title: &'static str,
    pub kind: ResourceKind,
}

/// Fixed recommendation content attached to a readiness tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierGuidance {
    pub tier: ReadinessTier,
    pub level: &'static str,
    pub description: &'static str,
    pub decision: &'static str,
    pub next_steps: &'static [&'static str],
    pub resources: &'static [LearningResource],
}

impl TierGuidance {
    pub fn for_tier(tier: ReadinessTier) -> &'static TierGuidance {
        match tier {
            ReadinessTier::StrongMatch => &STRONG_MATCH,
            ReadinessTier::ConditionalFit => &CONDITIONAL_FIT,
            ReadinessTier::NeedsDevelopment => &NEEDS_DEVELOPMENT,
        }
    }
}

static STRONG_MATCH: TierGuidance = TierGuidance {
    tier: ReadinessTier::StrongMatch,
    level: "Strong Match",
    description: "You're well-suited for Design Research!",
    decision: "Yes - Pursue Design Research",
    next_steps: &[
        "Enroll in 'Introduction to User Research' course",
        "Learn tools: Figma, Dovetail, Optimal Workshop",
        "Join communities: IXDA, UX Research Collective",
        "Start building a research portfolio",
    ],
    resources: &[
        LearningResource {
            title: "User Research Fundamentals",
            kind: ResourceKind::Course,
        },
        LearningResource {
            title: "Design Research Toolkit",
            kind: ResourceKind::Resource,
        },
        LearningResource {
            title: "UX Research Community",
            kind: ResourceKind::Network,
        },
    ],
};

static CONDITIONAL_FIT: TierGuidance = TierGuidance {
    tier: ReadinessTier::ConditionalFit,
    level: "Conditional Fit",
    description: "With some development, you could thrive in this field.",
    decision: "Maybe - Explore Further",
    next_steps: &[
        "Take foundational UX design courses",
        "Practice user interview techniques",
        "Develop analytical thinking skills",
        "Shadow a design researcher",
    ],
    resources: &[
        LearningResource {
            title: "UX Design Basics",
            kind: ResourceKind::Course,
        },
        LearningResource {
            title: "Research Methods Guide",
            kind: ResourceKind::Resource,
        },
        LearningResource {
            title: "Design Mentorship Program",
            kind: ResourceKind::Network,
        },
    ],
};

static NEEDS_DEVELOPMENT: TierGuidance = TierGuidance {
    tier: ReadinessTier::NeedsDevelopment,
    level: "Needs Development",
    description: "Consider building foundational skills first.",
    decision: "Not Yet - Consider Alternatives",
    next_steps: &[
        "Explore related roles: Visual Designer, UI Engineer",
        "Build foundational design skills",
        "Develop communication abilities",
        "Consider business analysis roles",
    ],
    resources: &[
        LearningResource {
            title: "Exploring UX Roles",
            kind: ResourceKind::Course,
        },
        LearningResource {
            title: "Design Career Guide",
            kind: ResourceKind::Resource,
        },
        LearningResource {
            title: "Alternative Paths Workshop",
            kind: ResourceKind::Network,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_matching_guidance() {
        for tier in [
            ReadinessTier::StrongMatch,
            ReadinessTier::ConditionalFit,
            ReadinessTier::NeedsDevelopment,
        ] {
            let guidance = TierGuidance::for_tier(tier);
            assert_eq!(guidance.tier, tier);
            assert_eq!(guidance.level, tier.label());
            assert_eq!(guidance.next_steps.len(), 4);
            assert_eq!(guidance.resources.len(), 3);
        }
    }

    #[test]
    fn next_steps_keep_their_order() {
        let guidance = TierGuidance::for_tier(ReadinessTier::StrongMatch);
        assert_eq!(
            guidance.next_steps[0],
            "Enroll in 'Introduction to User Research' course"
        );
        assert_eq!(
            guidance.next_steps[3],
            "Start building a research portfolio"
        );
    }
}
