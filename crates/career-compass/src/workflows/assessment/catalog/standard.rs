use crate::workflows::assessment::domain::{
    Category, ChoiceOption, Modality, Question, QuestionId, RatingScale, SkillCategory,
    TraitCategory, WiscarCategory,
};

const INTEREST: Category = Category::Psychometric(TraitCategory::Interest);
const PERSONALITY: Category = Category::Psychometric(TraitCategory::Personality);
const MOTIVATION: Category = Category::Psychometric(TraitCategory::Motivation);
const APTITUDE: Category = Category::Technical(SkillCategory::Aptitude);
const KNOWLEDGE: Category = Category::Technical(SkillCategory::Knowledge);
const DOMAIN: Category = Category::Technical(SkillCategory::Domain);
const WILL: Category = Category::Wiscar(WiscarCategory::Will);
const CURIOSITY: Category = Category::Wiscar(WiscarCategory::Interest);
const SKILL: Category = Category::Wiscar(WiscarCategory::Skill);
const COGNITIVE: Category = Category::Wiscar(WiscarCategory::Cognitive);
const ABILITY: Category = Category::Wiscar(WiscarCategory::Ability);
const REAL_WORLD: Category = Category::Wiscar(WiscarCategory::RealWorld);

fn agreement(id: &str, category: Category, prompt: &str) -> Question {
    rated(id, category, prompt, RatingScale::Agreement)
}

fn proficiency(id: &str, category: Category, prompt: &str) -> Question {
    rated(id, category, prompt, RatingScale::Proficiency)
}

fn rated(id: &str, category: Category, prompt: &str, scale: RatingScale) -> Question {
    Question {
        id: QuestionId::new(id),
        category,
        prompt: prompt.to_string(),
        modality: Modality::RatingScale { scale },
    }
}

/// `options` are `(value, label)` pairs; `correct` names the correct value.
fn choice(
    id: &str,
    category: Category,
    prompt: &str,
    options: &[(&str, &str)],
    correct: &str,
) -> Question {
    Question {
        id: QuestionId::new(id),
        category,
        prompt: prompt.to_string(),
        modality: Modality::SingleChoice {
            options: options
                .iter()
                .map(|(value, label)| ChoiceOption {
                    value: value.to_string(),
                    label: label.to_string(),
                    correct: *value == correct,
                })
                .collect(),
        },
    }
}

pub(super) fn standard_questions() -> Vec<Question> {
    let mut questions = psychometric_questions();
    questions.extend(technical_questions());
    questions.extend(wiscar_questions());
    questions
}

fn psychometric_questions() -> Vec<Question> {
    vec![
        agreement(
            "interest_1",
            INTEREST,
            "I enjoy observing how people interact with technology.",
        ),
        agreement(
            "interest_2",
            INTEREST,
            "Understanding user behavior patterns fascinates me.",
        ),
        agreement(
            "interest_3",
            INTEREST,
            "I find myself naturally curious about why people make certain choices.",
        ),
        agreement(
            "interest_4",
            INTEREST,
            "I enjoy conducting interviews and listening to user stories.",
        ),
        agreement(
            "interest_5",
            INTEREST,
            "Analyzing data to uncover insights excites me.",
        ),
        agreement(
            "personality_1",
            PERSONALITY,
            "I enjoy exploring new ideas and concepts (Openness).",
        ),
        agreement(
            "personality_2",
            PERSONALITY,
            "I pay attention to details and am thorough in my work (Conscientiousness).",
        ),
        agreement(
            "personality_3",
            PERSONALITY,
            "I work well with others and enjoy collaborative environments (Agreeableness).",
        ),
        agreement(
            "personality_4",
            PERSONALITY,
            "I remain calm under pressure and adapt well to change (Emotional Stability).",
        ),
        agreement(
            "personality_5",
            PERSONALITY,
            "I communicate effectively and enjoy presenting ideas (Extraversion).",
        ),
        agreement(
            "motivation_1",
            MOTIVATION,
            "I am primarily motivated by the opportunity to learn and grow.",
        ),
        agreement(
            "motivation_2",
            MOTIVATION,
            "Making a positive impact on user experiences drives me.",
        ),
        agreement(
            "motivation_3",
            MOTIVATION,
            "I prefer work that allows for creative problem-solving.",
        ),
        agreement(
            "motivation_4",
            MOTIVATION,
            "I am willing to invest time in developing deep expertise.",
        ),
        agreement(
            "motivation_5",
            MOTIVATION,
            "I find satisfaction in translating complex insights into actionable recommendations.",
        ),
    ]
}

fn technical_questions() -> Vec<Question> {
    vec![
        choice(
            "aptitude_1",
            APTITUDE,
            "Which pattern comes next in this sequence: 2, 4, 8, 16, ?",
            &[("20", "20"), ("24", "24"), ("32", "32"), ("36", "36")],
            "32",
        ),
        choice(
            "aptitude_2",
            APTITUDE,
            "A user says they 'love the app' but their behavior shows they rarely use it. This suggests:",
            &[
                ("satisfaction", "High user satisfaction"),
                ("lying", "The user is lying"),
                ("bias", "Potential social desirability bias"),
                ("technical", "Technical issues preventing usage"),
            ],
            "bias",
        ),
        choice(
            "aptitude_3",
            APTITUDE,
            "In data analysis, correlation implies:",
            &[
                ("causation", "Causation"),
                ("relationship", "A potential relationship"),
                ("error", "Data collection error"),
                ("nothing", "Nothing meaningful"),
            ],
            "relationship",
        ),
        choice(
            "knowledge_1",
            KNOWLEDGE,
            "What is the primary goal of user-centered design?",
            &[
                ("aesthetics", "Creating beautiful interfaces"),
                ("users", "Solving real user problems"),
                ("technology", "Showcasing advanced technology"),
                ("business", "Maximizing business revenue"),
            ],
            "users",
        ),
        choice(
            "knowledge_2",
            KNOWLEDGE,
            "Which research method is best for understanding 'why' users behave in certain ways?",
            &[
                ("surveys", "Surveys"),
                ("analytics", "Analytics data"),
                ("interviews", "In-depth interviews"),
                ("ab_testing", "A/B testing"),
            ],
            "interviews",
        ),
        choice(
            "knowledge_3",
            KNOWLEDGE,
            "A persona is:",
            &[
                ("real_user", "A real user profile"),
                ("fictional", "A fictional character representing user segments"),
                ("demographic", "A demographic summary"),
                ("customer", "The ideal customer"),
            ],
            "fictional",
        ),
        choice(
            "domain_1",
            DOMAIN,
            "Which method would best uncover hidden user motivations?",
            &[
                ("surveys", "Online surveys"),
                ("ethnography", "Ethnographic research"),
                ("analytics", "Usage analytics"),
                ("focus_groups", "Focus groups"),
            ],
            "ethnography",
        ),
        choice(
            "domain_2",
            DOMAIN,
            "When should you use qualitative vs. quantitative research?",
            &[
                ("always_qual", "Always use qualitative"),
                ("always_quant", "Always use quantitative"),
                ("depends", "Depends on research questions and goals"),
                ("budget", "Depends on budget constraints"),
            ],
            "depends",
        ),
        choice(
            "domain_3",
            DOMAIN,
            "What is the main purpose of usability testing?",
            &[
                ("validate", "Validate design assumptions"),
                ("identify", "Identify usability issues"),
                ("measure", "Measure user satisfaction"),
                ("compare", "Compare with competitors"),
            ],
            "identify",
        ),
        choice(
            "domain_4",
            DOMAIN,
            "In design research, triangulation means:",
            &[
                ("geometry", "Using geometric analysis"),
                (
                    "multiple_methods",
                    "Using multiple research methods to validate findings",
                ),
                ("three_users", "Testing with exactly three users"),
                ("three_phases", "Conducting research in three phases"),
            ],
            "multiple_methods",
        ),
    ]
}

fn wiscar_questions() -> Vec<Question> {
    vec![
        agreement(
            "will_1",
            WILL,
            "I stay focused on long-term goals even when I face obstacles.",
        ),
        agreement(
            "will_2",
            WILL,
            "I persist with difficult tasks until I complete them successfully.",
        ),
        agreement(
            "will_3",
            WILL,
            "I maintain motivation even when progress seems slow.",
        ),
        agreement(
            "wiscar_interest_1",
            CURIOSITY,
            "I often wonder why people behave the way they do.",
        ),
        agreement(
            "wiscar_interest_2",
            CURIOSITY,
            "Understanding human psychology and behavior fascinates me.",
        ),
        agreement(
            "wiscar_interest_3",
            CURIOSITY,
            "I enjoy observing patterns in how people interact with systems.",
        ),
        proficiency(
            "skill_1",
            SKILL,
            "Rate your current proficiency in conducting user interviews.",
        ),
        proficiency(
            "skill_2",
            SKILL,
            "Rate your ability to analyze qualitative data and identify patterns.",
        ),
        proficiency(
            "skill_3",
            SKILL,
            "Rate your communication skills in presenting research findings.",
        ),
        agreement(
            "cognitive_1",
            COGNITIVE,
            "I enjoy solving ambiguous, messy problems without clear solutions.",
        ),
        agreement(
            "cognitive_2",
            COGNITIVE,
            "I can quickly learn and adapt to new research methodologies.",
        ),
        agreement(
            "cognitive_3",
            COGNITIVE,
            "I excel at seeing connections between seemingly unrelated pieces of information.",
        ),
        agreement(
            "ability_1",
            ABILITY,
            "I actively seek out feedback on how I interpret user data and insights.",
        ),
        agreement(
            "ability_2",
            ABILITY,
            "I reflect on my own thinking processes and biases regularly.",
        ),
        agreement(
            "ability_3",
            ABILITY,
            "I adapt my approach based on what I learn from failures or mistakes.",
        ),
        agreement(
            "realworld_1",
            REAL_WORLD,
            "Design research involves extensive fieldwork and data synthesis. I find this appealing.",
        ),
        agreement(
            "realworld_2",
            REAL_WORLD,
            "I understand that design research often requires working with ambiguous requirements.",
        ),
        agreement(
            "realworld_3",
            REAL_WORLD,
            "I am comfortable with the collaborative and iterative nature of research work.",
        ),
    ]
}
