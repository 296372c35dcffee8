use crate::infra::{load_engine, InMemorySessionRepository};
use career_compass::error::AppError;
use career_compass::workflows::assessment::{
    AnswerSheet, AnswerValue, AssessmentResult, AssessmentService, CatalogView, Modality,
    Question, SectionId, SectionResult,
};
use chrono::Local;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// JSON catalog replacing the built-in questionnaire
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the respondent-facing catalog as JSON instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON object mapping question ids to answers, e.g. {"interest_1": 4, "aptitude_1": "32"}
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// JSON catalog replacing the built-in questionnaire
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Scripted respondent to walk through the assessment
    #[arg(long, value_enum, default_value_t = DemoProfile::Strong)]
    pub(crate) profile: DemoProfile,
    /// JSON catalog replacing the built-in questionnaire
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

/// Scripted respondents used by the demo walk-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Top ratings and every knowledge check correct
    Strong,
    /// Agreeable ratings but no correct knowledge checks
    Conditional,
    /// Low ratings and no correct knowledge checks
    Developing,
}

impl DemoProfile {
    fn rating(self) -> u8 {
        match self {
            DemoProfile::Strong => 5,
            DemoProfile::Conditional => 4,
            DemoProfile::Developing => 2,
        }
    }

    fn answers_correctly(self) -> bool {
        matches!(self, DemoProfile::Strong)
    }

    fn answer(self, question: &Question) -> Option<AnswerValue> {
        match &question.modality {
            Modality::RatingScale { .. } => Some(AnswerValue::Rating(self.rating())),
            Modality::SingleChoice { options } => options
                .iter()
                .find(|option| option.correct == self.answers_correctly())
                .map(|option| AnswerValue::Choice(option.value.clone())),
        }
    }
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let engine = load_engine(args.catalog)?;
    let view = CatalogView::from_catalog(engine.catalog());

    if args.json {
        println!("{}", to_pretty_json(&view)?);
        return Ok(());
    }

    for section in &view.sections {
        println!("{} ({} questions)", section.title, section.questions.len());
        println!("  {}", section.description);
        for question in &section.questions {
            println!("  [{}] {} ({})", question.id, question.prompt, question.category);
            let options: Vec<String> = question
                .options
                .iter()
                .map(|option| format!("{}={}", option.value, option.label))
                .collect();
            println!("      {}", options.join(" | "));
        }
        println!();
    }
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let engine = load_engine(args.catalog)?;
    let file = File::open(&args.answers)?;
    let answers: AnswerSheet = serde_json::from_reader(BufReader::new(file))?;

    let result = engine.evaluate(&answers)?;
    println!("{}", to_pretty_json(&result)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = load_engine(args.catalog)?;
    let repository = Arc::new(InMemorySessionRepository::default());
    let service = AssessmentService::new(repository, engine);

    let record = service.start()?;
    let session_id = record.session_id;

    println!("Design research readiness demo");
    println!(
        "Session {} | profile: {:?} | started {}",
        session_id,
        args.profile,
        Local::now().format("%Y-%m-%d %H:%M")
    );

    for section in SectionId::ALL {
        for question in service.engine().catalog().section_questions(section) {
            if let Some(value) = args.profile.answer(question) {
                service.submit_answer(&session_id, &question.id, value)?;
            }
        }

        let result = service.finalize_section(&session_id, section)?;
        render_section(&result);
    }

    let result = service.compute_result(&session_id)?;
    render_result(&result);
    Ok(())
}

fn render_section(result: &SectionResult) {
    println!("\n{}: {}", result.section.title(), result.overall);
    for entry in &result.categories {
        println!("  {:<12} {:>4}", entry.category.label(), entry.score.to_string());
    }
}

fn render_result(result: &AssessmentResult) {
    let guidance = result.guidance;
    println!("\nOverall readiness: {} ({})", result.overall, guidance.level);
    println!("{}", guidance.description);
    println!("Recommendation: {}", guidance.decision);

    println!("\nCareer matches");
    for entry in &result.career_matches {
        let marker = if entry.highlighted { "*" } else { " " };
        println!(
            "{} {:<26} {:>4}  {}",
            marker,
            entry.role,
            entry.fit.to_string(),
            entry.description
        );
        println!("    skills: {}", entry.skills.join(", "));
    }

    println!("\nNext steps");
    for (index, step) in guidance.next_steps.iter().enumerate() {
        println!("{}. {}", index + 1, step);
    }

    println!("\nLearning resources");
    for resource in guidance.resources {
        println!("- {} ({:?})", resource.title, resource.kind);
    }
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
