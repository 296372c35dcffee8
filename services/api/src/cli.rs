use crate::demo::{run_catalog, run_demo, run_score, CatalogArgs, DemoArgs, ScoreArgs};
use crate::server;
use career_compass::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Career Compass",
    about = "Score the design research career readiness assessment from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the question catalog
    Catalog(CatalogArgs),
    /// Score a JSON answer map and print the result as JSON
    Score(ScoreArgs),
    /// Walk a scripted respondent through the assessment and print the report
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// JSON catalog replacing the built-in questionnaire
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["career-compass"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_demo_profile() {
        let cli = Cli::try_parse_from(["career-compass", "demo", "--profile", "conditional"])
            .expect("parses");
        assert!(matches!(cli.command, Some(Command::Demo(_))));
    }

    #[test]
    fn score_requires_an_answer_file() {
        assert!(Cli::try_parse_from(["career-compass", "score"]).is_err());
    }
}
