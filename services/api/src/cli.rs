use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cirf::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "cirf-api",
    about = "Run and explore the CIRF assessment service from the command line",
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
    /// Score a saved answer file and print the interpretation and insights
    Score(ScoreArgs),
    /// Walk through unlocks, submissions and progress against in-memory stores
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirf::assessments::AssessmentType;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["cirf-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_parses_the_assessment_type() {
        let cli = Cli::try_parse_from([
            "cirf-api",
            "score",
            "--assessment",
            "ciss",
            "--answers",
            "answers.json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => assert_eq!(args.assessment, AssessmentType::Ciss),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn score_rejects_unknown_assessment_types() {
        let result = Cli::try_parse_from([
            "cirf-api",
            "score",
            "--assessment",
            "tarot",
            "--answers",
            "answers.json",
        ]);
        assert!(result.is_err());
    }
}
