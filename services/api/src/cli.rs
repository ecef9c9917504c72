use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rg16::error::AppError;

use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "rg16-api",
    about = "Score RG16 questionnaires and serve results over HTTP",
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
    /// Score an answer file and print the result as JSON
    Score(ScoreArgs),
    /// Walk a synthetic respondent through submission, payment and report
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
    /// Persist assessments to this JSON file instead of memory
    #[arg(long)]
    pub(crate) store_path: Option<PathBuf>,
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
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["rg16-api"]).expect("parses");
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["rg16-api", "serve", "--port", "4000"]).expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(4000)),
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn score_requires_an_answer_file() {
        assert!(Cli::try_parse_from(["rg16-api", "score"]).is_err());
        let cli = Cli::try_parse_from([
            "rg16-api",
            "score",
            "--answers",
            "answers.json",
            "--bank-version",
            "v1",
            "--report",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.bank_version.as_deref(), Some("v1"));
                assert!(args.report);
            }
            other => panic!("expected score, got {other:?}"),
        }
    }
}
