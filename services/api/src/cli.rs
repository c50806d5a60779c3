use crate::evaluate::{
    run_catalog, run_checklist, run_evaluate, CatalogArgs, ChecklistArgs, EvaluateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use purchase_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Purchase Advisor",
    about = "Score purchase decisions from the command line or over HTTP",
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
    /// Score one purchase and print the recommendation
    Evaluate(EvaluateArgs),
    /// List every rating dimension with its answer options
    Catalog(CatalogArgs),
    /// Print the rational checklist questions
    Checklist(ChecklistArgs),
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
        Command::Evaluate(args) => run_evaluate(args),
        Command::Catalog(args) => run_catalog(args),
        Command::Checklist(args) => run_checklist(args),
    }
}
