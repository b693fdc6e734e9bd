use crate::commands::{
    run_batch, run_check_models, run_classify, BatchArgs, CheckModelsArgs, ClassifyArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use insurance_advisor::config::AppConfig;
use insurance_advisor::error::AppError;
use insurance_advisor::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Insurance Advisor",
    about = "Estimate insurance charges and reimbursement tiers from the command line",
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
    /// Classify a single client profile
    Classify(ClassifyArgs),
    /// Classify every client listed in a CSV file
    Batch(BatchArgs),
    /// Verify that the pricing artifacts exist and load
    CheckModels(CheckModelsArgs),
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

    let config = AppConfig::load()?;
    if !matches!(command, Command::Serve(_)) {
        telemetry::init_for_cli(&config.telemetry)?;
    }

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Classify(args) => run_classify(args),
        Command::Batch(args) => run_batch(args),
        Command::CheckModels(args) => run_check_models(args, &config),
    }
}
