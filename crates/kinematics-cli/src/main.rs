mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use kinematics_cli::output::OutputFormat;

use crate::commands::run::{handle_run, RunOutcome, ScenarioArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Velocity, distance and fuel after one interval of vehicle motion"
)]
struct Cli {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 1 if any value is unavailable or fuel ran out.
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let outcome = handle_run(&cli.scenario, cli.format)?;
    if cli.strict && outcome == RunOutcome::Degraded {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
