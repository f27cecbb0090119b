//! Formrelay CLI - Command-line interface
//!
//! Builds a form from command-line fields and relays it to a submission
//! endpoint.

mod commands;

use clap::Parser;
use formrelay_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "formrelay")]
#[command(about = "Relay form fields to a submission endpoint")]
struct Cli {
    /// Console log level
    #[arg(long, default_value = "warn")]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.into())?;

    commands::handle_command(cli.command).await?;

    Ok(())
}
