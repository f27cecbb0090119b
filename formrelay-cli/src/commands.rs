//! CLI command implementations

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use formrelay_core::config::{FormConfig, NetworkConfig, RelayConfig};
use formrelay_core::{ConsoleNotifier, MemoryForm, SubmissionHandler};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit form fields to the endpoint
    Submit {
        /// Fields as NAME=VALUE pairs
        fields: Vec<String>,
        /// Base URL of the receiving server
        #[arg(long, default_value_t = NetworkConfig::default().endpoint)]
        endpoint: String,
        /// Form identifier
        #[arg(long, default_value_t = FormConfig::default().form_id.to_string())]
        form_id: String,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Submit {
            fields,
            endpoint,
            form_id,
        } => submit_form(fields, endpoint, form_id).await,
    }
}

/// Build a form from NAME=VALUE arguments and submit it once
async fn submit_form(fields: Vec<String>, endpoint: String, form_id: String) -> Result<()> {
    let mut form = MemoryForm::new(form_id);
    for raw in &fields {
        let (name, value) = parse_field(raw)?;
        form.set(name, value);
    }

    let config = RelayConfig {
        network: NetworkConfig {
            endpoint,
            ..NetworkConfig::default()
        },
        ..RelayConfig::default()
    };

    let handler = SubmissionHandler::bind(
        Arc::new(form),
        config,
        Arc::new(ConsoleNotifier::new()),
    )?;

    tracing::info!(url = %handler.submit_url(), fields = fields.len(), "submitting form");
    handler.submit().await;

    Ok(())
}

/// Split a NAME=VALUE argument at the first '='
fn parse_field(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('=')
        .with_context(|| format!("invalid field '{raw}', expected NAME=VALUE"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: Commands,
    }

    #[test]
    fn test_submit_defaults_follow_config() {
        let cli = TestCli::try_parse_from(["formrelay", "submit", "Date=2024-01-02"]).unwrap();
        let Commands::Submit {
            endpoint, form_id, ..
        } = cli.command;

        assert_eq!(endpoint, NetworkConfig::default().endpoint);
        assert_eq!(form_id, FormConfig::default().form_id);
    }

    #[test]
    fn test_parse_field_splits_at_first_equals() {
        assert_eq!(parse_field("Date=2024-01-02").unwrap(), ("Date", "2024-01-02"));
        // Values may themselves contain '='
        assert_eq!(parse_field("note=a=b").unwrap(), ("note", "a=b"));
    }

    #[test]
    fn test_parse_field_rejects_missing_equals() {
        assert!(parse_field("Date").is_err());
    }
}
