//! Tracing setup for Formrelay
//!
//! Console logging with a user-controlled level. Notifications stay the only
//! user-facing surface; tracing output is for operators and debugging.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize console tracing at the given level.
///
/// `RUST_LOG` overrides the level when set.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - If a global subscriber is already installed
pub fn init_tracing(
    console_level: Level,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .try_init()?;

    Ok(())
}

/// Console log levels selectable from the CLI.
///
/// Parsing and help text come from clap's `ValueEnum`; the only conversion
/// this crate adds is into a [`tracing::Level`] for [`init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    /// Failures only
    Error,
    /// Failures plus anything surprising
    Warn,
    /// Normal operational output
    Info,
    /// Diagnostic detail
    Debug,
    /// Everything, including per-submission tracing
    Trace,
}

impl From<CliLogLevel> for Level {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn test_cli_levels_map_to_tracing_levels() {
        assert_eq!(Level::from(CliLogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(CliLogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(CliLogLevel::Trace), Level::TRACE);
    }

    #[test]
    fn test_clap_parses_level_names() {
        let parsed = CliLogLevel::from_str("debug", true).unwrap();
        assert_eq!(parsed, CliLogLevel::Debug);
        assert!(CliLogLevel::from_str("verbose", true).is_err());
    }
}
