//! # Tristage CLI Module
//!
//! ## Available Commands
//!
//! - `dispatch` - Resolve the stage, run it and persist it (default)
//! - `stage` - Show which stage this invocation would run

mod commands;

use crate::config::{Config, Overrides};
use crate::error::AppError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Tristage - three-stage CI action runner
///
/// The host runs this binary for the `pre`, `main` and `post` steps of an
/// action. Each run works out its own stage from the saved state.
#[derive(Parser, Debug)]
#[command(name = "tristage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, global = true, env = "TRISTAGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log format: "text" or "json"
    #[arg(long, global = true, env = "TRISTAGE_LOG_FORMAT")]
    pub log_format: Option<String>,

    /// State file to append saved state to
    #[arg(long, global = true, env = "GITHUB_STATE")]
    pub state_file: Option<PathBuf>,

    /// Action name used in log lines and annotations
    #[arg(short = 'n', long, global = true, env = "TRISTAGE_ACTION_NAME")]
    pub action_name: Option<String>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Resolve the current stage, run it and persist it
    Dispatch,

    /// Show the stage this invocation would run, without running it
    Stage,
}

impl Cli {
    /// Build the effective configuration from the file and the flags.
    pub fn config(&self) -> Result<Config, AppError> {
        let overrides = Overrides {
            action_name: self.action_name.clone(),
            log_format: self.log_format.clone(),
            state_file: self.state_file.clone(),
        };
        Config::load(self.config.as_deref(), overrides)
    }
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: &Cli, config: &Config) -> Result<(), AppError> {
    match cli.command.unwrap_or(Commands::Dispatch) {
        Commands::Dispatch => cmd_dispatch(config).await.map(|_| ()),
        Commands::Stage => cmd_stage(config, cli.json_mode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["tristage"]).expect("parse");
        assert_eq!(cli.command, None);
        assert!(!cli.json_mode);
    }

    #[test]
    fn stage_subcommand_with_flags() {
        let cli = Cli::try_parse_from([
            "tristage",
            "stage",
            "--json-mode",
            "--action-name",
            "deploy",
        ])
        .expect("parse");
        assert_eq!(cli.command, Some(Commands::Stage));
        assert!(cli.json_mode);

        let config = cli.config().expect("config");
        assert_eq!(config.action_name, "deploy");
    }

    #[test]
    fn state_file_flag_reads_runner_env() {
        use clap::CommandFactory;
        let command = Cli::command();
        let arg = command
            .get_arguments()
            .find(|arg| arg.get_id() == "state_file")
            .expect("state_file arg");
        assert_eq!(
            arg.get_env().and_then(|env| env.to_str()),
            Some("GITHUB_STATE")
        );
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
