//! # Tristage - three-stage CI action runner
//!
//! Entry point for the `pre`, `main` and `post` steps of an action.
//!
//! ## Usage
//!
//! The host runs the bare binary once per step; each run picks its own stage.
//!
//! ```bash
//! tristage                      # pre step  -> pre-run
//! tristage                      # main step -> run
//! tristage                      # post step -> post-run
//!
//! # Inspect the stage without running it
//! tristage stage --json-mode
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tristage::cli::{self, Cli, Commands};
use tristage::host::annotations;
use tristage::LogFormat;
use tristage::dispatch::failure_title;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            annotations::set_failed(&e.to_string(), Some("Invalid configuration"));
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = cli::execute(&cli, &config).await {
        tracing::error!("Error: {}", e);
        if cli.command.unwrap_or(Commands::Dispatch) == Commands::Dispatch {
            let title = failure_title(&e, &config.action_name);
            annotations::set_failed(&e.to_string(), Some(title.as_str()));
        }
        std::process::exit(1);
    }
}

/// Initialize tracing. Logs go to stderr; stdout carries workflow commands.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tristage=info,tristage_core=info".into());

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }
}
