//! # CLI Command Implementations

use crate::config::Config;
use crate::context::ActionContext;
use crate::dispatch::{Dispatcher, NoopHandlers};
use crate::error::AppError;
use crate::host::EnvStateStore;
use tristage_core::{PREVIOUS_STAGE_KEY, Stage, StateStore};

/// Build the state store from a variable snapshot and the effective config.
fn store_from_vars<I, K, V>(vars: I, config: &Config) -> EnvStateStore
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    EnvStateStore::from_vars(vars).with_state_file(config.state_file.clone())
}

/// Build the state store the runner provides to this process.
fn runner_store(config: &Config) -> EnvStateStore {
    store_from_vars(std::env::vars(), config)
}

// =============================================================================
// DISPATCH COMMAND
// =============================================================================

/// Run the stage for this invocation.
pub async fn cmd_dispatch(config: &Config) -> Result<Stage, AppError> {
    let store = runner_store(config);
    if store.state_file().is_none() {
        tracing::warn!("GITHUB_STATE is not set, falling back to the save-state command");
    }

    let context = ActionContext::from_env()?;
    tracing::debug!(
        repository = %context.repository,
        event = %context.event_name,
        "Loaded run context"
    );

    let mut dispatcher = Dispatcher::new(store, NoopHandlers, context, config.action_name.as_str());
    dispatcher.dispatch().await
}

// =============================================================================
// STAGE COMMAND
// =============================================================================

/// Show the stage this invocation would run.
pub fn cmd_stage(config: &Config, json_mode: bool) -> Result<(), AppError> {
    let store = runner_store(config);
    println!("{}", stage_report(&store, &config.action_name, json_mode)?);
    Ok(())
}

/// Render the stage report for `store` without writing to it.
pub fn stage_report<S: StateStore>(
    store: &S,
    action_name: &str,
    json_mode: bool,
) -> Result<String, AppError> {
    let previous = store.get(PREVIOUS_STAGE_KEY);
    let stage = tristage_core::current_stage(store)?;

    if json_mode {
        let output = serde_json::json!({
            "action": action_name,
            "previous_stage": previous,
            "current_stage": stage,
            "terminal": stage.is_terminal(),
        });
        return Ok(serde_json::to_string_pretty(&output).unwrap_or_default());
    }

    let mut lines = vec![
        format!("Action:         {}", action_name),
        format!("Previous stage: {}", previous.as_deref().unwrap_or("(none)")),
        format!("Current stage:  {}", stage),
    ];
    if let Some(next) = stage.next() {
        lines.push(format!("Next stage:     {}", next));
    }
    Ok(lines.join("\n"))
}

// =============================================================================
// TESTS
// =============================================================================
