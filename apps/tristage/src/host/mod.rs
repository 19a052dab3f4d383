//! # Host Integration
//!
//! Bridges the core [`StateStore`] seam to the CI runner.
//!
//! ## State Protocol
//!
//! - Saved state comes back as environment variables named `STATE_<key>`
//!   in every later step of the same job.
//! - New state is appended to the file named by `GITHUB_STATE`:
//!
//! ```text
//! previous-stage<<ghadelimiter_<uuid>
//! run
//! ghadelimiter_<uuid>
//! ```
//!
//! - Without a state file, the legacy `::save-state name=<key>::<value>`
//!   stdout command is used instead.

pub mod annotations;

use annotations::WorkflowCommand;
use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tristage_core::state::validate_key;
use tristage_core::{StateStore, TristageError};

/// Prefix of the environment variables the runner sets for saved state.
pub const STATE_ENV_PREFIX: &str = "STATE_";

/// Environment variable holding the path of the state file.
pub const STATE_FILE_ENV: &str = "GITHUB_STATE";

// =============================================================================
// ENV STATE STORE
// =============================================================================

/// State store backed by the runner's `STATE_*` variables and state file.
#[derive(Debug, Clone, Default)]
pub struct EnvStateStore {
    entries: BTreeMap<String, String>,
    state_file: Option<PathBuf>,
}

impl EnvStateStore {
    /// Build a store from a snapshot of environment variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self::default();
        for (key, value) in vars {
            let key = key.into();
            let value = value.into();
            if key == STATE_FILE_ENV {
                if !value.trim().is_empty() {
                    store.state_file = Some(PathBuf::from(value));
                }
            } else if let Some(name) = key.strip_prefix(STATE_ENV_PREFIX) {
                store.entries.insert(name.to_string(), value);
            }
        }
        store
    }

    /// Build a store from the current process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Override the state file. `None` keeps the one found in the environment.
    #[must_use]
    pub fn with_state_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.state_file = path;
        }
        self
    }

    /// The state file saves are appended to, if any.
    #[must_use]
    pub fn state_file(&self) -> Option<&Path> {
        self.state_file.as_deref()
    }
}

impl StateStore for EnvStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), TristageError> {
        validate_key(key)?;

        match &self.state_file {
            Some(path) => append_state(path, key, value)?,
            None => {
                let command = WorkflowCommand::new("save-state", value).property("name", key);
                annotations::issue(&command)
                    .map_err(|e| TristageError::StateIo(format!("stdout: {}", e)))?;
            }
        }

        tracing::debug!(key, value, "Saved state");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// STATE FILE
// =============================================================================

/// Format a `key<<delimiter` block for a file command.
///
/// Fails if the key or value contains the delimiter, since the runner would
/// end the block early.
pub fn key_value_message(key: &str, value: &str, delimiter: &str) -> Result<String, TristageError> {
    if key.contains(delimiter) {
        return Err(TristageError::StateIo(format!(
            "state key '{}' contains the delimiter '{}'",
            key, delimiter
        )));
    }
    if value.contains(delimiter) {
        return Err(TristageError::StateIo(format!(
            "state value for '{}' contains the delimiter '{}'",
            key, delimiter
        )));
    }
    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}"))
}

/// Append a state entry to the runner's state file.
///
/// The file must already exist; the runner creates it for each step.
pub fn append_state(path: &Path, key: &str, value: &str) -> Result<(), TristageError> {
    let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
    let message = key_value_message(key, value, &delimiter)?;

    let mut file = OpenOptions::new().append(true).open(path).map_err(|e| {
        TristageError::StateIo(format!("cannot open state file '{}': {}", path.display(), e))
    })?;

    writeln!(file, "{}", message).map_err(|e| {
        TristageError::StateIo(format!("cannot write state file '{}': {}", path.display(), e))
    })
}

// =============================================================================
// TESTS
// =============================================================================
