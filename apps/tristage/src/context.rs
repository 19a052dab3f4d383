//! # Run Context
//!
//! Repository and event information the runner exposes to every step.
//! Stage bodies receive it read-only.

use crate::error::AppError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Owner and name of the repository the run belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef<'a> {
    pub owner: &'a str,
    pub repo: &'a str,
}

/// Snapshot of the runner environment for one invocation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ActionContext {
    /// `owner/repo` (`GITHUB_REPOSITORY`).
    pub repository: String,
    pub event_name: String,
    pub sha: String,
    /// Fully qualified ref (`GITHUB_REF`).
    pub git_ref: String,
    pub workflow: String,
    pub run_id: Option<u64>,
    pub actor: String,
    /// Webhook payload from `GITHUB_EVENT_PATH`, when the file exists.
    pub payload: Option<serde_json::Value>,
}

impl ActionContext {
    /// Build the context from a snapshot of environment variables.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: BTreeMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let var = |name: &str| vars.get(name).cloned().unwrap_or_default();

        let run_id = vars
            .get("GITHUB_RUN_ID")
            .map(String::as_str)
            .and_then(parse_run_id);

        let payload = match vars.get("GITHUB_EVENT_PATH") {
            Some(path) if !path.trim().is_empty() => read_payload(Path::new(path))?,
            _ => None,
        };

        Ok(Self {
            repository: var("GITHUB_REPOSITORY"),
            event_name: var("GITHUB_EVENT_NAME"),
            sha: var("GITHUB_SHA"),
            git_ref: var("GITHUB_REF"),
            workflow: var("GITHUB_WORKFLOW"),
            run_id,
            actor: var("GITHUB_ACTOR"),
            payload,
        })
    }

    /// Build the context from the current process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(std::env::vars())
    }

    /// Split `GITHUB_REPOSITORY` into owner and name.
    pub fn repo(&self) -> Result<RepoRef<'_>, AppError> {
        match self.repository.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(RepoRef { owner, repo })
            }
            _ => Err(AppError::Context(format!(
                "GITHUB_REPOSITORY must look like 'owner/repo', got '{}'",
                self.repository
            ))),
        }
    }
}

/// Parse `GITHUB_RUN_ID`. Stage bodies may not need it, so a bad value is
/// logged and dropped.
fn parse_run_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u64>() {
        Ok(id) => Some(id),
        Err(e) => {
            tracing::warn!("Ignoring GITHUB_RUN_ID '{}': {}", raw, e);
            None
        }
    }
}

/// Read the event payload. A missing file is not an error.
fn read_payload(path: &Path) -> Result<Option<serde_json::Value>, AppError> {
    if !path.exists() {
        tracing::warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
        return Ok(None);
    }

    let raw = std::fs::read_to_string(path)?;
    let payload = serde_json::from_str(&raw).map_err(|e| {
        AppError::Context(format!("invalid event payload '{}': {}", path.display(), e))
    })?;
    Ok(Some(payload))
}

// =============================================================================
// TESTS
// =============================================================================
