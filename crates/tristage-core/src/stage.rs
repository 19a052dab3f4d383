//! # Action Stages
//!
//! The host runs an action three times per logical run. Each run is one
//! [`Stage`]:
//!
//! | Stage | Identifier | Host step |
//! |-------|------------|-----------|
//! | `PreRun` | `pre-run` | `pre` |
//! | `Run` | `run` | `main` |
//! | `PostRun` | `post-run` | `post` |
//!
//! The identifier is both the in-memory tag and the value persisted in the
//! host state store between invocations. `Display`, `FromStr` and serde all
//! go through [`Stage::as_str`] so the two can never drift apart.

use crate::TristageError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// =============================================================================
// STAGE ENUM
// =============================================================================

/// One of the three ordered phases of an action run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Runs before the main step.
    PreRun,
    /// The main step.
    Run,
    /// Runs after the main step, even when the job failed.
    PostRun,
}

impl Stage {
    /// All stages in execution order.
    pub const ALL: [Stage; 3] = [Stage::PreRun, Stage::Run, Stage::PostRun];

    /// The persisted identifier of this stage.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stage::PreRun => "pre-run",
            Stage::Run => "run",
            Stage::PostRun => "post-run",
        }
    }

    /// Get the next stage, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Stage> {
        match self {
            Stage::PreRun => Some(Stage::Run),
            Stage::Run => Some(Stage::PostRun),
            Stage::PostRun => None,
        }
    }

    /// Check if this stage is the last one of a run.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Stage::PostRun)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = TristageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| TristageError::UnknownStage(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
