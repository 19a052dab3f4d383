//! # Application Errors
//!
//! Errors raised outside the core: configuration, host I/O, run context and
//! failing stage bodies. Core errors pass through unchanged.

use thiserror::Error;
use tristage_core::{Stage, TristageError};

/// Errors that can occur in the tristage binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Stage resolution or state store failure from the core.
    #[error(transparent)]
    Core(#[from] TristageError),

    /// Invalid configuration file, flag or environment variable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The run context could not be read from the runner environment.
    #[error("Context error: {0}")]
    Context(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stage body finished but its stage could not be saved.
    #[error("Stage \"{stage}\" completed but could not be saved: {source}")]
    StatePersist {
        /// The stage that ran.
        stage: Stage,
        /// Why the save failed.
        source: TristageError,
    },

    /// A stage body returned an error.
    #[error("Stage \"{stage}\" failed: {message}")]
    StageFailed {
        /// The stage whose body failed.
        stage: Stage,
        /// What went wrong.
        message: String,
    },
}

impl AppError {
    /// The stage the error belongs to, if resolution got that far.
    #[must_use]
    pub fn stage(&self) -> Option<Stage> {
        match self {
            AppError::StageFailed { stage, .. } | AppError::StatePersist { stage, .. } => {
                Some(*stage)
            }
            _ => None,
        }
    }
}
