//! # Core Type Definitions
//!
//! This module contains the shared types for tristage:
//! - The dynamic input value the classifiers inspect (`Value`)
//! - Error types (`TristageError`)
//!
//! `Value` keeps "undefined" (never set) and "null" (explicitly empty) apart,
//! because the classifier predicates treat the two differently.

use thiserror::Error;

// =============================================================================
// DYNAMIC VALUE
// =============================================================================

/// A dynamically typed value as handed over by the host environment.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The value was never set.
    #[default]
    Undefined,
    /// The value was explicitly set to nothing.
    Null,
    /// A string value.
    String(String),
    /// A numeric value. May be NaN or infinite.
    Number(f64),
    /// A boolean value.
    Boolean(bool),
    /// Any other runtime type (arrays, maps, ...).
    Object,
}

impl Value {
    /// Wrap a raw state-store read. A missing entry is `Undefined`.
    #[must_use]
    pub fn from_state(raw: Option<String>) -> Self {
        raw.map_or(Self::Undefined, Self::String)
    }

    /// Get the value as a string slice, if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Render the value the way it appears in diagnostics.
    #[must_use]
    pub fn to_raw_string(&self) -> String {
        match self {
            Self::Undefined => "undefined".to_string(),
            Self::Null => "null".to_string(),
            Self::String(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Object => "[object]".to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in tristage-core.
///
/// - No silent failures
/// - Use `Result<T, TristageError>` for fallible operations
/// - Nothing in the core panics
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TristageError {
    /// The persisted previous stage has no successor or is not a stage at all.
    #[error("Invalid previous stage \"{0}\"")]
    InvalidStage(String),

    /// A string could not be parsed as a stage identifier.
    #[error("Unknown stage \"{0}\"")]
    UnknownStage(String),

    /// A state key was empty or otherwise unusable.
    #[error("Invalid state key \"{0}\"")]
    InvalidStateKey(String),

    /// The state store could not be written.
    #[error("State store I/O error: {0}")]
    StateIo(String),
}

// =============================================================================
// TESTS
// =============================================================================
