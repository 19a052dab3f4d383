//! # Stage Resolver
//!
//! Works out which stage the current process is, from the previous stage
//! persisted by the host.
//!
//! ```text
//! absent / blank ──► PreRun
//! "pre-run"      ──► Run
//! "run"          ──► PostRun
//! "post-run"     ──► InvalidStage   (nothing follows the last stage)
//! anything else  ──► InvalidStage
//! ```
//!
//! Only the previous stage is stored, so resolution is a successor function
//! over the cycle rather than a lookup. There is no fallback: an unrecognized
//! non-blank value always fails.

use crate::classify::is_null_or_undefined_or_string_and_empty_or_whitespace;
use crate::state::StateStore;
use crate::{Stage, TristageError, Value};

/// State key holding the identifier of the last completed stage.
pub const PREVIOUS_STAGE_KEY: &str = "previous-stage";

/// Resolve the current stage from the previous-stage value.
pub fn resolve(previous: &Value) -> Result<Stage, TristageError> {
    if is_null_or_undefined_or_string_and_empty_or_whitespace(previous) {
        return Ok(Stage::PreRun);
    }

    // Exact match on the raw value: " run" is not "run".
    match previous.as_str() {
        Some(raw) if raw == Stage::PreRun.as_str() => Ok(Stage::Run),
        Some(raw) if raw == Stage::Run.as_str() => Ok(Stage::PostRun),
        _ => Err(TristageError::InvalidStage(previous.to_raw_string())),
    }
}

/// Read the previous stage from `store` once and resolve the current stage.
pub fn current_stage<S: StateStore + ?Sized>(store: &S) -> Result<Stage, TristageError> {
    let previous = Value::from_state(store.get(PREVIOUS_STAGE_KEY));
    resolve(&previous)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStateStore;

    #[test]
    fn absent_previous_is_pre_run() {
        assert_eq!(resolve(&Value::Undefined), Ok(Stage::PreRun));
        assert_eq!(resolve(&Value::Null), Ok(Stage::PreRun));
    }

    #[test]
    fn blank_previous_is_pre_run() {
        assert_eq!(resolve(&Value::from("")), Ok(Stage::PreRun));
        assert_eq!(resolve(&Value::from("   ")), Ok(Stage::PreRun));
    }

    #[test]
    fn successors() {
        assert_eq!(resolve(&Value::from("pre-run")), Ok(Stage::Run));
        assert_eq!(resolve(&Value::from("run")), Ok(Stage::PostRun));
    }

    #[test]
    fn terminal_previous_is_invalid() {
        let err = resolve(&Value::from("post-run")).expect_err("post-run has no successor");
        assert_eq!(err, TristageError::InvalidStage("post-run".to_string()));
        assert!(err.to_string().contains("\"post-run\""));
    }

    #[test]
    fn unrecognized_previous_is_invalid() {
        let err = resolve(&Value::from("setup")).expect_err("unknown stage");
        assert!(err.to_string().contains("\"setup\""));
    }

    #[test]
    fn padded_identifier_is_not_coerced() {
        assert_eq!(
            resolve(&Value::from(" run ")),
            Err(TristageError::InvalidStage(" run ".to_string()))
        );
        assert!(resolve(&Value::from("RUN")).is_err());
    }

    #[test]
    fn non_string_previous_is_invalid() {
        assert!(resolve(&Value::from(1.0)).is_err());
        assert!(resolve(&Value::from(false)).is_err());
    }

    #[test]
    fn current_stage_reads_previous_stage_key() {
        let fresh = MemoryStateStore::new();
        assert_eq!(current_stage(&fresh), Ok(Stage::PreRun));

        let after_pre = MemoryStateStore::with_entry(PREVIOUS_STAGE_KEY, "pre-run");
        assert_eq!(current_stage(&after_pre), Ok(Stage::Run));

        let other_key = MemoryStateStore::with_entry("stage", "pre-run");
        assert_eq!(current_stage(&other_key), Ok(Stage::PreRun));
    }
}
