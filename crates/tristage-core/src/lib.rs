//! # tristage-core
//!
//! Stage resolution for actions the CI host runs three times per logical run
//! (`pre`, `main`, `post`) - THE LOGIC.
//!
//! Each invocation is a separate process. The only thing carried between
//! them is the previous stage, saved in the host's state store. This crate
//! turns that one value into the [`Stage`] the current process must run.
//!
//! ## Architectural Constraints
//!
//! The core:
//! - Has NO async, NO network, NO file I/O
//! - Reaches the host state only through the [`StateStore`] trait
//! - Never writes state; persisting the finished stage is the dispatcher's job
//! - Never panics; the only resolver failure is [`TristageError::InvalidStage`]

// =============================================================================
// MODULES
// =============================================================================

pub mod classify;
pub mod resolver;
pub mod stage;
pub mod state;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use resolver::{PREVIOUS_STAGE_KEY, current_stage, resolve};
pub use stage::Stage;
pub use state::{MemoryStateStore, StateStore};
pub use types::{TristageError, Value};
