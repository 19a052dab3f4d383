//! # Stage Dispatcher
//!
//! One invocation of the action:
//!
//! 1. Resolve the current stage from the state store
//! 2. Run the matching stage body
//! 3. Persist the stage so the next invocation advances
//!
//! A failing stage body leaves the state untouched.

use crate::context::ActionContext;
use crate::error::AppError;
use std::future::Future;
use tristage_core::{PREVIOUS_STAGE_KEY, Stage, StateStore, current_stage};

// =============================================================================
// STAGE HANDLERS
// =============================================================================

/// The bodies of the three stages.
pub trait StageHandlers {
    /// Body of the `pre` step.
    fn pre_run(&self, ctx: &ActionContext) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Body of the `main` step.
    fn run(&self, ctx: &ActionContext) -> impl Future<Output = Result<(), AppError>> + Send;

    /// Body of the `post` step.
    fn post_run(&self, ctx: &ActionContext) -> impl Future<Output = Result<(), AppError>> + Send;
}

/// Stage bodies that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHandlers;

impl StageHandlers for NoopHandlers {
    async fn pre_run(&self, _ctx: &ActionContext) -> Result<(), AppError> {
        Ok(())
    }

    async fn run(&self, _ctx: &ActionContext) -> Result<(), AppError> {
        Ok(())
    }

    async fn post_run(&self, _ctx: &ActionContext) -> Result<(), AppError> {
        Ok(())
    }
}

// =============================================================================
// DISPATCHER
// =============================================================================

/// Runs one stage per invocation against a state store.
pub struct Dispatcher<S, H> {
    store: S,
    handlers: H,
    context: ActionContext,
    action_name: String,
}

impl<S: StateStore, H: StageHandlers> Dispatcher<S, H> {
    /// Create a dispatcher.
    pub fn new(store: S, handlers: H, context: ActionContext, action_name: impl Into<String>) -> Self {
        Self {
            store,
            handlers,
            context,
            action_name: action_name.into(),
        }
    }

    /// The stage this invocation would run. Reads state, writes nothing.
    pub fn resolve(&self) -> Result<Stage, AppError> {
        Ok(current_stage(&self.store)?)
    }

    /// Resolve the stage, run its body and persist it.
    pub async fn dispatch(&mut self) -> Result<Stage, AppError> {
        let stage = self.resolve()?;

        tracing::info!(
            "Starting stage \"{}\" for action \"{}\"...",
            stage,
            self.action_name
        );

        let outcome = match stage {
            Stage::PreRun => self.handlers.pre_run(&self.context).await,
            Stage::Run => self.handlers.run(&self.context).await,
            Stage::PostRun => self.handlers.post_run(&self.context).await,
        };

        outcome.map_err(|e| match e {
            AppError::StageFailed { .. } => e,
            other => AppError::StageFailed {
                stage,
                message: other.to_string(),
            },
        })?;

        self.store
            .save(PREVIOUS_STAGE_KEY, stage.as_str())
            .map_err(|source| AppError::StatePersist { stage, source })?;

        tracing::info!(
            "Stage \"{}\" for action \"{}\" completed successfully",
            stage,
            self.action_name
        );
        Ok(stage)
    }

    /// Name used in log lines and annotations.
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Borrow the state store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Take the state store back.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Title of the failure annotation shown on the run summary.
pub fn failure_title(error: &AppError, action_name: &str) -> String {
    match error.stage() {
        Some(stage) => format!(
            "Stage \"{}\" for action \"{}\" failed due to a fatal error",
            stage, action_name
        ),
        None => format!("Could not run action \"{}\"", action_name),
    }
}

// =============================================================================
// TESTS
// =============================================================================
