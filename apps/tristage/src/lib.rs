//! # tristage
//!
//! The action binary's library: everything around the core stage resolver
//! that touches the host.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                apps/tristage (THE BINARY)            │
//! │                                                      │
//! │  ┌──────────┐   ┌────────────┐   ┌────────────────┐  │
//! │  │   CLI    │──►│ Dispatcher │──►│ Stage handlers │  │
//! │  │  (clap)  │   │            │   │ (pre/run/post) │  │
//! │  └──────────┘   └─────┬──────┘   └────────────────┘  │
//! │                       │                              │
//! │        ┌──────────────┼───────────────┐              │
//! │        ▼                              ▼              │
//! │  ┌───────────────┐           ┌──────────────────┐    │
//! │  │ tristage-core │           │ host (STATE_*,   │    │
//! │  │ (THE LOGIC)   │           │ GITHUB_STATE)    │    │
//! │  └───────────────┘           └──────────────────┘    │
//! └──────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod host;

pub use config::{Config, LogFormat};
pub use context::ActionContext;
pub use dispatch::{Dispatcher, NoopHandlers, StageHandlers};
pub use error::AppError;
pub use host::EnvStateStore;
