//! # Workflow Commands
//!
//! The runner scans stdout for lines of the form
//!
//! ```text
//! ::command key=value,key=value::message
//! ```
//!
//! Messages and property values are percent-escaped so a single command
//! never spans more than one line.

use std::fmt;
use std::io::{self, Write};

/// Severity of an annotation shown in the run log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Notice,
    Warning,
    Error,
}

impl Level {
    fn command(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

/// A single workflow command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand {
    name: String,
    properties: Vec<(String, String)>,
    message: String,
}

impl WorkflowCommand {
    /// Create a command with no properties.
    #[must_use]
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            message: message.into(),
        }
    }

    /// Build an annotation command, optionally titled.
    #[must_use]
    pub fn annotation(level: Level, message: impl Into<String>, title: Option<&str>) -> Self {
        let command = Self::new(level.command(), message);
        match title {
            Some(title) => command.property("title", title),
            None => command,
        }
    }

    /// Add a property. Properties keep insertion order.
    #[must_use]
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name)?;
        for (i, (key, value)) in self.properties.iter().enumerate() {
            let sep = if i == 0 { " " } else { "," };
            write!(f, "{}{}={}", sep, key, escape_property(value))?;
        }
        write!(f, "::{}", escape_data(&self.message))
    }
}

/// Escape a command message.
#[must_use]
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value.
#[must_use]
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

/// Write one command line to `out`.
pub fn issue_to<W: Write>(out: &mut W, command: &WorkflowCommand) -> io::Result<()> {
    writeln!(out, "{}", command)?;
    out.flush()
}

/// Write one command line to stdout.
pub fn issue(command: &WorkflowCommand) -> io::Result<()> {
    issue_to(&mut io::stdout().lock(), command)
}

/// Report a fatal failure to the host. The caller exits non-zero afterwards.
pub fn set_failed(message: &str, title: Option<&str>) {
    let command = WorkflowCommand::annotation(Level::Error, message, title);
    if let Err(e) = issue(&command) {
        tracing::error!("Could not write failure annotation: {}", e);
    }
}

// =============================================================================
// TESTS
// =============================================================================
