//! # State Store
//!
//! The host keeps a small key-value store that survives across the three
//! invocations of a run. The core only needs a single read of it; the
//! dispatcher writes the finished stage back through [`StateStore::save`].

use crate::TristageError;
use std::collections::BTreeMap;

/// Access to the host's cross-invocation state.
pub trait StateStore {
    /// Read a state entry. `None` when the entry was never saved.
    fn get(&self, key: &str) -> Option<String>;

    /// Persist a state entry for the following invocations.
    fn save(&mut self, key: &str, value: &str) -> Result<(), TristageError>;
}

/// Reject keys the host cannot address.
pub fn validate_key(key: &str) -> Result<(), TristageError> {
    if key.trim().is_empty() {
        return Err(TristageError::InvalidStateKey(key.to_string()));
    }
    Ok(())
}

/// In-memory state store.
///
/// Used by tests and by dry runs where nothing should reach the host.
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStateStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single entry.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }

    /// Number of saved entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), TristageError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
