//! Time-triggered callbacks
//!
//! Callbacks fire at a single point inside a phase, positioned by a fraction
//! of the phase's duration. They are bucketed by phase id and handed to the
//! scheduler alongside the animation groups of the same registration site.

use std::fmt;
use std::sync::Arc;

use crate::error::{ConfigurationError, Result};

/// Shared zero-argument action invoked by the tween engine at its scheduled time
pub type PhaseCallback = Arc<dyn Fn() + Send + Sync>;

/// One callback positioned within a phase
#[derive(Clone)]
pub struct CallbackEntry {
    time: f32,
    action: PhaseCallback,
}

impl CallbackEntry {
    pub fn new(time: f32, action: PhaseCallback) -> Self {
        Self { time, action }
    }

    /// Position as a fraction of the owning phase's duration
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn action(&self) -> &PhaseCallback {
        &self.action
    }

    /// Check that the time fraction lies in the unit interval
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.time) {
            return Err(ConfigurationError::FractionOutOfRange {
                field: "time",
                value: self.time,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for CallbackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackEntry")
            .field("time", &self.time)
            .finish_non_exhaustive()
    }
}

/// Callback entries bucketed by phase id, built by one registration site
///
/// # Example
///
/// ```
/// use scrollstage_core::PhaseCallbacks;
///
/// let mut callbacks = PhaseCallbacks::new();
/// callbacks.add("intro", 0.5, || {});
/// callbacks.add("intro", 1.0, || {});
/// ```
#[derive(Clone, Debug, Default)]
pub struct PhaseCallbacks {
    entries: Vec<(String, CallbackEntry)>,
}

impl PhaseCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a callback to a phase's ordered list
    pub fn add(&mut self, phase: impl Into<String>, time: f32, action: impl Fn() + Send + Sync + 'static) {
        self.entries
            .push((phase.into(), CallbackEntry::new(time, Arc::new(action))));
    }

    /// Append an already-shared callback
    pub fn add_shared(&mut self, phase: impl Into<String>, time: f32, action: PhaseCallback) {
        self.entries
            .push((phase.into(), CallbackEntry::new(time, action)));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate `(phase id, entry)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CallbackEntry)> {
        self.entries.iter().map(|(phase, entry)| (phase.as_str(), entry))
    }
}

impl IntoIterator for PhaseCallbacks {
    type Item = (String, CallbackEntry);
    type IntoIter = std::vec::IntoIter<(String, CallbackEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
