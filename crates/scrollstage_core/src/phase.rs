//! Phase declarations
//!
//! A scroll region is divided into named phases. Each phase reserves a slice
//! of the overall scroll distance: an entry `delay` during which nothing in
//! the phase runs, followed by an active `duration`. Phases play strictly in
//! declaration order, so the order of [`PhaseSet::add`] calls is meaningful.
//!
//! # Example
//!
//! ```
//! use scrollstage_core::{PhaseConfig, PhaseSet};
//!
//! let mut phases = PhaseSet::new();
//! phases.add("intro", PhaseConfig::default()).unwrap();
//! phases.add("hold", PhaseConfig::default().delay(1.0).duration(2.0)).unwrap();
//! phases.add("outro", PhaseConfig::default().snap(false)).unwrap();
//!
//! assert_eq!(phases.len(), 3);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Result};

/// Timing and snap metadata for a single phase
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseConfig {
    /// Scroll distance consumed before the phase becomes active
    pub delay: f32,
    /// Scroll distance over which the phase's animations play
    pub duration: f32,
    /// Whether scrolling settles at this phase's end
    pub snap: bool,
}

impl Default for PhaseConfig {
    fn default() -> Self {
        Self {
            delay: 0.0,
            duration: 1.0,
            snap: true,
        }
    }
}

impl PhaseConfig {
    /// Set the entry delay
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Set the active duration
    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set whether scrolling snaps to this phase's end
    pub fn snap(mut self, snap: bool) -> Self {
        self.snap = snap;
        self
    }
}

/// Ordered, append-only registry of phase declarations
///
/// Phase ids are unique; declaring the same id twice is an error. There is no
/// removal: the phase skeleton is fixed for the lifetime of the scheduler
/// built from it.
#[derive(Clone, Debug, Default)]
pub struct PhaseSet {
    phases: IndexMap<String, PhaseConfig>,
}

impl PhaseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a phase declaration
    ///
    /// Fails on duplicate ids and on negative delay or duration.
    pub fn add(&mut self, id: impl Into<String>, config: PhaseConfig) -> Result<()> {
        let id = id.into();
        if config.delay < 0.0 {
            return Err(ConfigurationError::NegativeTime {
                id,
                field: "delay",
                value: config.delay,
            });
        }
        if config.duration < 0.0 {
            return Err(ConfigurationError::NegativeTime {
                id,
                field: "duration",
                value: config.duration,
            });
        }
        if self.phases.contains_key(&id) {
            return Err(ConfigurationError::DuplicatePhase(id));
        }
        self.phases.insert(id, config);
        Ok(())
    }

    /// Look up a phase's configuration
    pub fn get(&self, id: &str) -> Option<&PhaseConfig> {
        self.phases.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.phases.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Iterate phases in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PhaseConfig)> {
        self.phases.iter().map(|(id, config)| (id.as_str(), config))
    }
}
