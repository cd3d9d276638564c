//! Resolved timeline plan
//!
//! The output of a resolution pass: every registered animation and callback
//! mapped to absolute timeline coordinates, plus the snap labels. A plan is
//! built completely before anything is submitted to the engine, so a failed
//! commit can never leave a half-scheduled timeline behind.

use std::fmt;

use scrollstage_core::{Easing, ElementHandle, PhaseCallback, PropertyMap};

/// A named absolute-time marker the scroll driver settles on
#[derive(Clone, Debug, PartialEq)]
pub struct SnapLabel {
    pub id: String,
    pub time: f32,
}

/// A tween resolved to absolute coordinates
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTween {
    pub elements: Vec<ElementHandle>,
    pub to: PropertyMap,
    pub easing: Easing,
    pub start: f32,
    pub duration: f32,
}

/// A callback invocation resolved to an absolute time
#[derive(Clone)]
pub struct ResolvedCall {
    pub action: PhaseCallback,
    pub start: f32,
}

impl fmt::Debug for ResolvedCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCall")
            .field("start", &self.start)
            .finish_non_exhaustive()
    }
}

/// One phase's slice of the resolved timeline
#[derive(Clone, Debug)]
pub struct ResolvedPhase {
    pub id: String,
    /// Absolute start of the active window, after the phase's entry delay
    pub start: f32,
    /// Active duration; the window ends at `start + duration`
    pub duration: f32,
    pub tweens: Vec<ResolvedTween>,
    pub calls: Vec<ResolvedCall>,
}

impl ResolvedPhase {
    /// Absolute end of the active window
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }
}

/// The fully resolved global timeline
#[derive(Clone, Debug, Default)]
pub struct ResolvedTimeline {
    /// Total scroll-distance span, `Σ(delay + duration)` over all phases
    pub total_span: f32,
    /// Snap labels in emission order: the origin label first, then one per
    /// snapping phase at its end time
    pub labels: Vec<SnapLabel>,
    /// Phases in declaration order
    pub phases: Vec<ResolvedPhase>,
}

impl ResolvedTimeline {
    /// Total number of resolved tweens across all phases
    pub fn tween_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.tweens.len()).sum()
    }

    /// Total number of resolved calls across all phases
    pub fn call_count(&self) -> usize {
        self.phases.iter().map(|phase| phase.calls.len()).sum()
    }
}
