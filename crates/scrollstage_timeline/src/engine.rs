//! The tween-engine seam
//!
//! The scheduler computes absolute timeline coordinates; everything that
//! actually moves pixels lives behind [`TweenEngine`]. An engine owns the
//! scroll binding, the playhead scrubbing, easing evaluation, and property
//! interpolation. The scheduler only ever submits fully resolved work:
//! a total duration, snap labels, tweens, and calls, all in absolute time.
//!
//! [`RecordingEngine`] is the bundled engine double: it records every
//! submission in order instead of rendering, which is what the scheduler and
//! runtime tests assert against.

use scrollstage_core::{Easing, ElementHandle, PhaseCallback, PropertyMap};

use crate::config::ScrubConfig;

/// Opaque handle to the scrollable region driving a timeline
///
/// Minted by the embedding renderer, like [`ElementHandle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollTarget(u64);

impl ScrollTarget {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// External collaborator that executes a resolved timeline
///
/// The scheduler drives an engine in a fixed submission order per commit:
/// `create_timeline`, `set_duration`, labels, then per phase all tweens then
/// all calls. Engines resolve overlapping work by absolute time; submission
/// order carries no execution-order meaning.
pub trait TweenEngine {
    /// Engine-side timeline resource
    type Handle;

    /// Create a timeline bound to a scrollable region
    fn create_timeline(&mut self, target: ScrollTarget, scrub: &ScrubConfig) -> Self::Handle;

    /// Fix the timeline's total duration in scroll-distance units
    fn set_duration(&mut self, timeline: &mut Self::Handle, total_span: f32);

    /// Place a named snap label at an absolute time
    fn add_label(&mut self, timeline: &mut Self::Handle, id: &str, time: f32);

    /// Schedule a tween of `elements` toward `to` starting at absolute `start`
    fn schedule_tween(
        &mut self,
        timeline: &mut Self::Handle,
        elements: &[ElementHandle],
        to: &PropertyMap,
        duration: f32,
        easing: Easing,
        start: f32,
    );

    /// Schedule an action invocation at absolute `start`
    fn schedule_call(&mut self, timeline: &mut Self::Handle, action: PhaseCallback, start: f32);

    /// Release the timeline and its scroll binding
    fn destroy(&mut self, timeline: Self::Handle);
}

// ============================================================================
// Recording engine (test double)
// ============================================================================

/// One recorded engine submission
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    CreateTimeline {
        target: ScrollTarget,
        scrub: ScrubConfig,
    },
    SetDuration(f32),
    AddLabel {
        id: String,
        time: f32,
    },
    Tween {
        elements: Vec<ElementHandle>,
        to: PropertyMap,
        duration: f32,
        easing: Easing,
        start: f32,
    },
    /// Calls record their position only; the action itself is not comparable
    Call {
        start: f32,
    },
    Destroy,
}

/// Engine double that records submissions instead of rendering
///
/// Scheduled actions are kept so tests can fire them by hand.
#[derive(Default)]
pub struct RecordingEngine {
    events: Vec<EngineEvent>,
    actions: Vec<(f32, PhaseCallback)>,
    live_timelines: usize,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded submissions, in order
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    /// Take the recorded submissions
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    /// Scheduled actions with their absolute start times, in submission order
    pub fn actions(&self) -> &[(f32, PhaseCallback)] {
        &self.actions
    }

    /// Number of timelines created and not yet destroyed
    pub fn live_timelines(&self) -> usize {
        self.live_timelines
    }

    /// Clear all recorded state
    pub fn clear(&mut self) {
        self.events.clear();
        self.actions.clear();
    }
}

impl TweenEngine for RecordingEngine {
    type Handle = ();

    fn create_timeline(&mut self, target: ScrollTarget, scrub: &ScrubConfig) -> Self::Handle {
        self.live_timelines += 1;
        self.events.push(EngineEvent::CreateTimeline {
            target,
            scrub: *scrub,
        });
    }

    fn set_duration(&mut self, _timeline: &mut Self::Handle, total_span: f32) {
        self.events.push(EngineEvent::SetDuration(total_span));
    }

    fn add_label(&mut self, _timeline: &mut Self::Handle, id: &str, time: f32) {
        self.events.push(EngineEvent::AddLabel {
            id: id.to_string(),
            time,
        });
    }

    fn schedule_tween(
        &mut self,
        _timeline: &mut Self::Handle,
        elements: &[ElementHandle],
        to: &PropertyMap,
        duration: f32,
        easing: Easing,
        start: f32,
    ) {
        self.events.push(EngineEvent::Tween {
            elements: elements.to_vec(),
            to: to.clone(),
            duration,
            easing,
            start,
        });
    }

    fn schedule_call(&mut self, _timeline: &mut Self::Handle, action: PhaseCallback, start: f32) {
        self.events.push(EngineEvent::Call { start });
        self.actions.push((start, action));
    }

    fn destroy(&mut self, _timeline: Self::Handle) {
        self.live_timelines -= 1;
        self.events.push(EngineEvent::Destroy);
    }
}
