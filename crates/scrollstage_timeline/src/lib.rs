//! Scrollstage Timeline
//!
//! The scheduler that turns phase-relative animation declarations into an
//! absolute, scroll-driven timeline.
//!
//! # Features
//!
//! - **Phase arithmetic**: contiguous, non-overlapping absolute windows
//!   computed from each phase's entry delay and active duration
//! - **Registration handles**: `add` returns a stable id; `remove` is its
//!   exact inverse, leaving untouched entries in place
//! - **Atomic commit**: the full plan is resolved before the first engine
//!   submission, so a failed commit never leaves partial state
//! - **Engine seam**: everything that renders lives behind [`TweenEngine`];
//!   [`RecordingEngine`] is the bundled double for tests
//!
//! # Example
//!
//! ```
//! use scrollstage_core::{AnimationGroup, PhaseAnimations, PhaseCallbacks, PhaseConfig, PhaseSet, PropertyMap};
//! use scrollstage_timeline::{RecordingEngine, Scheduler, ScrollTarget, ScrubConfig};
//!
//! let mut phases = PhaseSet::new();
//! phases.add("intro", PhaseConfig::default()).unwrap();
//! phases.add("outro", PhaseConfig::default().delay(0.5)).unwrap();
//!
//! let mut scheduler = Scheduler::new(&phases, RecordingEngine::new());
//!
//! let mut group = AnimationGroup::new();
//! group.elems("title").to(PropertyMap::new().with("opacity", 1.0));
//! let mut animations = PhaseAnimations::new();
//! animations.insert("intro", group);
//! scheduler.add(animations, PhaseCallbacks::new()).unwrap();
//!
//! scheduler
//!     .commit(ScrollTarget::from_raw(1), &ScrubConfig::default())
//!     .unwrap();
//! assert_eq!(scheduler.resolved().unwrap().total_span, 2.5);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod plan;
pub mod scheduler;

pub use config::{Edge, ScrollEdge, ScrubConfig, SnapConfig};
pub use engine::{EngineEvent, RecordingEngine, ScrollTarget, TweenEngine};
pub use error::{Result, TimelineError};
pub use plan::{ResolvedCall, ResolvedPhase, ResolvedTimeline, ResolvedTween, SnapLabel};
pub use scheduler::{RegistrationId, Scheduler};
