//! Scrollstage Core
//!
//! This crate provides the foundational primitives for the scrollstage
//! scroll-animation system:
//!
//! - **Phases**: ordered, named segments of scroll distance with entry delay,
//!   active duration, and optional snap markers
//! - **Element Animations**: tagged tween descriptions with fluent
//!   configuration and late element binding
//! - **Callbacks**: time-positioned actions bucketed by phase
//! - **Properties**: opaque target-value maps handed through to the engine
//!
//! The scheduler that turns these declarations into an absolute timeline
//! lives in `scrollstage_timeline`; this crate has no engine dependency.
//!
//! # Example
//!
//! ```
//! use scrollstage_core::{
//!     AnimationGroup, PhaseAnimations, PhaseCallbacks, PhaseConfig, PhaseSet, PropertyMap,
//! };
//!
//! // Declare the phase skeleton once.
//! let mut phases = PhaseSet::new();
//! phases.add("intro", PhaseConfig::default()).unwrap();
//! phases.add("outro", PhaseConfig::default().delay(1.0)).unwrap();
//!
//! // Each registration site contributes groups and callbacks per phase.
//! let mut group = AnimationGroup::new();
//! group.elems("title").to(PropertyMap::new().with("opacity", 1.0));
//!
//! let mut animations = PhaseAnimations::new();
//! animations.insert("intro", group);
//!
//! let mut callbacks = PhaseCallbacks::new();
//! callbacks.add("outro", 1.0, || {});
//! ```

pub mod animation;
pub mod callbacks;
pub mod easing;
pub mod error;
pub mod phase;
pub mod property;

pub use animation::{AnimationGroup, ElementAnimation, ElementHandle, PhaseAnimations};
pub use callbacks::{CallbackEntry, PhaseCallback, PhaseCallbacks};
pub use easing::Easing;
pub use error::{ConfigurationError, Result};
pub use phase::{PhaseConfig, PhaseSet};
pub use property::{PropertyMap, PropertyValue};
