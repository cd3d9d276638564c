//! Scrub and snap configuration
//!
//! These values parameterize the engine-side scroll binding and are handed
//! through [`TweenEngine::create_timeline`](crate::engine::TweenEngine) without
//! interpretation by the scheduler. All types derive serde so host
//! applications can keep them in their configuration files.

use scrollstage_core::Easing;
use serde::{Deserialize, Serialize};

/// Edge of a box used when expressing scroll trigger positions
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edge {
    #[default]
    Top,
    Center,
    Bottom,
}

/// A scroll trigger position: which edge of the region meets which edge of
/// the viewport
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollEdge {
    pub region: Edge,
    pub viewport: Edge,
}

impl Default for ScrollEdge {
    fn default() -> Self {
        Self::top_top()
    }
}

impl ScrollEdge {
    /// Region top meets viewport top
    pub fn top_top() -> Self {
        Self {
            region: Edge::Top,
            viewport: Edge::Top,
        }
    }

    /// Region bottom meets viewport bottom
    pub fn bottom_bottom() -> Self {
        Self {
            region: Edge::Bottom,
            viewport: Edge::Bottom,
        }
    }
}

/// How scrolling settles at snap labels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Seconds to wait after scrolling stops before snapping
    pub delay: f32,
    /// Shortest allowed snap transition, in seconds
    pub min_duration: f32,
    /// Longest allowed snap transition, in seconds
    pub max_duration: f32,
    /// Easing applied to the snap transition
    pub easing: Easing,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            delay: 0.0,
            min_duration: 1.0,
            max_duration: 2.0,
            easing: Easing::Power1InOut,
        }
    }
}

/// Scroll binding configuration handed through to the tween engine
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubConfig {
    /// Smoothing factor: seconds the playhead takes to catch up to the
    /// scroll position
    pub scrub: f32,
    /// Where the timeline starts tracking scroll position
    pub start: ScrollEdge,
    /// Where the timeline stops tracking scroll position
    pub end: ScrollEdge,
    /// Snap behavior at phase boundaries
    pub snap: SnapConfig,
}

impl Default for ScrubConfig {
    fn default() -> Self {
        Self {
            scrub: 2.0,
            start: ScrollEdge::top_top(),
            end: ScrollEdge::bottom_bottom(),
            snap: SnapConfig::default(),
        }
    }
}
