//! Element animations and animation groups
//!
//! An [`ElementAnimation`] describes one tween applied to a set of elements
//! sharing a tag: the target property values, an easing identifier, and the
//! `[start, end]` window expressed as fractions of the owning phase's
//! duration. Concrete element handles are usually not known when the
//! animation is authored; they are bound later, by tag, through the owning
//! scheduler as elements come into existence.
//!
//! An [`AnimationGroup`] collects the animations authored by one component,
//! and a [`PhaseAnimations`] map buckets groups by phase id for registration.
//!
//! # Example
//!
//! ```
//! use scrollstage_core::{AnimationGroup, Easing, PhaseAnimations, PropertyMap};
//!
//! let mut group = AnimationGroup::new();
//! group
//!     .elems("title")
//!     .to(PropertyMap::new().with("opacity", 0.0).with("y", "-40%"))
//!     .ease(Easing::Power1InOut)
//!     .start(0.25)
//!     .end(0.75);
//!
//! let mut animations = PhaseAnimations::new();
//! animations.insert("intro", group);
//! ```

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::error::{ConfigurationError, Result};
use crate::property::PropertyMap;

/// Opaque handle to a concrete element owned by the embedding renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Wrap a raw id minted by the embedding renderer
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Unwrap back to the raw id
    pub fn to_raw(self) -> u64 {
        self.0
    }
}

/// One tween applied identically to every element bound to its tag
#[derive(Clone, Debug)]
pub struct ElementAnimation {
    tag: String,
    to: PropertyMap,
    easing: Easing,
    start: f32,
    end: f32,
    elements: SmallVec<[ElementHandle; 2]>,
}

impl ElementAnimation {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            to: PropertyMap::new(),
            easing: Easing::None,
            start: 0.0,
            end: 1.0,
            elements: SmallVec::new(),
        }
    }

    /// Set the target property values
    pub fn to(&mut self, properties: PropertyMap) -> &mut Self {
        self.to = properties;
        self
    }

    /// Set the easing identifier handed through to the tween engine
    pub fn ease(&mut self, easing: Easing) -> &mut Self {
        self.easing = easing;
        self
    }

    /// Set the start fraction within the owning phase's duration
    pub fn start(&mut self, fraction: f32) -> &mut Self {
        self.start = fraction;
        self
    }

    /// Set the end fraction within the owning phase's duration
    pub fn end(&mut self, fraction: f32) -> &mut Self {
        self.end = fraction;
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.to
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn start_fraction(&self) -> f32 {
        self.start
    }

    pub fn end_fraction(&self) -> f32 {
        self.end
    }

    /// Attach a concrete element handle
    ///
    /// Handles are appended, not de-duplicated; binding the same element
    /// twice is a caller error.
    pub fn bind(&mut self, element: ElementHandle) {
        self.elements.push(element);
    }

    /// The elements currently bound to this animation
    pub fn elements(&self) -> &[ElementHandle] {
        &self.elements
    }

    /// Check the fraction window invariants
    ///
    /// Fractions must lie in the unit interval with `start <= end`.
    /// Violations are caller errors, never clamped.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.start) {
            return Err(ConfigurationError::FractionOutOfRange {
                field: "start",
                value: self.start,
            });
        }
        if !(0.0..=1.0).contains(&self.end) {
            return Err(ConfigurationError::FractionOutOfRange {
                field: "end",
                value: self.end,
            });
        }
        if self.start > self.end {
            return Err(ConfigurationError::InvalidFractions {
                tag: self.tag.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Ordered collection of animations authored together
#[derive(Clone, Debug, Default)]
pub struct AnimationGroup {
    animations: Vec<ElementAnimation>,
}

impl AnimationGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fresh animation for `tag` and return it for configuration
    pub fn elems(&mut self, tag: impl Into<String>) -> &mut ElementAnimation {
        self.animations.push(ElementAnimation::new(tag));
        self.animations.last_mut().unwrap()
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Iterate animations in authoring order
    pub fn iter(&self) -> impl Iterator<Item = &ElementAnimation> {
        self.animations.iter()
    }
}

impl IntoIterator for AnimationGroup {
    type Item = ElementAnimation;
    type IntoIter = std::vec::IntoIter<ElementAnimation>;

    fn into_iter(self) -> Self::IntoIter {
        self.animations.into_iter()
    }
}

/// Animation groups bucketed by phase id, built by one registration site
#[derive(Clone, Debug, Default)]
pub struct PhaseAnimations {
    groups: Vec<(String, AnimationGroup)>,
}

impl PhaseAnimations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contribute a group to a phase
    ///
    /// The same phase may receive several groups; contribution order is
    /// preserved through registration and resolution.
    pub fn insert(&mut self, phase: impl Into<String>, group: AnimationGroup) {
        self.groups.push((phase.into(), group));
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate `(phase id, group)` pairs in contribution order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnimationGroup)> {
        self.groups.iter().map(|(phase, group)| (phase.as_str(), group))
    }
}

impl IntoIterator for PhaseAnimations {
    type Item = (String, AnimationGroup);
    type IntoIter = std::vec::IntoIter<(String, AnimationGroup)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}
