//! Animatable property targets
//!
//! An element animation carries a map of property names to target values.
//! The map is opaque to the scheduler: how a property is parsed, interpolated,
//! or written back to an element is entirely the tween engine's concern. The
//! map preserves insertion order so the engine receives properties in the
//! order they were authored.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A target value for a single animatable property
///
/// Numeric targets cover plain scalar properties (opacity, x, rotation).
/// Textual targets cover unit-suffixed or keyword values the engine parses
/// itself ("100%", "50vh", "#1f2933").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f32),
    Text(String),
}

impl From<f32> for PropertyValue {
    fn from(value: f32) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(value as f32)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// Ordered property-name → target-value map
///
/// # Example
///
/// ```
/// use scrollstage_core::PropertyMap;
///
/// let props = PropertyMap::new()
///     .with("opacity", 0.0)
///     .with("y", "-100%");
/// assert_eq!(props.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    values: IndexMap<String, PropertyValue>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property target, replacing any previous value for the same name
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Chaining form of [`set`](Self::set)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate properties in authoring order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}
