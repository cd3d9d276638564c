//! Error types for scrollstage_core

use thiserror::Error;

/// Errors raised while declaring phases, animations, or callbacks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A phase id was declared twice in the same phase set
    #[error("phase {0:?} is already declared")]
    DuplicatePhase(String),

    /// An animation or callback referenced a phase id that was never declared
    #[error("phase {0:?} is not declared in the phase set")]
    UnknownPhase(String),

    /// A phase was declared with a negative delay or duration
    #[error("phase {id:?} has a negative {field}: {value}")]
    NegativeTime {
        id: String,
        field: &'static str,
        value: f32,
    },

    /// An element animation's start fraction lies after its end fraction
    #[error("animation {tag:?} has start fraction {start} after end fraction {end}")]
    InvalidFractions { tag: String, start: f32, end: f32 },

    /// A fraction lies outside the unit interval
    #[error("{field} fraction {value} is outside 0.0..=1.0")]
    FractionOutOfRange { field: &'static str, value: f32 },
}

/// Result type for scrollstage_core operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
