//! Error types for scrollstage_timeline

use scrollstage_core::ConfigurationError;
use thiserror::Error;

/// Errors raised by the scheduler
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    /// A phase, animation, or callback declaration is invalid
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    /// `commit` was called while a committed timeline is still live
    #[error("timeline is already committed; release it before committing again")]
    AlreadyCommitted,

    /// `release` was called without a live committed timeline
    #[error("timeline is not committed")]
    NotCommitted,

    /// `remove` was called with a handle that was never issued or was
    /// already removed
    #[error("registration handle is unknown or already removed")]
    UnknownRegistration,
}

/// Result type for scrollstage_timeline operations
pub type Result<T> = std::result::Result<T, TimelineError>;
