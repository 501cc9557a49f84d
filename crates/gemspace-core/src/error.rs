//! Error types for gemspace.

use thiserror::Error;

/// The main error type for gemspace operations.
///
/// Frame computation itself never fails; these errors come from
/// configuration handling and engine lifecycle misuse.
#[derive(Error, Debug)]
pub enum GemspaceError {
    /// A configuration value is outside its valid range.
    #[error("invalid option '{name}': {reason}")]
    InvalidOption {
        name: &'static str,
        reason: String,
    },

    /// The overlay engine is already running.
    #[error("overlay engine already started")]
    AlreadyStarted,

    /// The overlay engine is not running.
    #[error("overlay engine not started")]
    NotStarted,

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for gemspace operations.
pub type Result<T> = std::result::Result<T, GemspaceError>;
