//! # Gesture Error Types
//!
//! Failures of the landmark source. None of them is fatal to the scene: the
//! prediction loop logs them and gesture control goes inert.

use thiserror::Error;

/// Errors raised while opening or polling a landmark source.
#[derive(Error, Debug)]
pub enum GestureError {
    /// The user refused camera access.
    #[error("camera permission denied")]
    PermissionDenied,

    /// The hand-landmark model could not be loaded.
    #[error("hand landmark model unavailable: {0}")]
    ModelUnavailable(String),

    /// The source hung up.
    #[error("landmark source disconnected")]
    SourceDisconnected,

    /// The prediction thread could not be started.
    #[error("failed to spawn prediction thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
}

/// Result type for gesture operations.
pub type GestureResult<T> = Result<T, GestureError>;
