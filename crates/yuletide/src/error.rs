//! # YULETIDE Error Types
//!
//! Startup errors. Nothing on the render tick can fail.

use std::path::PathBuf;
use thiserror::Error;

use yuletide_gesture::GestureError;

/// Errors raised while assembling the scene.
#[derive(Error, Debug)]
pub enum YuletideError {
    /// Config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`crate::YuletideConfig`].
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written out.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Config parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Gesture subsystem failure.
    #[error(transparent)]
    Gesture(#[from] GestureError),
}

/// Result type for scene assembly.
pub type YuletideResult<T> = Result<T, YuletideError>;
