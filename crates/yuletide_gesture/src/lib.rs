//! # YULETIDE Gesture
//!
//! Turns a noisy stream of hand-landmark frames into rate-limited view mode
//! requests.
//!
//! ```text
//! LandmarkSource ──> GestureClassifier ──┬──> HandState (every frame)
//!                                        └──> GestureDebouncer ──> ViewModeController
//!                                                   (3s cooldown)
//! ```
//!
//! All of it runs on the [`PredictionLoop`] thread. The render tick only
//! ever sees the two atomics it reads from.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod classifier;
pub mod debouncer;
pub mod error;
pub mod landmarks;
pub mod poses;
pub mod prediction;

pub use classifier::{Classification, Gesture, GestureClassifier, GestureConfig};
pub use debouncer::{GestureDebouncer, ModeTransition};
pub use error::{GestureError, GestureResult};
pub use landmarks::HandLandmarks;
pub use prediction::{
    ChannelLandmarkSource, LandmarkSource, LoopOutputs, LoopSnapshot, PredictionLoop,
};
