//! # YULETIDE Core
//!
//! Runtime state shared between the render tick and the gesture loop.
//!
//! ## Threading
//!
//! ```text
//! Gesture thread ──> ViewModeController (AtomicU8) ──┐
//!                └─> HandState (AtomicU64) ──────────┤
//! UI ───────────────> ViewModeController ────────────┤
//!                                                    v
//! Render tick ──> MorphEngine::tick ──> positions ──> renderer
//!             └─> CameraRig::update
//! ```
//!
//! The two loops never block each other. Every shared field has exactly one
//! writer per source and fits in one atomic word.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod camera;
pub mod hand;
pub mod morph;
pub mod view_mode;

pub use camera::{CameraRig, CameraRigConfig, Orientation};
pub use hand::HandState;
pub use morph::{MorphConfig, MorphEngine, PhaseEvent, TickReport, TransitionPhase};
pub use view_mode::ViewModeController;
