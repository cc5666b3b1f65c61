//! # YULETIDE Shared
//!
//! Common types used by every YULETIDE crate.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on a renderer, a camera stack or an inference
//! runtime. It only holds plain data: vectors, constants and the view-mode
//! vocabulary that both the render tick and the gesture loop agree on.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;
pub mod mode;

pub use constants::{
    CONVERGENCE_EPSILON, DEFAULT_PARTICLE_COUNT, GESTURE_COOLDOWN_MS, LANDMARK_COUNT,
    MORPH_RATE, PINCH_THRESHOLD,
};
pub use math::{Vec2, Vec3};
pub use mode::{FormationName, ViewMode};
