//! # Tuning Constants
//!
//! Defaults baked into the binary. Every one of them can be overridden from
//! the TOML config at startup; these are the values used when a field is
//! absent.

// =============================================================================
// FORMATION
// =============================================================================

/// Total particles in the tree formation.
pub const DEFAULT_PARTICLE_COUNT: usize = 3000;

// =============================================================================
// MORPH
// =============================================================================

/// Exponential approach rate (per second).
pub const MORPH_RATE: f32 = 10.0;

/// Maximum per-particle L1 displacement still considered "arrived".
pub const CONVERGENCE_EPSILON: f32 = 0.5;

// =============================================================================
// GESTURE
// =============================================================================

/// Landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

/// Thumb-tip to index-tip distance below which a frame is a pinch
/// (normalized image units).
pub const PINCH_THRESHOLD: f32 = 0.08;

/// Minimum time between two accepted gesture-driven mode changes.
pub const GESTURE_COOLDOWN_MS: u64 = 3000;
