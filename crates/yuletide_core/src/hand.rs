//! # Hand State
//!
//! The hand position published by the gesture loop and read by the camera
//! rig. Both coordinates live in one `AtomicU64`, so a reader always sees a
//! pair written by the same store.

use std::sync::atomic::{AtomicU64, Ordering};

use yuletide_shared::Vec2;

/// Centre of the image, before any hand has been seen.
const REST: Vec2 = Vec2::new(0.5, 0.5);

/// Latest hand position in normalized image space (single writer).
#[derive(Debug)]
pub struct HandState {
    bits: AtomicU64,
    /// Number of positions published.
    updates: AtomicU64,
}

impl HandState {
    /// Creates a cell holding the image centre.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bits: AtomicU64::new(REST.to_bits()),
            updates: AtomicU64::new(0),
        }
    }

    /// Publishes a new position (gesture thread only).
    #[inline]
    pub fn publish(&self, position: Vec2) {
        self.bits.store(position.to_bits(), Ordering::Release);
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Latest position.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vec2 {
        Vec2::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Total positions published.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }
}

impl Default for HandState {
    fn default() -> Self {
        Self::new()
    }
}
