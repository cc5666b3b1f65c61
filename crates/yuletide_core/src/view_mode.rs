//! # View Mode Controller
//!
//! Stores the most recently requested [`ViewMode`]. Writers are the UI and
//! the gesture debouncer; the only reader is the morph engine on the render
//! tick. Any mode may be requested from any mode.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};

use yuletide_shared::ViewMode;

/// Requested view mode (lock-free).
#[derive(Debug)]
pub struct ViewModeController {
    /// Current request, as `ViewMode as u8`.
    requested: AtomicU8,
    /// Number of requests that changed the value.
    changes: AtomicU64,
}

impl ViewModeController {
    /// Creates a controller starting in TREE.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_mode(ViewMode::Tree)
    }

    /// Creates a controller starting in `mode`.
    #[must_use]
    pub const fn with_mode(mode: ViewMode) -> Self {
        Self {
            requested: AtomicU8::new(mode as u8),
            changes: AtomicU64::new(0),
        }
    }

    /// Requests `mode`. Returns `true` when the stored value changed.
    ///
    /// Re-requesting the current mode is a no-op, so this is safe to call
    /// every frame.
    pub fn request(&self, mode: ViewMode) -> bool {
        let old = self.requested.swap(mode as u8, Ordering::AcqRel);
        let changed = old != mode as u8;
        if changed {
            self.changes.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(from = %ViewMode::from(old), to = %mode, "view mode requested");
        }
        changed
    }

    /// Most recently requested mode.
    #[inline]
    #[must_use]
    pub fn requested(&self) -> ViewMode {
        ViewMode::from(self.requested.load(Ordering::Acquire))
    }

    /// Total requests that changed the value.
    #[must_use]
    pub fn changes(&self) -> u64 {
        self.changes.load(Ordering::Relaxed)
    }
}

impl Default for ViewModeController {
    fn default() -> Self {
        Self::new()
    }
}
