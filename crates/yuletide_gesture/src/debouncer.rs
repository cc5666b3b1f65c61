//! # Gesture Debouncer
//!
//! Converts per-frame gestures into at most one mode change per cooldown
//! window. A gesture is accepted when all of these hold:
//!
//! - it maps to a mode (not NONE),
//! - that mode differs from the one currently requested,
//! - at least `cooldown` has elapsed since the last accepted change.
//!
//! The first change is never gated. Rejected gestures do not touch the
//! cooldown, so holding a gesture keeps it ready to fire.

use std::time::Duration;

use crate::classifier::Gesture;
use yuletide_core::ViewModeController;
use yuletide_shared::ViewMode;

/// An accepted gesture-driven mode change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeTransition {
    /// Mode requested before.
    pub from: ViewMode,
    /// Mode requested now.
    pub to: ViewMode,
    /// Gesture that caused it.
    pub gesture: Gesture,
    /// Loop time of acceptance.
    pub at: Duration,
}

/// Cooldown gate between the classifier and the view mode controller.
#[derive(Clone, Debug)]
pub struct GestureDebouncer {
    cooldown: Duration,
    last_accepted: Option<Duration>,
    last_gesture: Gesture,
    accepted: u64,
}

impl GestureDebouncer {
    /// Creates a debouncer with no prior acceptance.
    #[must_use]
    pub const fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_accepted: None,
            last_gesture: Gesture::None,
            accepted: 0,
        }
    }

    /// Feeds one classified gesture observed at `now`.
    ///
    /// On acceptance the new mode is requested from `controller` and the
    /// transition is returned.
    pub fn on_gesture(
        &mut self,
        gesture: Gesture,
        now: Duration,
        controller: &ViewModeController,
    ) -> Option<ModeTransition> {
        self.last_gesture = gesture;

        let to = gesture.target_mode()?;
        let from = controller.requested();
        if to == from || !self.cooled_down(now) {
            return None;
        }

        controller.request(to);
        self.last_accepted = Some(now);
        self.accepted += 1;

        Some(ModeTransition {
            from,
            to,
            gesture,
            at: now,
        })
    }

    /// True when a change would be allowed at `now`.
    #[must_use]
    pub fn cooled_down(&self, now: Duration) -> bool {
        match self.last_accepted {
            Some(last) => now.saturating_sub(last) >= self.cooldown,
            None => true,
        }
    }

    /// Time left before the next change is allowed.
    #[must_use]
    pub fn remaining_cooldown(&self, now: Duration) -> Duration {
        self.last_accepted.map_or(Duration::ZERO, |last| {
            self.cooldown.saturating_sub(now.saturating_sub(last))
        })
    }

    /// Most recent gesture fed in, accepted or not.
    #[must_use]
    pub const fn last_gesture(&self) -> Gesture {
        self.last_gesture
    }

    /// Loop time of the last accepted change.
    #[must_use]
    pub const fn last_accepted(&self) -> Option<Duration> {
        self.last_accepted
    }

    /// Total accepted changes.
    #[must_use]
    pub const fn accepted(&self) -> u64 {
        self.accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_gesture_is_not_gated() {
        let controller = ViewModeController::new();
        let mut d = GestureDebouncer::new(ms(3000));
        let t = d.on_gesture(Gesture::Open, ms(10), &controller).unwrap();
        assert_eq!(t.from, ViewMode::Tree);
        assert_eq!(t.to, ViewMode::Scatter);
        assert_eq!(t.at, ms(10));
        assert_eq!(controller.requested(), ViewMode::Scatter);
    }

    #[test]
    fn test_second_change_inside_cooldown_rejected() {
        let controller = ViewModeController::new();
        let mut d = GestureDebouncer::new(ms(3000));
        d.on_gesture(Gesture::Open, ms(0), &controller).unwrap();
        assert!(d.on_gesture(Gesture::Fist, ms(100), &controller).is_none());
        assert_eq!(controller.requested(), ViewMode::Scatter);
        assert_eq!(d.remaining_cooldown(ms(100)), ms(2900));
    }

    #[test]
    fn test_rejected_change_does_not_restart_cooldown() {
        let controller = ViewModeController::new();
        let mut d = GestureDebouncer::new(ms(3000));
        assert!(d.on_gesture(Gesture::Open, ms(0), &controller).is_some());
        assert!(d.on_gesture(Gesture::Fist, ms(100), &controller).is_none());
        assert_eq!(d.last_accepted(), Some(ms(0)));

        // 3000 ms after the first acceptance, only 2900 ms after the rejection.
        let t = d.on_gesture(Gesture::Pinch, ms(3000), &controller).unwrap();
        assert_eq!(t.from, ViewMode::Scatter);
        assert_eq!(t.to, ViewMode::Focus);
        assert_eq!(controller.requested(), ViewMode::Focus);
        assert_eq!(d.accepted(), 2);
    }

    #[test]
    fn test_change_exactly_at_cooldown_accepted() {
        let controller = ViewModeController::new();
        let mut d = GestureDebouncer::new(ms(3000));
        d.on_gesture(Gesture::Open, ms(1000), &controller).unwrap();
        let t = d.on_gesture(Gesture::Fist, ms(4000), &controller).unwrap();
        assert_eq!(t.to, ViewMode::Tree);
        assert_eq!(d.accepted(), 2);
    }

    #[test]
    fn test_none_and_same_mode_rejected_without_touching_cooldown() {
        let controller = ViewModeController::new();
        let mut d = GestureDebouncer::new(ms(3000));
        assert!(d.on_gesture(Gesture::None, ms(0), &controller).is_none());
        // Already in TREE.
        assert!(d.on_gesture(Gesture::Fist, ms(5), &controller).is_none());
        assert_eq!(d.last_accepted(), None);
        assert_eq!(d.last_gesture(), Gesture::Fist);
        assert!(d.on_gesture(Gesture::Pinch, ms(6), &controller).is_some());
    }

    #[test]
    fn test_ui_change_is_respected() {
        let controller = ViewModeController::new();
        let mut d = GestureDebouncer::new(ms(3000));
        controller.request(ViewMode::Focus);
        assert!(d.on_gesture(Gesture::Pinch, ms(0), &controller).is_none());
        let t = d.on_gesture(Gesture::Open, ms(1), &controller).unwrap();
        assert_eq!(t.from, ViewMode::Focus);
    }
}
