//! # Camera Rig
//!
//! Turns the published hand position into a group orientation. With
//! gesture control on, the rig follows the hand; with it off, it eases back
//! to rest.
//!
//! ```text
//! yaw   =  (x - 0.5) * yaw_range
//! pitch = -(y - 0.5) * pitch_range
//! ```

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::hand::HandState;
use yuletide_shared::Vec2;

/// Camera rig tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRigConfig {
    /// Yaw swing across the full image width (radians).
    pub yaw_range: f32,
    /// Pitch swing across the full image height (radians).
    pub pitch_range: f32,
    /// Approach rate while following the hand (per second).
    pub follow_rate: f32,
    /// Approach rate while returning to rest (per second).
    pub return_rate: f32,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            yaw_range: PI * 1.5,
            pitch_range: PI * 0.4,
            follow_rate: 5.0,
            return_rate: 3.0,
        }
    }
}

/// Group rotation in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Rotation about the horizontal axis.
    pub pitch: f32,
}

impl Orientation {
    /// Rest orientation.
    pub const REST: Self = Self {
        yaw: 0.0,
        pitch: 0.0,
    };
}

/// Smoothed orientation driven by [`HandState`].
#[derive(Clone, Debug, Default)]
pub struct CameraRig {
    config: CameraRigConfig,
    orientation: Orientation,
}

impl CameraRig {
    /// Creates a rig at rest.
    #[must_use]
    pub fn new(config: CameraRigConfig) -> Self {
        Self {
            config,
            orientation: Orientation::REST,
        }
    }

    /// Orientation the hand position asks for.
    #[must_use]
    pub fn target_for(&self, hand: Vec2) -> Orientation {
        Orientation {
            yaw: (hand.x - 0.5) * self.config.yaw_range,
            pitch: -(hand.y - 0.5) * self.config.pitch_range,
        }
    }

    /// Advances one render tick.
    ///
    /// A non-finite hand position holds the current orientation for the tick.
    pub fn update(&mut self, dt: f32, hand: &HandState, gestures_enabled: bool) -> Orientation {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let (target, rate) = if gestures_enabled {
            let position = hand.position();
            if !position.is_finite() {
                return self.orientation;
            }
            (self.target_for(position), self.config.follow_rate)
        } else {
            (Orientation::REST, self.config.return_rate)
        };
        let t = (rate * dt).clamp(0.0, 1.0);
        if !t.is_finite() {
            return self.orientation;
        }

        let current = Vec2::new(self.orientation.yaw, self.orientation.pitch);
        let next = current.lerp(Vec2::new(target.yaw, target.pitch), t);
        self.orientation = Orientation {
            yaw: next.x,
            pitch: next.y,
        };
        self.orientation
    }

    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centre_hand_targets_rest() {
        let rig = CameraRig::new(CameraRigConfig::default());
        assert_eq!(rig.target_for(Vec2::new(0.5, 0.5)), Orientation::REST);
    }

    #[test]
    fn test_right_and_low_hand() {
        let rig = CameraRig::new(CameraRigConfig::default());
        let target = rig.target_for(Vec2::new(1.0, 1.0));
        assert!((target.yaw - PI * 0.75).abs() < 1e-5);
        assert!((target.pitch + PI * 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_follows_hand_then_returns() {
        let hand = HandState::new();
        hand.publish(Vec2::new(0.9, 0.2));
        let mut rig = CameraRig::new(CameraRigConfig::default());
        let target = rig.target_for(hand.position());

        for _ in 0..300 {
            rig.update(1.0 / 60.0, &hand, true);
        }
        assert!((rig.orientation().yaw - target.yaw).abs() < 1e-3);
        assert!((rig.orientation().pitch - target.pitch).abs() < 1e-3);

        for _ in 0..600 {
            rig.update(1.0 / 60.0, &hand, false);
        }
        assert!(rig.orientation().yaw.abs() < 1e-3);
        assert!(rig.orientation().pitch.abs() < 1e-3);
    }

    #[test]
    fn test_nan_hand_is_ignored_and_rig_recovers() {
        let hand = HandState::new();
        let mut rig = CameraRig::new(CameraRigConfig::default());
        hand.publish(Vec2::new(f32::NAN, 0.5));
        let held = rig.update(1.0 / 60.0, &hand, true);
        assert_eq!(held, Orientation::REST);

        hand.publish(Vec2::new(0.8, 0.5));
        let target = rig.target_for(hand.position());
        for _ in 0..600 {
            rig.update(1.0 / 60.0, &hand, true);
        }
        assert!((rig.orientation().yaw - target.yaw).abs() < 1e-3);

        for _ in 0..600 {
            rig.update(1.0 / 60.0, &hand, false);
        }
        assert!(rig.orientation().yaw.abs() < 1e-3);
        assert!(rig.orientation().pitch.abs() < 1e-3);
    }

    #[test]
    fn test_huge_dt_does_not_overshoot() {
        let hand = HandState::new();
        hand.publish(Vec2::new(1.0, 0.5));
        let mut rig = CameraRig::new(CameraRigConfig::default());
        let o = rig.update(10.0, &hand, true);
        assert!((o.yaw - PI * 0.75).abs() < 1e-5);
    }
}
