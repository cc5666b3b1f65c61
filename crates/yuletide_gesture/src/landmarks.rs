//! # Hand Landmarks
//!
//! One detected hand: 21 points in normalized image space (`x`, `y` in
//! `[0, 1]`, `y` pointing down, `z` relative depth).
//!
//! ```text
//!         8   12  16  20      tips
//!         7   11  15  19
//!    4    6   10  14  18      PIPs
//!    3    5    9  13  17      MCPs
//!     2
//!      1
//!          0                  wrist
//! ```

use yuletide_shared::{Vec2, Vec3, LANDMARK_COUNT};

/// Wrist.
pub const WRIST: usize = 0;
/// Thumb tip.
pub const THUMB_TIP: usize = 4;
/// Index finger knuckle.
pub const INDEX_MCP: usize = 5;
/// Index finger tip.
pub const INDEX_TIP: usize = 8;
/// Pinky knuckle.
pub const PINKY_MCP: usize = 17;
/// Tips of the four fingers (thumb excluded).
pub const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];

/// A complete landmark frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    /// Wraps a frame. `None` unless it holds exactly 21 finite points.
    #[must_use]
    pub fn from_slice(points: &[Vec3]) -> Option<Self> {
        let points: [Vec3; LANDMARK_COUNT] = points.try_into().ok()?;
        if !points.iter().all(|p| p.is_finite()) {
            return None;
        }
        Some(Self { points })
    }

    /// Point by landmark index.
    #[inline]
    #[must_use]
    pub const fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }

    /// Distance between two landmarks.
    #[inline]
    #[must_use]
    pub fn distance(&self, a: usize, b: usize) -> f32 {
        self.points[a].distance(self.points[b])
    }

    /// Tip further from the wrist than the joint two below it.
    #[must_use]
    pub fn finger_extended(&self, tip: usize) -> bool {
        self.distance(tip, WRIST) > self.distance(tip - 2, WRIST)
    }

    /// Tip closer to the wrist than the joint two below it.
    #[must_use]
    pub fn finger_curled(&self, tip: usize) -> bool {
        self.distance(tip, WRIST) < self.distance(tip - 2, WRIST)
    }

    /// Palm centre (mean of wrist, index and pinky knuckles), with `x`
    /// mirrored so moving the hand right moves the position right.
    #[must_use]
    pub fn palm_position(&self) -> Vec2 {
        let sum = self.points[WRIST] + self.points[INDEX_MCP] + self.points[PINKY_MCP];
        Vec2::new(1.0 - sum.x / 3.0, sum.y / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_exactly_21_points() {
        assert!(HandLandmarks::from_slice(&[]).is_none());
        assert!(HandLandmarks::from_slice(&[Vec3::ZERO; 20]).is_none());
        assert!(HandLandmarks::from_slice(&[Vec3::ZERO; 22]).is_none());
        assert!(HandLandmarks::from_slice(&[Vec3::ZERO; 21]).is_some());
    }

    #[test]
    fn test_rejects_non_finite_points() {
        let mut points = [Vec3::ZERO; 21];
        points[12].y = f32::NAN;
        assert!(HandLandmarks::from_slice(&points).is_none());
        points[12].y = f32::NEG_INFINITY;
        assert!(HandLandmarks::from_slice(&points).is_none());
    }

    #[test]
    fn test_palm_position_mirrors_x() {
        let mut points = [Vec3::ZERO; 21];
        points[WRIST] = Vec3::new(0.1, 0.3, 0.0);
        points[INDEX_MCP] = Vec3::new(0.2, 0.3, 0.0);
        points[PINKY_MCP] = Vec3::new(0.3, 0.6, 0.0);
        let hand = HandLandmarks::from_slice(&points).unwrap();
        let p = hand.palm_position();
        assert!((p.x - 0.8).abs() < 1e-6);
        assert!((p.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_equal_distances_neither_extended_nor_curled() {
        let hand = HandLandmarks::from_slice(&[Vec3::ZERO; 21]).unwrap();
        assert!(!hand.finger_extended(8));
        assert!(!hand.finger_curled(8));
    }
}
