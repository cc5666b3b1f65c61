//! Synthetic hand poses.
//!
//! Stand-ins for a camera feed in the headless simulator and in tests. Each
//! finger is a straight ray from the wrist; a curled finger folds its tip
//! back toward the palm.

use yuletide_shared::{Vec2, Vec3, LANDMARK_COUNT};

use crate::landmarks::{INDEX_TIP, THUMB_TIP, WRIST};

/// Ray angles of index, middle, ring and pinky (radians from vertical).
const FINGER_ANGLES: [f32; 4] = [-0.3, -0.1, 0.1, 0.3];
const THUMB_ANGLE: f32 = -1.2;

/// Wrist distances of MCP, PIP, DIP and tip.
const EXTENDED: [f32; 4] = [0.12, 0.17, 0.20, 0.23];
const CURLED: [f32; 4] = [0.12, 0.15, 0.11, 0.08];
const THUMB: [f32; 4] = [0.05, 0.09, 0.12, 0.15];

fn place(points: &mut [Vec3], wrist: Vec2, first: usize, angle: f32, reach: &[f32; 4]) {
    for (joint, d) in reach.iter().enumerate() {
        points[first + joint] = Vec3::new(wrist.x + d * angle.sin(), wrist.y - d * angle.cos(), 0.0);
    }
}

/// Hand with the given fingers extended (index, middle, ring, pinky).
#[must_use]
pub fn hand(wrist: Vec2, extended: [bool; 4]) -> Vec<Vec3> {
    let mut points = vec![Vec3::ZERO; LANDMARK_COUNT];
    points[WRIST] = Vec3::new(wrist.x, wrist.y, 0.0);
    place(&mut points, wrist, 1, THUMB_ANGLE, &THUMB);
    for (finger, (&angle, &open)) in FINGER_ANGLES.iter().zip(&extended).enumerate() {
        let reach = if open { &EXTENDED } else { &CURLED };
        place(&mut points, wrist, 5 + finger * 4, angle, reach);
    }
    points
}

/// All four fingers extended.
#[must_use]
pub fn open_hand(wrist: Vec2) -> Vec<Vec3> {
    hand(wrist, [true; 4])
}

/// All four fingers curled.
#[must_use]
pub fn fist(wrist: Vec2) -> Vec<Vec3> {
    hand(wrist, [false; 4])
}

/// Open hand with the thumb tip `gap` away from the index tip.
#[must_use]
pub fn pinch(wrist: Vec2, gap: f32) -> Vec<Vec3> {
    let mut points = open_hand(wrist);
    points[THUMB_TIP] = points[INDEX_TIP] + Vec3::new(gap, 0.0, 0.0);
    points
}

/// Two fingers up, two curled: matches no gesture.
#[must_use]
pub fn victory(wrist: Vec2) -> Vec<Vec3> {
    hand(wrist, [true, true, false, false])
}
