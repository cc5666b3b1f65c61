//! Mathematical types shared between the layout, morph and gesture crates.
//!
//! `Vec3` is `#[repr(C)]` and `Pod` so a particle buffer can be handed to a
//! renderer as a flat `&[f32]` without copying.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 3D Vector - particle positions, hand landmarks
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

impl Vec3 {
    /// Creates a new Vec3
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// True when no component is NaN or infinite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Sum of absolute components (L1 norm).
    #[must_use]
    pub fn l1_norm(self) -> f32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Moves `self` toward `target` by `factor` of the remaining distance.
    ///
    /// `factor` is not clamped here; callers clamp it to `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn approach(self, target: Self, factor: f32) -> Self {
        self + (target - self) * factor
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl std::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

/// 2D Vector - hand position, camera orientation
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when neither component is NaN or infinite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Packs both components into one 64-bit word (x in the high half).
    ///
    /// Used to publish a pair through a single atomic store.
    #[must_use]
    pub fn to_bits(self) -> u64 {
        (u64::from(self.x.to_bits()) << 32) | u64::from(self.y.to_bits())
    }

    /// Inverse of [`Vec2::to_bits`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_bits(bits: u64) -> Self {
        Self::new(f32::from_bits((bits >> 32) as u32), f32::from_bits(bits as u32))
    }

    /// Linear interpolation toward `target`.
    #[must_use]
    pub fn lerp(self, target: Self, factor: f32) -> Self {
        Self::new(
            self.x + (target.x - self.x) * factor,
            self.y + (target.y - self.y) * factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_l1_norm() {
        assert_eq!(Vec3::new(1.0, -2.0, 0.5).l1_norm(), 3.5);
    }

    #[test]
    fn test_approach_full_factor_lands_on_target() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.0, 9.0);
        assert_eq!(a.approach(b, 1.0), b);
        assert_eq!(a.approach(b, 0.0), a);
    }

    #[test]
    fn test_vec2_bits_preserve_pair() {
        let v = Vec2::new(0.25, -0.75);
        assert_eq!(Vec2::from_bits(v.to_bits()), v);
    }

    #[test]
    fn test_non_finite_components_detected() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(1.0, f32::NAN, 3.0).is_finite());
        assert!(!Vec2::new(f32::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_vec3_slice_casts_to_floats() {
        let buf = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
        let flat: &[f32] = bytemuck::cast_slice(&buf);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
