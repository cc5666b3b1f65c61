//! # Sphere Layout (SCATTER)
//!
//! Uniform sampling over a solid sphere:
//!
//! ```text
//! θ = 2π·u₁            azimuth
//! φ = acos(2·u₂ − 1)   polar angle, uniform over directions
//! r = R·u₃^(1/3)       cube root, uniform over volume
//! ```
//!
//! Without the cube root, points would crowd the centre, since the volume of
//! a shell grows with `r²`.

use rand::Rng;
use std::f32::consts::TAU;

use yuletide_shared::Vec3;

/// Samples points uniformly inside a sphere centred on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereSampler {
    radius: f32,
}

impl SphereSampler {
    /// Creates a sampler for a sphere of `radius`.
    #[must_use]
    pub const fn new(radius: f32) -> Self {
        Self { radius }
    }

    /// Sphere radius.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Draws one point.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec3 {
        let theta = rng.gen::<f32>() * TAU;
        let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
        let r = rng.gen::<f32>().cbrt() * self.radius;
        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Fixed point high on the vertical axis, used for the star so it stays
    /// recognisable while everything else disperses.
    #[must_use]
    pub fn crown(&self) -> Vec3 {
        Vec3::new(0.0, self.radius * 0.8, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::LayoutSeed;

    #[test]
    fn test_samples_stay_inside() {
        let sampler = SphereSampler::new(18.0);
        let mut rng = LayoutSeed::new(11).rng(LayoutSeed::SCATTER_STREAM);
        for _ in 0..5000 {
            assert!(sampler.sample(&mut rng).length() <= 18.0 + 1e-3);
        }
    }

    #[test]
    fn test_hemispheres_balanced() {
        let sampler = SphereSampler::new(1.0);
        let mut rng = LayoutSeed::new(12).rng(LayoutSeed::SCATTER_STREAM);
        let n = 20_000;
        let upper = (0..n).filter(|_| sampler.sample(&mut rng).z > 0.0).count();
        let frac = upper as f64 / f64::from(n);
        assert!((frac - 0.5).abs() < 0.02, "upper fraction {frac}");
    }

    #[test]
    fn test_crown() {
        assert_eq!(SphereSampler::new(10.0).crown(), Vec3::new(0.0, 8.0, 0.0));
    }
}
