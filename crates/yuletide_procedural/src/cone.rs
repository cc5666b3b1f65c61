//! # Cone Layout (TREE)
//!
//! The tree is a cone of height `height` centred on the origin, with its base
//! at `-height / 2` and its apex at `+height / 2`. At normalized height
//! `h ∈ [0, 1]` the surface radius is
//!
//! ```text
//! radius(h) = base_radius * (1 - taper * h)
//! ```
//!
//! Each category places particles differently:
//!
//! | Category | Height | Radial factor | Droop |
//! |---|---|---|---|
//! | Fairy light | `u^0.6` | `0.7 + 0.35u` | - |
//! | Sphere ornament | `0.1 + 0.8u` | `1.0 + 0.1u` | `0.1 + 0.25u` |
//! | Heart ornament | `0.15 + 0.7u` | `1.0 + 0.08u` | `0.15 + 0.3u` |
//! | Ribbon bow | `0.2 + 0.65u` | `1.02 + 0.05u` | - |
//! | Foliage | `u^0.5` | `1.05 * sqrt(u)` | `0.2 * r / base_radius` |
//!
//! The star sits at the apex and garland beads follow a wound spiral.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::category::ParticleCategory;
use yuletide_shared::Vec3;

/// Cone geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    /// Total height of the cone.
    pub height: f32,
    /// Radius at the base.
    pub base_radius: f32,
    /// Fraction of the base radius lost at the apex (0.98 leaves a 2% tip).
    pub taper: f32,
    /// Height of the star above the apex.
    pub star_lift: f32,
    /// Full turns the garland makes from base to top.
    pub garland_loops: f32,
    /// Fraction of the height the garland climbs.
    pub garland_climb: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            height: 14.0,
            base_radius: 5.0,
            taper: 0.98,
            star_lift: 0.3,
            garland_loops: 8.0,
            garland_climb: 0.9,
        }
    }
}

/// Where along the height a category lands.
#[derive(Clone, Copy, Debug, PartialEq)]
enum HeightProfile {
    /// `h = u^exponent`. Exponents below 1 bias toward the base, where the
    /// cone is widest.
    Power(f32),
    /// `h = min + span * u`.
    Band { min: f32, span: f32 },
}

/// How far from the axis, as a factor of the local cone radius.
#[derive(Clone, Copy, Debug, PartialEq)]
enum RadialProfile {
    /// `min + span * u`: a shell near the surface.
    Shell { min: f32, span: f32 },
    /// `scale * sqrt(u)`: uniform areal density over the disc.
    Interior { scale: f32 },
}

/// Vertical drop applied after placement.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Droop {
    None,
    /// `min + span * u`: ornaments hanging from a branch.
    Random { min: f32, span: f32 },
    /// `factor * r / base_radius`: outer needles sag more.
    Proportional(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SurfaceShape {
    height: HeightProfile,
    radial: RadialProfile,
    droop: Droop,
}

impl SurfaceShape {
    /// Shape table. `None` for the star and garland, which are not sampled.
    const fn of(category: ParticleCategory) -> Option<Self> {
        let shape = match category {
            ParticleCategory::FairyLight => Self {
                height: HeightProfile::Power(0.6),
                radial: RadialProfile::Shell { min: 0.7, span: 0.35 },
                droop: Droop::None,
            },
            ParticleCategory::SphereOrnament => Self {
                height: HeightProfile::Band { min: 0.1, span: 0.8 },
                radial: RadialProfile::Shell { min: 1.0, span: 0.1 },
                droop: Droop::Random { min: 0.1, span: 0.25 },
            },
            ParticleCategory::HeartOrnament => Self {
                height: HeightProfile::Band { min: 0.15, span: 0.7 },
                radial: RadialProfile::Shell { min: 1.0, span: 0.08 },
                droop: Droop::Random { min: 0.15, span: 0.3 },
            },
            ParticleCategory::RibbonBow => Self {
                height: HeightProfile::Band { min: 0.2, span: 0.65 },
                radial: RadialProfile::Shell { min: 1.02, span: 0.05 },
                droop: Droop::None,
            },
            ParticleCategory::Foliage => Self {
                height: HeightProfile::Power(0.5),
                radial: RadialProfile::Interior { scale: 1.05 },
                droop: Droop::Proportional(0.2),
            },
            ParticleCategory::Star | ParticleCategory::GarlandBead => return None,
        };
        Some(shape)
    }
}

impl ConeParams {
    /// Surface radius at normalized height `h`.
    #[inline]
    #[must_use]
    pub fn radius_at(&self, h: f32) -> f32 {
        self.base_radius * (1.0 - self.taper * h)
    }

    /// World-space `y` at normalized height `h`.
    #[inline]
    #[must_use]
    pub fn y_at(&self, h: f32) -> f32 {
        -self.height / 2.0 + h * self.height
    }

    /// Star position.
    #[must_use]
    pub fn apex(&self) -> Vec3 {
        Vec3::new(0.0, self.height / 2.0 + self.star_lift, 0.0)
    }

    /// Position of garland bead `index` out of `count`.
    ///
    /// Deterministic: beads are spaced evenly in the spiral parameter
    /// `t = index / count`, with a small radial and vertical ripple so the
    /// string looks draped rather than machined.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn garland_bead(&self, index: usize, count: usize) -> Vec3 {
        let t = if count == 0 { 0.0 } else { index as f32 / count as f32 };
        let angle = t * TAU * self.garland_loops;
        let y = -self.height / 2.0 + t * self.height * self.garland_climb;
        let r = self.radius_at(t) * (1.02 + (angle * 3.0).sin() * 0.05);
        Vec3::new(
            r * angle.cos(),
            y + (angle * 2.0).sin() * 0.15,
            r * angle.sin(),
        )
    }

    /// Samples one position for a surface- or volume-placed category.
    ///
    /// Returns `None` for the star and garland, which have fixed placements.
    pub fn sample<R: Rng>(&self, category: ParticleCategory, rng: &mut R) -> Option<Vec3> {
        let shape = SurfaceShape::of(category)?;

        let h = match shape.height {
            HeightProfile::Power(exponent) => rng.gen::<f32>().powf(exponent),
            HeightProfile::Band { min, span } => min + rng.gen::<f32>() * span,
        };
        let y = self.y_at(h);
        let cone_radius = self.radius_at(h);
        let angle = rng.gen::<f32>() * TAU;
        let r = match shape.radial {
            RadialProfile::Shell { min, span } => cone_radius * (min + rng.gen::<f32>() * span),
            RadialProfile::Interior { scale } => cone_radius * rng.gen::<f32>().sqrt() * scale,
        };
        let droop = match shape.droop {
            Droop::None => 0.0,
            Droop::Random { min, span } => min + rng.gen::<f32>() * span,
            Droop::Proportional(factor) => (r / self.base_radius) * factor,
        };

        Some(Vec3::new(r * angle.cos(), y - droop, r * angle.sin()))
    }
}
