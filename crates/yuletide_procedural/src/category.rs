//! # Particle Categories
//!
//! Every particle belongs to exactly one category. Categories occupy
//! contiguous index ranges, allocated in [`ParticleCategory::GENERATION_ORDER`]
//! with foliage last: each category receives as many particles as it asks for
//! while any remain, and foliage absorbs whatever is left.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Particle category.
///
/// The discriminant is the type code a renderer receives per particle.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleCategory {
    /// Pine needles filling the cone.
    Foliage = 0,
    /// Round baubles hanging at the surface.
    SphereOrnament = 1,
    /// The single apex star.
    Star = 2,
    /// Small lights just inside the surface.
    FairyLight = 3,
    /// Beads strung along the spiral garland.
    GarlandBead = 4,
    /// Heart-shaped ornaments.
    HeartOrnament = 5,
    /// Large bows sitting on the surface.
    RibbonBow = 6,
}

impl ParticleCategory {
    /// Allocation order. Foliage is last and takes the remainder.
    pub const GENERATION_ORDER: [Self; 7] = [
        Self::Star,
        Self::FairyLight,
        Self::SphereOrnament,
        Self::HeartOrnament,
        Self::RibbonBow,
        Self::GarlandBead,
        Self::Foliage,
    ];

    /// Type code for the renderer.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Requested particle count per non-foliage category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCounts {
    /// Apex stars.
    pub star: usize,
    /// Fairy lights.
    pub fairy_light: usize,
    /// Sphere ornaments.
    pub sphere_ornament: usize,
    /// Heart ornaments.
    pub heart_ornament: usize,
    /// Ribbon bows.
    pub ribbon_bow: usize,
    /// Garland beads.
    pub garland_bead: usize,
}

impl CategoryCounts {
    /// Requested count for a category. Foliage has no request of its own.
    #[must_use]
    pub const fn requested(&self, category: ParticleCategory) -> Option<usize> {
        match category {
            ParticleCategory::Star => Some(self.star),
            ParticleCategory::FairyLight => Some(self.fairy_light),
            ParticleCategory::SphereOrnament => Some(self.sphere_ornament),
            ParticleCategory::HeartOrnament => Some(self.heart_ornament),
            ParticleCategory::RibbonBow => Some(self.ribbon_bow),
            ParticleCategory::GarlandBead => Some(self.garland_bead),
            ParticleCategory::Foliage => None,
        }
    }
}

impl Default for CategoryCounts {
    fn default() -> Self {
        Self {
            star: 1,
            fairy_light: 1200,
            sphere_ornament: 280,
            heart_ornament: 100,
            ribbon_bow: 25,
            garland_bead: 900,
        }
    }
}

/// Contiguous index ranges per category, covering `0..total` exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryPartition {
    total: usize,
    /// Ranges in generation order.
    ranges: [(ParticleCategory, Range<usize>); 7],
}

impl CategoryPartition {
    /// Splits `total` particles according to `counts`.
    ///
    /// Never fails: a category asking for more than what remains is clamped,
    /// and later categories get zero.
    #[must_use]
    pub fn new(total: usize, counts: &CategoryCounts) -> Self {
        let mut next = 0usize;
        let ranges = ParticleCategory::GENERATION_ORDER.map(|category| {
            let remaining = total - next;
            let len = counts
                .requested(category)
                .map_or(remaining, |want| want.min(remaining));
            let range = next..next + len;
            next += len;
            (category, range)
        });
        debug_assert_eq!(next, total);
        Self { total, ranges }
    }

    /// Total particle count.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Index range of a category.
    #[must_use]
    pub fn range(&self, category: ParticleCategory) -> Range<usize> {
        self.ranges
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0..0, |(_, r)| r.clone())
    }

    /// Particle count of a category.
    #[must_use]
    pub fn count(&self, category: ParticleCategory) -> usize {
        self.range(category).len()
    }

    /// Iterates `(category, range)` in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticleCategory, Range<usize>)> + '_ {
        self.ranges.iter().map(|(c, r)| (*c, r.clone()))
    }

    /// Category of the particle at `index`.
    #[must_use]
    pub fn category_of(&self, index: usize) -> Option<ParticleCategory> {
        self.ranges
            .iter()
            .find(|(_, r)| r.contains(&index))
            .map(|(c, _)| *c)
    }
}
