//! # Layout Seed
//!
//! Every random draw in formation generation derives from one seed, so a
//! given seed always yields bit-identical formations on any platform.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutSeed(u64);

impl LayoutSeed {
    /// Sub-stream for TREE positions.
    pub const TREE_STREAM: u64 = 0x7472_6565;
    /// Sub-stream for SCATTER positions.
    pub const SCATTER_STREAM: u64 = 0x7363_6174;
    /// Sub-stream for per-particle attributes (size, phase, color variant).
    pub const ATTRIBUTE_STREAM: u64 = 0x6174_7472;

    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose.
    ///
    /// Independent purposes give independent streams, so changing how many
    /// values one stream consumes never shifts another.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        // FNV-1a style mixing
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Builds the RNG for a sub-stream.
    #[must_use]
    pub fn rng(self, purpose: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.derive(purpose).value())
    }
}

impl Default for LayoutSeed {
    fn default() -> Self {
        Self(0x0C0F_FEE0_2512_2500)
    }
}
