//! # Layout Generator
//!
//! Produces the TREE and SCATTER formations and the per-particle attributes
//! in one pass over the [`CategoryPartition`].
//!
//! Three independent RNG streams are used (tree, scatter, attributes), so
//! e.g. tuning ornament sizes never moves a single needle.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::category::{CategoryCounts, CategoryPartition, ParticleCategory};
use crate::cone::ConeParams;
use crate::seed::LayoutSeed;
use crate::sphere::SphereSampler;
use yuletide_shared::{FormationName, Vec3, DEFAULT_PARTICLE_COUNT};

/// Generation parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    /// Total particle count, identical across formations.
    pub particle_count: usize,
    /// SCATTER sphere radius.
    pub scatter_radius: f32,
    /// Requested count per non-foliage category.
    pub counts: CategoryCounts,
    /// TREE geometry.
    pub cone: ConeParams,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            scatter_radius: 18.0,
            counts: CategoryCounts::default(),
            cone: ConeParams::default(),
        }
    }
}

/// Immutable per-particle attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleAttributes {
    /// Category.
    pub category: ParticleCategory,
    /// Point size scale.
    pub size: f32,
    /// Animation phase seed in `[0, 100)`.
    pub phase: f32,
    /// Color-variant selector in `[0, 1)`.
    pub color_variant: f32,
}

/// Size range and variant behaviour per category.
struct AttributeProfile {
    size_min: f32,
    size_span: f32,
    random_phase: bool,
    random_variant: bool,
}

impl AttributeProfile {
    const fn of(category: ParticleCategory) -> Self {
        let (size_min, size_span, random_variant) = match category {
            ParticleCategory::Star => (30.0, 0.0, false),
            ParticleCategory::FairyLight => (3.0, 2.0, false),
            ParticleCategory::SphereOrnament => (6.0, 5.0, true),
            ParticleCategory::HeartOrnament => (7.0, 4.0, true),
            ParticleCategory::RibbonBow => (22.0, 6.0, true),
            ParticleCategory::GarlandBead => (1.5, 0.5, false),
            ParticleCategory::Foliage => (2.5, 2.5, true),
        };
        Self {
            size_min,
            size_span,
            random_phase: !matches!(category, ParticleCategory::Star),
            random_variant,
        }
    }

    fn sample<R: Rng>(&self, category: ParticleCategory, rng: &mut R) -> ParticleAttributes {
        let size = self.size_min + rng.gen::<f32>() * self.size_span;
        let phase = if self.random_phase { rng.gen::<f32>() * 100.0 } else { 0.0 };
        let color_variant = if self.random_variant { rng.gen::<f32>() } else { 0.0 };
        ParticleAttributes {
            category,
            size,
            phase,
            color_variant,
        }
    }
}

/// A named, immutable position set covering every particle.
#[derive(Clone, Debug)]
pub struct Formation {
    name: FormationName,
    positions: Arc<[Vec3]>,
}

impl Formation {
    /// Wraps a fully populated position set.
    #[must_use]
    pub fn new(name: FormationName, positions: Vec<Vec3>) -> Self {
        Self {
            name,
            positions: positions.into(),
        }
    }

    /// Formation name.
    #[must_use]
    pub const fn name(&self) -> FormationName {
        self.name
    }

    /// Number of positions (equals the particle count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when the formation holds no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// All positions, indexed by particle.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }
}

/// Everything generated at startup.
#[derive(Clone, Debug)]
pub struct TreeLayout {
    partition: CategoryPartition,
    attributes: Arc<[ParticleAttributes]>,
    tree: Formation,
    scatter: Formation,
}

impl TreeLayout {
    /// Category partition.
    #[must_use]
    pub const fn partition(&self) -> &CategoryPartition {
        &self.partition
    }

    /// Particle count.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.partition.total()
    }

    /// Per-particle attributes.
    #[must_use]
    pub fn attributes(&self) -> &[ParticleAttributes] {
        &self.attributes
    }

    /// TREE formation.
    #[must_use]
    pub const fn tree(&self) -> &Formation {
        &self.tree
    }

    /// SCATTER formation.
    #[must_use]
    pub const fn scatter(&self) -> &Formation {
        &self.scatter
    }

    /// Formation by name.
    #[must_use]
    pub const fn formation(&self, name: FormationName) -> &Formation {
        match name {
            FormationName::Tree => &self.tree,
            FormationName::Scatter => &self.scatter,
        }
    }
}

/// Builds a [`TreeLayout`].
#[derive(Clone, Copy, Debug)]
pub struct LayoutGenerator {
    params: LayoutParams,
    seed: LayoutSeed,
}

impl LayoutGenerator {
    /// Creates a generator.
    #[must_use]
    pub const fn new(params: LayoutParams, seed: LayoutSeed) -> Self {
        Self { params, seed }
    }

    /// Generates both formations and the attributes.
    ///
    /// Pure and total: the same generator always returns the same layout.
    #[must_use]
    pub fn generate(&self) -> TreeLayout {
        let total = self.params.particle_count;
        let cone = self.params.cone;
        let sphere = SphereSampler::new(self.params.scatter_radius);
        let partition = CategoryPartition::new(total, &self.params.counts);

        let mut tree_rng = self.seed.rng(LayoutSeed::TREE_STREAM);
        let mut scatter_rng = self.seed.rng(LayoutSeed::SCATTER_STREAM);
        let mut attribute_rng = self.seed.rng(LayoutSeed::ATTRIBUTE_STREAM);

        let mut tree = Vec::with_capacity(total);
        let mut scatter = Vec::with_capacity(total);
        let mut attributes = Vec::with_capacity(total);

        for (category, range) in partition.iter() {
            let count = range.len();
            let profile = AttributeProfile::of(category);

            for i in 0..count {
                let tree_pos = match category {
                    ParticleCategory::Star => cone.apex(),
                    ParticleCategory::GarlandBead => cone.garland_bead(i, count),
                    _ => cone.sample(category, &mut tree_rng).unwrap_or(Vec3::ZERO),
                };
                let scatter_pos = match category {
                    ParticleCategory::Star => sphere.crown(),
                    _ => sphere.sample(&mut scatter_rng),
                };

                tree.push(tree_pos);
                scatter.push(scatter_pos);
                attributes.push(profile.sample(category, &mut attribute_rng));
            }
        }

        tracing::debug!(
            particles = total,
            foliage = partition.count(ParticleCategory::Foliage),
            seed = self.seed.value(),
            "generated tree layout"
        );

        TreeLayout {
            partition,
            attributes: attributes.into(),
            tree: Formation::new(FormationName::Tree, tree),
            scatter: Formation::new(FormationName::Scatter, scatter),
        }
    }
}
