//! # YULETIDE Procedural Generation
//!
//! Deterministic generation of the particle formations.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same seed always produces the same formations
//! 2. **Total**: Generation never fails; empty categories simply contribute nothing
//! 3. **Immutable**: Formations are generated once and shared read-only
//! 4. **Exact**: Category sub-counts always sum to the particle count
//!
//! ## Core Components
//!
//! - `LayoutSeed`: Seed and derived sub-streams
//! - `CategoryPartition`: Index ranges per particle category
//! - `cone`: TREE formation sampling
//! - `sphere`: SCATTER formation sampling
//! - `LayoutGenerator`: Produces a [`TreeLayout`] from [`LayoutParams`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use yuletide_procedural::{LayoutGenerator, LayoutParams, LayoutSeed};
//!
//! let layout = LayoutGenerator::new(LayoutParams::default(), LayoutSeed::default()).generate();
//! assert_eq!(layout.tree().len(), 3000);
//! assert_eq!(layout.scatter().len(), 3000);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod category;
pub mod cone;
pub mod layout;
pub mod seed;
pub mod sphere;

pub use category::{CategoryCounts, CategoryPartition, ParticleCategory};
pub use cone::ConeParams;
pub use layout::{Formation, LayoutGenerator, LayoutParams, ParticleAttributes, TreeLayout};
pub use seed::LayoutSeed;
pub use sphere::SphereSampler;
