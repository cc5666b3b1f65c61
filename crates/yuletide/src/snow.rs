//! # Snow Field
//!
//! Ambient flakes drifting down through a box. Velocities are per frame,
//! not per second: each call to [`SnowField::step`] advances one frame.
//! A flake falling through the floor reappears at the top; one drifting out
//! a side reappears on the opposite side.

use rand::Rng;
use serde::{Deserialize, Serialize};

use yuletide_procedural::LayoutSeed;
use yuletide_shared::Vec3;

/// Snow RNG sub-stream.
const SNOW_STREAM: u64 = 0x736e_6f77;

/// Snow tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnowConfig {
    /// Number of flakes.
    pub count: usize,
    /// Half width of the box in x and z.
    pub half_extent: f32,
    /// Lowest spawn height.
    pub spawn_min_y: f32,
    /// Highest spawn height.
    pub spawn_max_y: f32,
    /// Height below which a flake is recycled.
    pub floor_y: f32,
    /// Height a recycled flake restarts from.
    pub reset_y: f32,
    /// Largest sideways drift per frame.
    pub sway: f32,
    /// Slowest fall per frame.
    pub fall_min: f32,
    /// Fastest fall per frame.
    pub fall_max: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            half_extent: 10.0,
            spawn_min_y: -5.0,
            spawn_max_y: 15.0,
            floor_y: -10.0,
            reset_y: 10.0,
            sway: 0.01,
            fall_min: 0.02,
            fall_max: 0.07,
        }
    }
}

/// Positions and per-frame velocities of every flake.
#[derive(Clone, Debug)]
pub struct SnowField {
    config: SnowConfig,
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
}

impl SnowField {
    /// Scatters `config.count` flakes through the box.
    #[must_use]
    pub fn new(config: SnowConfig, seed: LayoutSeed) -> Self {
        let mut rng = seed.rng(SNOW_STREAM);
        let h = config.half_extent;
        let mut positions = Vec::with_capacity(config.count);
        let mut velocities = Vec::with_capacity(config.count);

        for _ in 0..config.count {
            positions.push(Vec3::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * h,
                config.spawn_min_y + rng.gen::<f32>() * (config.spawn_max_y - config.spawn_min_y),
                (rng.gen::<f32>() * 2.0 - 1.0) * h,
            ));
            velocities.push(Vec3::new(
                (rng.gen::<f32>() * 2.0 - 1.0) * config.sway,
                -(config.fall_min + rng.gen::<f32>() * (config.fall_max - config.fall_min)),
                (rng.gen::<f32>() * 2.0 - 1.0) * config.sway,
            ));
        }

        Self {
            config,
            positions,
            velocities,
        }
    }

    /// Advances one frame.
    pub fn step(&mut self) {
        let h = self.config.half_extent;
        for (p, &v) in self.positions.iter_mut().zip(&self.velocities) {
            *p += v;
            if p.y < self.config.floor_y {
                p.y = self.config.reset_y;
            }
            p.x = wrap(p.x, h);
            p.z = wrap(p.z, h);
        }
    }

    /// Flake positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Flake positions as `[x0, y0, z0, x1, ...]`.
    #[must_use]
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Number of flakes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True with no flakes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn wrap(v: f32, h: f32) -> f32 {
    if v > h {
        -h
    } else if v < -h {
        h
    } else {
        v
    }
}
