//! # Photo Gallery
//!
//! Placement of the photo cards. Each mode has its own arrangement:
//!
//! | Mode | Arrangement | Scale |
//! |---|---|---|
//! | TREE | golden-angle spiral on a cone | 0.6 |
//! | SCATTER | uniform inside a sphere | 1.5 |
//! | FOCUS | ring on a cylinder, scrollable | 1.2 |
//!
//! Cards ease toward their target every tick. Scroll input only moves the
//! FOCUS ring.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use yuletide_procedural::{LayoutSeed, SphereSampler};
use yuletide_shared::{Vec3, ViewMode};

/// Gallery RNG sub-stream.
const GALLERY_STREAM: u64 = 0x7068_6f74;

/// Gallery tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of photo cards.
    pub photo_count: usize,
    /// Height of the TREE spiral's cone.
    pub tree_height: f32,
    /// Base radius of the TREE spiral's cone.
    pub tree_radius: f32,
    /// SCATTER sphere radius.
    pub scatter_radius: f32,
    /// FOCUS cylinder radius.
    pub focus_radius: f32,
    /// Approach rate toward targets (per second).
    pub approach_rate: f32,
    /// Scroll per unit of wheel delta (radians).
    pub wheel_speed: f32,
    /// Scroll per pixel of horizontal drag (radians).
    pub drag_speed: f32,
    /// Card scale in TREE.
    pub tree_scale: f32,
    /// Card scale in SCATTER.
    pub scatter_scale: f32,
    /// Card scale in FOCUS.
    pub focus_scale: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photo_count: 12,
            tree_height: 12.0,
            tree_radius: 4.5,
            scatter_radius: 16.0,
            focus_radius: 15.0,
            approach_rate: 3.0,
            wheel_speed: 0.003,
            drag_speed: 0.01,
            tree_scale: 0.6,
            scatter_scale: 1.5,
            focus_scale: 1.2,
        }
    }
}

/// Where a card is, or should be.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhotoPlacement {
    /// Card centre.
    pub position: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

/// Photo card layout and animation state.
#[derive(Clone, Debug)]
pub struct PhotoGallery {
    config: GalleryConfig,
    tree: Vec<Vec3>,
    scatter: Vec<Vec3>,
    current: Vec<PhotoPlacement>,
    scroll: f32,
}

impl PhotoGallery {
    /// Lays out `config.photo_count` cards. All start at the origin, scale 1.
    #[must_use]
    pub fn new(config: GalleryConfig, seed: LayoutSeed) -> Self {
        let n = config.photo_count;
        let tree = (0..n).map(|i| Self::spiral(&config, i, n)).collect();

        let sphere = SphereSampler::new(config.scatter_radius);
        let mut rng = seed.rng(GALLERY_STREAM);
        let scatter = (0..n).map(|_| sphere.sample(&mut rng)).collect();

        let current = vec![
            PhotoPlacement {
                position: Vec3::ZERO,
                scale: 1.0,
            };
            n
        ];

        Self {
            config,
            tree,
            scatter,
            current,
            scroll: 0.0,
        }
    }

    /// TREE position of card `i` of `n`: golden-angle spiral up a cone.
    #[allow(clippy::cast_precision_loss)]
    fn spiral(config: &GalleryConfig, i: usize, n: usize) -> Vec3 {
        let height = config.tree_height;
        let t = (i as f32 + 0.5) / n as f32;
        let y = -height / 2.0 + t * height * 0.85;
        let ny = (y + height / 2.0) / height;
        let radius = config.tree_radius * (1.0 - ny * 0.9) * 1.1;
        let angle = i as f32 * PI * (3.0 - 5.0f32.sqrt());
        Vec3::new(radius * angle.cos(), y, radius * angle.sin())
    }

    /// Target placement of card `i` in `mode`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn target(&self, mode: ViewMode, i: usize) -> PhotoPlacement {
        match mode {
            ViewMode::Tree => PhotoPlacement {
                position: self.tree[i],
                scale: self.config.tree_scale,
            },
            ViewMode::Scatter => PhotoPlacement {
                position: self.scatter[i],
                scale: self.config.scatter_scale,
            },
            ViewMode::Focus => {
                let angle = i as f32 * TAU / self.len() as f32 + self.scroll;
                let r = self.config.focus_radius;
                PhotoPlacement {
                    position: Vec3::new(r * angle.sin(), 0.0, r * angle.cos()),
                    scale: self.config.focus_scale,
                }
            }
        }
    }

    /// Eases every card toward its target for `mode`.
    pub fn update(&mut self, dt: f32, mode: ViewMode) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        let t = (self.config.approach_rate * dt).min(1.0);
        for i in 0..self.current.len() {
            let target = self.target(mode, i);
            let card = &mut self.current[i];
            card.position = card.position.approach(target.position, t);
            card.scale += (target.scale - card.scale) * t;
        }
    }

    /// Mouse wheel. Returns `true` if the ring moved (FOCUS only).
    pub fn scroll_wheel(&mut self, mode: ViewMode, delta_y: f32) -> bool {
        self.scroll_by(mode, delta_y * self.config.wheel_speed)
    }

    /// Horizontal drag. Returns `true` if the ring moved (FOCUS only).
    pub fn drag(&mut self, mode: ViewMode, delta_x: f32) -> bool {
        self.scroll_by(mode, delta_x * self.config.drag_speed)
    }

    fn scroll_by(&mut self, mode: ViewMode, radians: f32) -> bool {
        if mode != ViewMode::Focus || !radians.is_finite() {
            return false;
        }
        self.scroll += radians;
        true
    }

    /// Current ring offset (radians).
    #[must_use]
    pub const fn scroll(&self) -> f32 {
        self.scroll
    }

    /// Current card placements.
    #[must_use]
    pub fn placements(&self) -> &[PhotoPlacement] {
        &self.current
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    /// True with no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}
