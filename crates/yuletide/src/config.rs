//! # Configuration
//!
//! Everything tunable lives in one TOML file:
//!
//! ```toml
//! seed = 42
//!
//! [layout]
//! particle_count = 3000
//!
//! [morph]
//! rate = 10.0
//!
//! [gesture]
//! cooldown_ms = 3000
//! ```
//!
//! Every field is optional; missing ones take their defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{YuletideError, YuletideResult};
use crate::gallery::GalleryConfig;
use crate::snow::SnowConfig;
use yuletide_core::{CameraRigConfig, MorphConfig};
use yuletide_gesture::GestureConfig;
use yuletide_procedural::{LayoutParams, LayoutSeed};

/// Complete scene configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct YuletideConfig {
    /// Seed for every random layout.
    pub seed: u64,
    /// Formation generation.
    pub layout: LayoutParams,
    /// Morph engine.
    pub morph: MorphConfig,
    /// Gesture classification and debouncing.
    pub gesture: GestureConfig,
    /// Camera rig.
    pub camera: CameraRigConfig,
    /// Photo gallery.
    pub gallery: GalleryConfig,
    /// Snow.
    pub snow: SnowConfig,
}

impl Default for YuletideConfig {
    fn default() -> Self {
        Self {
            seed: LayoutSeed::default().value(),
            layout: LayoutParams::default(),
            morph: MorphConfig::default(),
            gesture: GestureConfig::default(),
            camera: CameraRigConfig::default(),
            gallery: GalleryConfig::default(),
            snow: SnowConfig::default(),
        }
    }
}

/// Fails unless `value` is finite and strictly positive.
fn positive(name: &str, value: f32) -> YuletideResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(YuletideError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

impl YuletideConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`YuletideError::Parse`] on malformed TOML and
    /// [`YuletideError::InvalidConfig`] on out-of-range values.
    pub fn from_toml_str(text: &str) -> YuletideResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// As [`YuletideConfig::from_toml_str`], plus [`YuletideError::Io`].
    pub fn load(path: impl AsRef<Path>) -> YuletideResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| YuletideError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`YuletideError::Serialize`] if a value has no TOML form.
    pub fn to_toml_string(&self) -> YuletideResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Layout seed.
    #[must_use]
    pub const fn layout_seed(&self) -> LayoutSeed {
        LayoutSeed::new(self.seed)
    }

    /// Rejects values the scene cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`YuletideError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> YuletideResult<()> {
        if self.layout.particle_count == 0 {
            return Err(YuletideError::InvalidConfig(
                "layout.particle_count must be at least 1".into(),
            ));
        }
        positive("layout.scatter_radius", self.layout.scatter_radius)?;
        positive("layout.cone.height", self.layout.cone.height)?;
        positive("layout.cone.base_radius", self.layout.cone.base_radius)?;

        positive("morph.rate", self.morph.rate)?;
        positive("morph.epsilon", self.morph.epsilon)?;

        positive("gesture.pinch_threshold", self.gesture.pinch_threshold)?;
        if !(1..=4).contains(&self.gesture.min_fingers) {
            return Err(YuletideError::InvalidConfig(format!(
                "gesture.min_fingers must be 1..=4, got {}",
                self.gesture.min_fingers
            )));
        }
        if self.gesture.cooldown_ms == 0 {
            return Err(YuletideError::InvalidConfig(
                "gesture.cooldown_ms must be at least 1".into(),
            ));
        }
        let smoothing = self.gesture.position_smoothing;
        if smoothing.is_nan() || smoothing <= 0.0 || smoothing > 1.0 {
            return Err(YuletideError::InvalidConfig(format!(
                "gesture.position_smoothing must be in (0, 1], got {smoothing}"
            )));
        }

        positive("camera.follow_rate", self.camera.follow_rate)?;
        positive("camera.return_rate", self.camera.return_rate)?;

        positive("gallery.tree_height", self.gallery.tree_height)?;
        positive("gallery.tree_radius", self.gallery.tree_radius)?;
        positive("gallery.scatter_radius", self.gallery.scatter_radius)?;
        positive("gallery.focus_radius", self.gallery.focus_radius)?;
        positive("gallery.approach_rate", self.gallery.approach_rate)?;

        positive("snow.half_extent", self.snow.half_extent)?;
        Ok(())
    }
}
