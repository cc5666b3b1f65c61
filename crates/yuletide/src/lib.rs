//! # YULETIDE
//!
//! An interactive particle Christmas tree. Thousands of typed particles
//! morph between a cone (TREE) and a cloud (SCATTER, FOCUS), driven by UI
//! buttons or by hand gestures seen through a camera.
//!
//! ## Crates
//!
//! - `yuletide_shared`: vectors, constants, view modes
//! - `yuletide_procedural`: formation generation
//! - `yuletide_core`: morph engine, shared mode and hand state, camera rig
//! - `yuletide_gesture`: classifier, debouncer, prediction loop
//! - `yuletide` (this crate): config, gallery, snow, [`Scene`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut scene = Scene::new(YuletideConfig::load("yuletide.toml")?)?;
//! scene.enable_gestures(open_camera);
//! loop {
//!     let frame = scene.tick(dt);
//!     renderer.upload(scene.positions_flat());
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod gallery;
pub mod scene;
pub mod snow;

pub use config::YuletideConfig;
pub use error::{YuletideError, YuletideResult};
pub use gallery::{GalleryConfig, PhotoGallery, PhotoPlacement};
pub use scene::{FrameState, Scene};
pub use snow::{SnowConfig, SnowField};
