//! # Scene
//!
//! Owns every component and is the one entry point the render loop calls:
//!
//! ```text
//! Scene::tick(dt)
//!   ├─ MorphEngine::tick   (reads ViewModeController)
//!   ├─ CameraRig::update   (reads HandState)
//!   ├─ PhotoGallery::update
//!   └─ SnowField::step
//! ```
//!
//! The gesture [`PredictionLoop`] is optional. It writes the same
//! controller the UI writes and the hand cell the camera reads; enabling or
//! disabling it never touches the render-side state.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::Arc;

use crate::config::YuletideConfig;
use crate::error::YuletideResult;
use crate::gallery::PhotoGallery;
use crate::snow::SnowField;
use yuletide_core::{CameraRig, HandState, MorphEngine, Orientation, ViewModeController};
use yuletide_gesture::{
    GestureResult, LandmarkSource, LoopOutputs, LoopSnapshot, ModeTransition, PredictionLoop,
};
use yuletide_procedural::{LayoutGenerator, ParticleAttributes, TreeLayout};
use yuletide_shared::{Vec3, ViewMode};

/// Accepted gesture transitions buffered for the UI.
const TRANSITION_BACKLOG: usize = 32;

/// Per-frame output for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameState {
    /// Mode currently requested (UI indicator).
    pub requested: ViewMode,
    /// Mode the particles are heading to.
    pub active: ViewMode,
    /// True while particles are in flight.
    pub transitioning: bool,
    /// Foliage is hidden while FOCUS is requested.
    pub foliage_hidden: bool,
    /// Group orientation.
    pub camera: Orientation,
    /// Largest particle displacement this tick.
    pub max_displacement: f32,
}

/// The assembled scene.
#[derive(Debug)]
pub struct Scene {
    config: YuletideConfig,
    layout: TreeLayout,
    morph: MorphEngine,
    controller: Arc<ViewModeController>,
    hand: Arc<HandState>,
    camera: CameraRig,
    gallery: PhotoGallery,
    snow: SnowField,
    prediction: Option<PredictionLoop>,
    transition_tx: Sender<ModeTransition>,
    transition_rx: Receiver<ModeTransition>,
}

impl Scene {
    /// Validates `config` and builds every component. Gestures start off.
    ///
    /// # Errors
    ///
    /// Returns [`crate::YuletideError::InvalidConfig`] if `config` fails
    /// validation.
    pub fn new(config: YuletideConfig) -> YuletideResult<Self> {
        config.validate()?;

        let seed = config.layout_seed();
        let layout = LayoutGenerator::new(config.layout, seed).generate();
        let morph = MorphEngine::new(&layout, config.morph);
        let (transition_tx, transition_rx) = bounded(TRANSITION_BACKLOG);

        tracing::info!(
            particles = layout.particle_count(),
            photos = config.gallery.photo_count,
            flakes = config.snow.count,
            "scene assembled"
        );

        Ok(Self {
            camera: CameraRig::new(config.camera),
            gallery: PhotoGallery::new(config.gallery, seed),
            snow: SnowField::new(config.snow, seed),
            controller: Arc::new(ViewModeController::new()),
            hand: Arc::new(HandState::new()),
            prediction: None,
            transition_tx,
            transition_rx,
            layout,
            morph,
            config,
        })
    }

    /// UI mode request. Returns `true` if the requested mode changed.
    pub fn request_mode(&self, mode: ViewMode) -> bool {
        self.controller.request(mode)
    }

    /// Opens a landmark source and starts gesture control, replacing any
    /// running loop.
    ///
    /// Returns `false` (and logs why) if the source could not be opened; the
    /// scene keeps working without gestures.
    pub fn enable_gestures<S, F>(&mut self, open: F) -> bool
    where
        S: LandmarkSource,
        F: FnOnce() -> GestureResult<S>,
    {
        self.disable_gestures();
        let outputs = LoopOutputs {
            controller: Arc::clone(&self.controller),
            hand: Arc::clone(&self.hand),
            transitions: Some(self.transition_tx.clone()),
        };
        self.prediction = PredictionLoop::start(open, self.config.gesture, outputs);
        self.prediction.is_some()
    }

    /// Stops gesture control and releases the source.
    pub fn disable_gestures(&mut self) {
        if let Some(mut prediction) = self.prediction.take() {
            prediction.stop();
            tracing::info!("gesture control disabled");
        }
    }

    /// True while a prediction loop is running.
    #[must_use]
    pub fn gestures_enabled(&self) -> bool {
        self.prediction.as_ref().is_some_and(PredictionLoop::is_running)
    }

    /// Advances one render tick.
    pub fn tick(&mut self, dt: f32) -> FrameState {
        let report = self.morph.tick(dt, &self.controller);
        let requested = self.controller.requested();
        let camera = self.camera.update(dt, &self.hand, self.gestures_enabled());
        self.gallery.update(dt, requested);
        self.snow.step();

        FrameState {
            requested,
            active: report.active_mode,
            transitioning: report.is_transitioning(),
            foliage_hidden: requested == ViewMode::Focus,
            camera,
            max_displacement: report.max_displacement,
        }
    }

    /// Mouse wheel over the gallery.
    pub fn scroll_wheel(&mut self, delta_y: f32) -> bool {
        self.gallery.scroll_wheel(self.controller.requested(), delta_y)
    }

    /// Horizontal drag over the gallery.
    pub fn drag(&mut self, delta_x: f32) -> bool {
        self.gallery.drag(self.controller.requested(), delta_x)
    }

    /// Current particle positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        self.morph.positions()
    }

    /// Current particle positions, flattened.
    #[must_use]
    pub fn positions_flat(&self) -> &[f32] {
        self.morph.positions_flat()
    }

    /// Per-particle attributes.
    #[must_use]
    pub fn attributes(&self) -> &[ParticleAttributes] {
        self.layout.attributes()
    }

    /// Generated formations.
    #[must_use]
    pub const fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    /// Photo gallery.
    #[must_use]
    pub const fn gallery(&self) -> &PhotoGallery {
        &self.gallery
    }

    /// Snow field.
    #[must_use]
    pub const fn snow(&self) -> &SnowField {
        &self.snow
    }

    /// Shared mode store (for a UI thread).
    #[must_use]
    pub fn controller(&self) -> Arc<ViewModeController> {
        Arc::clone(&self.controller)
    }

    /// Shared hand cell.
    #[must_use]
    pub fn hand(&self) -> Arc<HandState> {
        Arc::clone(&self.hand)
    }

    /// Accepted gesture transitions, oldest first.
    #[must_use]
    pub const fn transitions(&self) -> &Receiver<ModeTransition> {
        &self.transition_rx
    }

    /// Prediction loop counters, if gestures are on.
    #[must_use]
    pub fn prediction_snapshot(&self) -> Option<LoopSnapshot> {
        self.prediction.as_ref().map(PredictionLoop::snapshot)
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &YuletideConfig {
        &self.config
    }
}
