//! # Gesture Classifier
//!
//! Rules, first match wins:
//!
//! 1. **PINCH**: thumb tip within `pinch_threshold` of the index tip.
//! 2. **OPEN**: at least `min_fingers` of the four finger tips extended.
//! 3. **FIST**: at least `min_fingers` of the four finger tips curled.
//! 4. **NONE**.
//!
//! A tip is extended when it is further from the wrist than the joint two
//! below it, and curled when it is closer.
//!
//! Every classified frame also publishes the palm position to the injected
//! [`HandState`], whatever the gesture.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::landmarks::{HandLandmarks, FINGER_TIPS, INDEX_TIP, THUMB_TIP};
use yuletide_core::HandState;
use yuletide_shared::{Vec2, Vec3, ViewMode, GESTURE_COOLDOWN_MS, PINCH_THRESHOLD};

/// Recognised hand gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Thumb and index tips touching.
    Pinch,
    /// Fingers spread.
    Open,
    /// Fingers closed.
    Fist,
    /// Anything else.
    #[default]
    None,
}

impl Gesture {
    /// View mode this gesture asks for.
    #[must_use]
    pub const fn target_mode(self) -> Option<ViewMode> {
        match self {
            Self::Open => Some(ViewMode::Scatter),
            Self::Fist => Some(ViewMode::Tree),
            Self::Pinch => Some(ViewMode::Focus),
            Self::None => None,
        }
    }

    /// Upper-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pinch => "PINCH",
            Self::Open => "OPEN",
            Self::Fist => "FIST",
            Self::None => "NONE",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Gesture tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Thumb-to-index distance below which a frame is a pinch.
    pub pinch_threshold: f32,
    /// Fingers needed for OPEN or FIST.
    pub min_fingers: usize,
    /// Minimum time between accepted mode changes (milliseconds).
    pub cooldown_ms: u64,
    /// Weight of the newest palm position, in `(0, 1]`. 1.0 publishes the
    /// raw position.
    pub position_smoothing: f32,
    /// How long the prediction loop waits for a frame before rechecking its
    /// stop flag (milliseconds).
    pub poll_timeout_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: PINCH_THRESHOLD,
            min_fingers: 3,
            cooldown_ms: GESTURE_COOLDOWN_MS,
            position_smoothing: 1.0,
            poll_timeout_ms: 50,
        }
    }
}

/// Result of one classified frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    /// Detected gesture.
    pub gesture: Gesture,
    /// Published hand position.
    pub hand: Vec2,
}

/// Landmark frame classifier.
#[derive(Debug)]
pub struct GestureClassifier {
    config: GestureConfig,
    hand: Arc<HandState>,
    smoothed: Option<Vec2>,
}

impl GestureClassifier {
    /// Creates a classifier publishing to `hand`.
    #[must_use]
    pub fn new(config: GestureConfig, hand: Arc<HandState>) -> Self {
        Self {
            config,
            hand,
            smoothed: None,
        }
    }

    /// Gesture of a complete frame. Pure: publishes nothing.
    #[must_use]
    pub fn gesture_of(&self, hand: &HandLandmarks) -> Gesture {
        if hand.distance(THUMB_TIP, INDEX_TIP) < self.config.pinch_threshold {
            return Gesture::Pinch;
        }

        let extended = FINGER_TIPS.iter().filter(|&&tip| hand.finger_extended(tip)).count();
        if extended >= self.config.min_fingers {
            return Gesture::Open;
        }

        let curled = FINGER_TIPS.iter().filter(|&&tip| hand.finger_curled(tip)).count();
        if curled >= self.config.min_fingers {
            return Gesture::Fist;
        }

        Gesture::None
    }

    /// Classifies a frame and publishes the hand position.
    ///
    /// An empty frame (no hand in view) returns `None` and leaves the
    /// published position untouched. So does a malformed frame, including
    /// one with a NaN or infinite coordinate.
    pub fn classify(&mut self, landmarks: &[Vec3]) -> Option<Classification> {
        if landmarks.is_empty() {
            return None;
        }
        let Some(frame) = HandLandmarks::from_slice(landmarks) else {
            tracing::debug!(points = landmarks.len(), "dropping malformed landmark frame");
            return None;
        };

        let gesture = self.gesture_of(&frame);
        let raw = frame.palm_position();
        let position = match self.smoothed {
            Some(previous) if self.config.position_smoothing < 1.0 && previous.is_finite() => {
                previous.lerp(raw, self.config.position_smoothing)
            }
            _ => raw,
        };
        self.smoothed = Some(position);
        self.hand.publish(position);

        Some(Classification {
            gesture,
            hand: position,
        })
    }

    /// Active tuning.
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }
}
