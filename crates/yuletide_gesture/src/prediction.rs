//! # Prediction Loop
//!
//! Runs classification off the render thread.
//!
//! ```text
//! LandmarkSource::poll ──> classify ──> debounce ──> ViewModeController
//!        (bounded wait)        │             └──> transition channel (try_send)
//!                              └──> HandState
//! ```
//!
//! The loop polls with a bounded timeout so a stop request is seen within
//! one timeout. It ends when stopped, when dropped, or when the source
//! disconnects. Dropping the [`PredictionLoop`] joins the thread and
//! releases the source.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TrySendError};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::classifier::{Classification, GestureClassifier, GestureConfig};
use crate::debouncer::{GestureDebouncer, ModeTransition};
use crate::error::{GestureError, GestureResult};
use yuletide_core::{HandState, ViewModeController};
use yuletide_shared::Vec3;

/// Supplier of landmark frames (camera + inference).
pub trait LandmarkSource: Send + 'static {
    /// Waits up to `timeout` for the next frame.
    ///
    /// `Ok(None)` means no frame arrived in time. `Ok(Some(frame))` with an
    /// empty frame means no hand was in view.
    ///
    /// # Errors
    ///
    /// Returns an error when the source can no longer produce frames. The
    /// loop stops on any error.
    fn poll(&mut self, timeout: Duration) -> GestureResult<Option<Vec<Vec3>>>;
}

/// Landmark source fed through a channel.
#[derive(Debug)]
pub struct ChannelLandmarkSource {
    rx: Receiver<Vec<Vec3>>,
}

impl ChannelLandmarkSource {
    /// Wraps a receiver.
    #[must_use]
    pub const fn new(rx: Receiver<Vec<Vec3>>) -> Self {
        Self { rx }
    }

    /// Creates a bounded feed and the source reading from it.
    #[must_use]
    pub fn bounded(capacity: usize) -> (Sender<Vec<Vec3>>, Self) {
        let (tx, rx) = bounded(capacity);
        (tx, Self::new(rx))
    }
}

impl LandmarkSource for ChannelLandmarkSource {
    fn poll(&mut self, timeout: Duration) -> GestureResult<Option<Vec<Vec3>>> {
        match self.rx.recv_timeout(timeout) {
            Ok(frame) => Ok(Some(frame)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(GestureError::SourceDisconnected),
        }
    }
}

/// Where the loop writes its results.
#[derive(Clone, Debug)]
pub struct LoopOutputs {
    /// Mode store shared with the render tick and the UI.
    pub controller: Arc<ViewModeController>,
    /// Hand position cell read by the camera rig.
    pub hand: Arc<HandState>,
    /// Optional broadcast of accepted transitions. Full channels drop.
    pub transitions: Option<Sender<ModeTransition>>,
}

/// Loop counters and the latest classification.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoopSnapshot {
    /// Frames received, including empty ones.
    pub frames: u64,
    /// Frames that produced a classification.
    pub classified: u64,
    /// Accepted mode changes.
    pub transitions: u64,
    /// Accepted mode changes that could not be broadcast.
    pub dropped_transitions: u64,
    /// Most recent classification.
    pub last: Option<Classification>,
}

/// Handle to the running prediction thread.
#[derive(Debug)]
pub struct PredictionLoop {
    stop: Arc<AtomicBool>,
    snapshot: Arc<Mutex<LoopSnapshot>>,
    handle: Option<JoinHandle<()>>,
}

impl PredictionLoop {
    /// Starts the loop on an already opened source.
    ///
    /// # Errors
    ///
    /// Returns [`GestureError::ThreadSpawn`] if the thread cannot be created.
    pub fn spawn<S: LandmarkSource>(
        source: S,
        config: GestureConfig,
        outputs: LoopOutputs,
    ) -> GestureResult<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let snapshot = Arc::new(Mutex::new(LoopSnapshot::default()));

        let worker = Worker {
            source,
            classifier: GestureClassifier::new(config, Arc::clone(&outputs.hand)),
            debouncer: GestureDebouncer::new(Duration::from_millis(config.cooldown_ms)),
            poll_timeout: Duration::from_millis(config.poll_timeout_ms),
            outputs,
            stop: Arc::clone(&stop),
            snapshot: Arc::clone(&snapshot),
        };

        let handle = std::thread::Builder::new()
            .name("yuletide-gesture".into())
            .spawn(move || worker.run())?;

        Ok(Self {
            stop,
            snapshot,
            handle: Some(handle),
        })
    }

    /// Opens a source and starts the loop.
    ///
    /// Any failure (permission, model, thread) is logged and yields `None`:
    /// gesture control stays inert and nothing else is affected.
    pub fn start<S, F>(open: F, config: GestureConfig, outputs: LoopOutputs) -> Option<Self>
    where
        S: LandmarkSource,
        F: FnOnce() -> GestureResult<S>,
    {
        let started = open().and_then(|source| Self::spawn(source, config, outputs));
        match started {
            Ok(prediction) => {
                tracing::info!("gesture prediction loop started");
                Some(prediction)
            }
            Err(error) => {
                tracing::warn!(%error, "gesture control unavailable");
                None
            }
        }
    }

    /// True until the thread has exited.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Copy of the loop counters.
    #[must_use]
    pub fn snapshot(&self) -> LoopSnapshot {
        *self.snapshot.lock()
    }

    /// Signals the thread and waits for it to exit.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                tracing::warn!("gesture prediction thread panicked");
            }
        }
    }
}

impl Drop for PredictionLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// State owned by the prediction thread.
struct Worker<S> {
    source: S,
    classifier: GestureClassifier,
    debouncer: GestureDebouncer,
    poll_timeout: Duration,
    outputs: LoopOutputs,
    stop: Arc<AtomicBool>,
    snapshot: Arc<Mutex<LoopSnapshot>>,
}

impl<S: LandmarkSource> Worker<S> {
    fn run(mut self) {
        let clock = Instant::now();

        while !self.stop.load(Ordering::Acquire) {
            let frame = match self.source.poll(self.poll_timeout) {
                Ok(Some(frame)) => frame,
                Ok(None) => continue,
                Err(error) => {
                    tracing::warn!(%error, "landmark source failed, stopping prediction loop");
                    break;
                }
            };

            let classification = self.classifier.classify(&frame);
            let transition = classification.and_then(|c| {
                self.debouncer
                    .on_gesture(c.gesture, clock.elapsed(), &self.outputs.controller)
            });

            let mut dropped = false;
            if let Some(transition) = transition {
                tracing::info!(
                    from = %transition.from,
                    to = %transition.to,
                    gesture = %transition.gesture,
                    "gesture mode change"
                );
                if let Some(tx) = &self.outputs.transitions {
                    match tx.try_send(transition) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!(to = %transition.to, "transition channel full, dropping");
                            dropped = true;
                        }
                        Err(TrySendError::Disconnected(_)) => {
                            tracing::debug!(to = %transition.to, "transition receiver gone");
                            dropped = true;
                        }
                    }
                }
            }

            let mut snapshot = self.snapshot.lock();
            snapshot.frames += 1;
            if classification.is_some() {
                snapshot.classified += 1;
                snapshot.last = classification;
            }
            if transition.is_some() {
                snapshot.transitions += 1;
            }
            if dropped {
                snapshot.dropped_transitions += 1;
            }
        }

        tracing::debug!("gesture prediction loop exited");
    }
}
