//! # Morph Engine
//!
//! Moves every particle toward the active formation once per render tick:
//!
//! ```text
//! current += (target - current) * min(1, rate * dt)
//! ```
//!
//! ## Phases
//!
//! | Phase | Event | Next |
//! |---|---|---|
//! | IDLE | `ModeChanged` | TRANSITIONING |
//! | TRANSITIONING | `Converged` | IDLE |
//! | any | anything else | unchanged |
//!
//! A new mode is only sampled while IDLE. Requests made mid-transition are
//! not queued: whatever is requested when the engine next goes IDLE wins.
//!
//! Convergence uses the largest per-particle L1 distance to target, measured
//! before the step is applied.

use serde::{Deserialize, Serialize};

use crate::view_mode::ViewModeController;
use yuletide_procedural::{Formation, TreeLayout};
use yuletide_shared::{FormationName, Vec3, ViewMode, CONVERGENCE_EPSILON, MORPH_RATE};

/// Morph tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MorphConfig {
    /// Exponential approach rate (per second).
    pub rate: f32,
    /// Largest L1 displacement that still counts as arrived.
    pub epsilon: f32,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            rate: MORPH_RATE,
            epsilon: CONVERGENCE_EPSILON,
        }
    }
}

/// Transition phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Settled on the active formation; the next request may be adopted.
    #[default]
    Idle,
    /// Flying toward the active formation; requests are not sampled.
    Transitioning,
}

/// Input to the phase table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseEvent {
    /// The requested mode differs from the active one.
    ModeChanged,
    /// Every particle is within epsilon of its target.
    Converged,
    /// Nothing happened.
    Steady,
}

impl TransitionPhase {
    /// Phase transition table.
    #[must_use]
    pub const fn next(self, event: PhaseEvent) -> Self {
        match (self, event) {
            (Self::Idle, PhaseEvent::ModeChanged) => Self::Transitioning,
            (Self::Transitioning, PhaseEvent::Converged) => Self::Idle,
            (phase, _) => phase,
        }
    }
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    /// Phase after the tick.
    pub phase: TransitionPhase,
    /// Mode the particles are heading to.
    pub active_mode: ViewMode,
    /// Largest L1 displacement, measured before the step.
    pub max_displacement: f32,
    /// Mode adopted on this tick, if any.
    pub adopted: Option<ViewMode>,
}

impl TickReport {
    /// True while particles are in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase == TransitionPhase::Transitioning
    }
}

/// Interpolates the particle buffer between formations.
///
/// Owns the only mutable copy of particle positions. Allocates once, in
/// [`MorphEngine::new`].
#[derive(Debug)]
pub struct MorphEngine {
    config: MorphConfig,
    tree: Formation,
    scatter: Formation,
    current: Vec<Vec3>,
    active: ViewMode,
    phase: TransitionPhase,
}

impl MorphEngine {
    /// Creates an engine resting on the TREE formation.
    #[must_use]
    pub fn new(layout: &TreeLayout, config: MorphConfig) -> Self {
        Self {
            config,
            tree: layout.tree().clone(),
            scatter: layout.scatter().clone(),
            current: layout.tree().positions().to_vec(),
            active: ViewMode::Tree,
            phase: TransitionPhase::Idle,
        }
    }

    /// Advances one render tick.
    ///
    /// A negative or non-finite `dt` is treated as zero: nothing moves but a
    /// mode may still be adopted. So is a NaN step from a NaN `rate`. A very
    /// large `dt` snaps every particle onto its target.
    pub fn tick(&mut self, dt: f32, controller: &ViewModeController) -> TickReport {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        let mut adopted = None;
        if self.phase == TransitionPhase::Idle {
            let requested = controller.requested();
            if requested != self.active {
                tracing::debug!(from = %self.active, to = %requested, "morph target adopted");
                self.active = requested;
                self.phase = self.phase.next(PhaseEvent::ModeChanged);
                adopted = Some(requested);
            }
        }

        let factor = self.config.rate * dt;
        let factor = if factor.is_nan() { 0.0 } else { factor.clamp(0.0, 1.0) };
        let target = match self.active.formation() {
            FormationName::Tree => self.tree.positions(),
            FormationName::Scatter => self.scatter.positions(),
        };

        let mut max_displacement = 0.0f32;
        for (current, &goal) in self.current.iter_mut().zip(target) {
            max_displacement = max_displacement.max((goal - *current).l1_norm());
            *current = if factor >= 1.0 {
                goal
            } else {
                current.approach(goal, factor)
            };
        }

        let event = if self.phase == TransitionPhase::Transitioning
            && max_displacement < self.config.epsilon
        {
            tracing::debug!(mode = %self.active, "morph converged");
            PhaseEvent::Converged
        } else {
            PhaseEvent::Steady
        };
        self.phase = self.phase.next(event);

        TickReport {
            phase: self.phase,
            active_mode: self.active,
            max_displacement,
            adopted,
        }
    }

    /// Snaps back to the TREE formation, IDLE.
    pub fn reset(&mut self) {
        self.current.copy_from_slice(self.tree.positions());
        self.active = ViewMode::Tree;
        self.phase = TransitionPhase::Idle;
    }

    /// Current particle positions.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Current positions as `[x0, y0, z0, x1, ...]`, ready for upload.
    #[must_use]
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.current)
    }

    /// Mode the particles are heading to (or resting on).
    #[must_use]
    pub const fn active_mode(&self) -> ViewMode {
        self.active
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True while particles are in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase == TransitionPhase::Transitioning
    }

    /// Number of particles.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.current.len()
    }

    /// Active tuning.
    #[must_use]
    pub const fn config(&self) -> &MorphConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yuletide_procedural::{LayoutGenerator, LayoutParams, LayoutSeed};

    fn engine() -> (MorphEngine, TreeLayout) {
        let params = LayoutParams {
            particle_count: 200,
            ..LayoutParams::default()
        };
        let layout = LayoutGenerator::new(params, LayoutSeed::new(9)).generate();
        (MorphEngine::new(&layout, MorphConfig::default()), layout)
    }

    #[test]
    fn test_phase_table() {
        let idle = TransitionPhase::Idle;
        let moving = TransitionPhase::Transitioning;
        assert_eq!(idle.next(PhaseEvent::ModeChanged), moving);
        assert_eq!(idle.next(PhaseEvent::Converged), idle);
        assert_eq!(idle.next(PhaseEvent::Steady), idle);
        assert_eq!(moving.next(PhaseEvent::ModeChanged), moving);
        assert_eq!(moving.next(PhaseEvent::Converged), idle);
        assert_eq!(moving.next(PhaseEvent::Steady), moving);
    }

    #[test]
    fn test_starts_on_tree_idle() {
        let (engine, layout) = engine();
        assert_eq!(engine.positions(), layout.tree().positions());
        assert_eq!(engine.phase(), TransitionPhase::Idle);
        assert_eq!(engine.active_mode(), ViewMode::Tree);
    }

    #[test]
    fn test_idle_tick_without_request_moves_nothing() {
        let (mut engine, layout) = engine();
        let controller = ViewModeController::new();
        let report = engine.tick(0.016, &controller);
        assert_eq!(report.adopted, None);
        assert_eq!(report.max_displacement, 0.0);
        assert_eq!(engine.positions(), layout.tree().positions());
    }

    #[test]
    fn test_adoption_starts_transition() {
        let (mut engine, _) = engine();
        let controller = ViewModeController::new();
        controller.request(ViewMode::Scatter);
        let report = engine.tick(0.016, &controller);
        assert_eq!(report.adopted, Some(ViewMode::Scatter));
        assert!(report.is_transitioning());
        assert!(report.max_displacement > 0.5);
    }

    #[test]
    fn test_negative_and_nan_dt_are_zero() {
        let (mut engine, layout) = engine();
        let controller = ViewModeController::new();
        controller.request(ViewMode::Scatter);
        engine.tick(-1.0, &controller);
        engine.tick(f32::NAN, &controller);
        engine.tick(f32::INFINITY, &controller);
        assert_eq!(engine.positions(), layout.tree().positions());
        assert!(engine.is_transitioning());
    }

    #[test]
    fn test_nan_rate_leaves_positions_intact() {
        let params = LayoutParams {
            particle_count: 50,
            ..LayoutParams::default()
        };
        let layout = LayoutGenerator::new(params, LayoutSeed::new(3)).generate();
        let config = MorphConfig {
            rate: f32::NAN,
            ..MorphConfig::default()
        };
        let mut engine = MorphEngine::new(&layout, config);
        let controller = ViewModeController::new();
        controller.request(ViewMode::Scatter);
        for _ in 0..10 {
            engine.tick(0.016, &controller);
        }
        assert!(engine.positions().iter().all(|p| p.is_finite()));
        assert_eq!(engine.positions(), layout.tree().positions());
    }

    #[test]
    fn test_large_dt_lands_exactly() {
        let (mut engine, layout) = engine();
        let controller = ViewModeController::new();
        controller.request(ViewMode::Scatter);
        engine.tick(5.0, &controller);
        assert_eq!(engine.positions(), layout.scatter().positions());
        // Displacement was measured before the step, so one more tick is
        // needed to see zero.
        assert!(engine.is_transitioning());
        let report = engine.tick(0.016, &controller);
        assert_eq!(report.max_displacement, 0.0);
        assert_eq!(report.phase, TransitionPhase::Idle);
    }

    #[test]
    fn test_flat_view_matches_positions() {
        let (engine, _) = engine();
        let flat = engine.positions_flat();
        assert_eq!(flat.len(), engine.particle_count() * 3);
        assert_eq!(flat[0], engine.positions()[0].x);
        assert_eq!(flat[5], engine.positions()[1].z);
    }

    #[test]
    fn test_reset() {
        let (mut engine, layout) = engine();
        let controller = ViewModeController::new();
        controller.request(ViewMode::Focus);
        engine.tick(0.05, &controller);
        engine.reset();
        assert_eq!(engine.positions(), layout.tree().positions());
        assert_eq!(engine.phase(), TransitionPhase::Idle);
        assert_eq!(engine.active_mode(), ViewMode::Tree);
    }
}
