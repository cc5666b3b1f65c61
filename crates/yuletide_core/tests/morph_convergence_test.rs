//! # Morph Convergence Tests
//!
//! End-to-end behaviour of the morph engine driven through the view-mode
//! controller, the way the render loop drives it.
//!
//! Run with: cargo test -p yuletide_core --test morph_convergence_test -- --nocapture

use yuletide_core::{MorphConfig, MorphEngine, TransitionPhase, ViewModeController};
use yuletide_procedural::{LayoutGenerator, LayoutParams, LayoutSeed, TreeLayout};
use yuletide_shared::ViewMode;

const FRAME: f32 = 1.0 / 60.0;

fn layout() -> TreeLayout {
    LayoutGenerator::new(LayoutParams::default(), LayoutSeed::new(2024)).generate()
}

/// Ticks until IDLE, returning the number of ticks taken.
fn run_until_idle(engine: &mut MorphEngine, controller: &ViewModeController, max: usize) -> usize {
    for tick in 1..=max {
        if engine.tick(FRAME, controller).phase == TransitionPhase::Idle {
            return tick;
        }
    }
    panic!("no convergence within {max} ticks");
}

// ============================================================================
// CONVERGENCE
// ============================================================================

#[test]
fn test_tree_to_scatter_converges_within_epsilon() {
    let layout = layout();
    let mut engine = MorphEngine::new(&layout, MorphConfig::default());
    let controller = ViewModeController::new();

    controller.request(ViewMode::Scatter);
    let ticks = run_until_idle(&mut engine, &controller, 600);
    println!("TREE -> SCATTER converged after {ticks} ticks");

    // Worst case is ~36 units away; the factor per tick is 1/6.
    assert!(ticks > 10 && ticks < 120, "ticks = {ticks}");

    for (p, target) in engine.positions().iter().zip(layout.scatter().positions()) {
        assert!((*target - *p).l1_norm() < 0.5);
    }
}

#[test]
fn test_focus_shares_scatter_targets() {
    let layout = layout();
    let mut engine = MorphEngine::new(&layout, MorphConfig::default());
    let controller = ViewModeController::new();

    controller.request(ViewMode::Scatter);
    run_until_idle(&mut engine, &controller, 600);

    // Already on the SCATTER formation: FOCUS is adopted and converges at once.
    controller.request(ViewMode::Focus);
    let report = engine.tick(FRAME, &controller);
    assert_eq!(report.adopted, Some(ViewMode::Focus));
    assert_eq!(report.phase, TransitionPhase::Idle);
    assert_eq!(engine.active_mode(), ViewMode::Focus);
}

#[test]
fn test_round_trip_returns_to_tree() {
    let layout = layout();
    let mut engine = MorphEngine::new(&layout, MorphConfig::default());
    let controller = ViewModeController::new();

    controller.request(ViewMode::Scatter);
    run_until_idle(&mut engine, &controller, 600);
    controller.request(ViewMode::Tree);
    run_until_idle(&mut engine, &controller, 600);

    for (p, target) in engine.positions().iter().zip(layout.tree().positions()) {
        assert!((*target - *p).l1_norm() < 0.5);
    }
}

// ============================================================================
// ANTI-THRASH
// ============================================================================

#[test]
fn test_mid_transition_requests_are_not_sampled() {
    let layout = layout();
    let mut engine = MorphEngine::new(&layout, MorphConfig::default());
    let controller = ViewModeController::new();

    controller.request(ViewMode::Scatter);
    engine.tick(FRAME, &controller);
    assert!(engine.is_transitioning());

    // Flip-flop requests while in flight.
    for i in 0..5 {
        controller.request(if i % 2 == 0 { ViewMode::Tree } else { ViewMode::Focus });
        let report = engine.tick(FRAME, &controller);
        assert_eq!(report.active_mode, ViewMode::Scatter);
        assert_eq!(report.adopted, None);
    }
}

#[test]
fn test_latest_request_wins_after_convergence() {
    let layout = layout();
    let mut engine = MorphEngine::new(&layout, MorphConfig::default());
    let controller = ViewModeController::new();

    controller.request(ViewMode::Scatter);
    engine.tick(FRAME, &controller);
    controller.request(ViewMode::Focus);
    controller.request(ViewMode::Tree);

    // Requests made in flight are not queued: the last one is what counts.
    run_until_idle(&mut engine, &controller, 600);
    assert_eq!(engine.active_mode(), ViewMode::Scatter);

    let report = engine.tick(FRAME, &controller);
    assert_eq!(report.adopted, Some(ViewMode::Tree));
    assert_eq!(report.phase, TransitionPhase::Transitioning);
}

// ============================================================================
// NUMERICAL EDGES
// ============================================================================

#[test]
fn test_huge_dt_snaps_without_overshoot() {
    let layout = layout();
    let mut engine = MorphEngine::new(&layout, MorphConfig::default());
    let controller = ViewModeController::new();

    controller.request(ViewMode::Scatter);
    engine.tick(1000.0, &controller);
    assert_eq!(engine.positions(), layout.scatter().positions());
}

#[test]
fn test_zero_particles() {
    let params = LayoutParams {
        particle_count: 0,
        ..LayoutParams::default()
    };
    let layout = LayoutGenerator::new(params, LayoutSeed::new(1)).generate();
    let mut engine = MorphEngine::new(&layout, MorphConfig::default());
    let controller = ViewModeController::new();

    controller.request(ViewMode::Scatter);
    let report = engine.tick(FRAME, &controller);
    assert_eq!(report.adopted, Some(ViewMode::Scatter));
    assert_eq!(report.max_displacement, 0.0);
    assert_eq!(report.phase, TransitionPhase::Idle);
    assert!(engine.positions_flat().is_empty());
}
