//! End-to-end sessions: fire scripted shots through the engine and check
//! what the analyzer concludes from the resulting log.

use glam::DVec3;

use aimscope_core::commands::FireInput;
use aimscope_core::enums::{Recommendation, ScenarioId};
use aimscope_core::state::ShotResult;
use aimscope_core::types::CameraBasis;
use aimscope_sim::{SessionConfig, SessionEngine};

const EYE: DVec3 = DVec3::new(0.0, 1.6, 0.0);

fn shot_at(point: DVec3) -> FireInput {
    FireInput::from_camera(&CameraBasis::looking_at(EYE, point))
}

fn engine(scenario: ScenarioId, seed: u64) -> SessionEngine {
    let mut engine = SessionEngine::new(SessionConfig {
        seed,
        ..Default::default()
    });
    engine.spawn_initial(scenario);
    engine
}

#[test]
fn tracking_session_leading_the_target_is_overshooting() {
    let mut engine = engine(ScenarioId::Tracking, 2024);
    let target = engine.targets()[0].clone();
    let lead = target.velocity.x.signum();

    for _ in 0..5 {
        let aim = target.position.as_dvec3() + DVec3::new(lead * 1.2, 0.0, 0.0);
        let outcome = engine.fire(&shot_at(aim));
        assert!(matches!(outcome.result, ShotResult::Miss { .. }));
    }

    let stats = engine.end_session();
    let analysis = SessionEngine::analyze(&stats);
    assert_eq!(analysis.overshoots, 5);
    assert_eq!(analysis.undershoots, 0);
    assert_eq!(analysis.recommendation, Recommendation::Overshooting);
}

#[test]
fn tracking_session_trailing_the_target_is_undershooting() {
    let mut engine = engine(ScenarioId::Tracking, 99);
    let target = engine.targets()[0].clone();
    let trail = -target.velocity.x.signum();

    for _ in 0..6 {
        let aim = target.position.as_dvec3() + DVec3::new(trail * 1.2, 0.0, 0.0);
        engine.fire(&shot_at(aim));
    }

    let analysis = SessionEngine::analyze(&engine.end_session());
    assert_eq!(analysis.undershoots, 6);
    assert_eq!(analysis.recommendation, Recommendation::Undershooting);
}

#[test]
fn precision_session_pulling_left_names_left() {
    let mut engine = engine(ScenarioId::Precision, 7);
    let center = engine.targets()[0].position.as_dvec3();

    for i in 0..10 {
        let dx = if i < 8 { -0.8 } else { 0.8 };
        engine.fire(&shot_at(center + DVec3::new(dx, 0.0, 0.0)));
    }

    let analysis = SessionEngine::analyze(&engine.end_session());
    assert_eq!((analysis.left, analysis.right), (8, 2));
    assert_eq!(analysis.recommendation, Recommendation::PullingLeft);
    assert!(analysis.message.contains("LEFT"));
}

#[test]
fn precision_session_high_misses_drift_vertically() {
    let mut engine = engine(ScenarioId::Precision, 8);
    let center = engine.targets()[0].position.as_dvec3();

    for i in 0..6 {
        let dx = if i % 2 == 0 { -0.2 } else { 0.2 };
        engine.fire(&shot_at(center + DVec3::new(dx, 0.9, 0.0)));
    }

    let analysis = SessionEngine::analyze(&engine.end_session());
    assert_eq!(analysis.top, 6);
    assert_eq!(analysis.recommendation, Recommendation::VerticalDrift);
}

#[test]
fn flawless_session_is_a_perfect_run() {
    let mut engine = engine(ScenarioId::Gridshot, 55);
    for _ in 0..12 {
        let t = engine.targets()[0].position.as_dvec3();
        assert!(engine.fire(&shot_at(t)).result.is_hit());
    }
    let stats = engine.end_session();
    assert_eq!(stats.accuracy, 100.0);
    let analysis = SessionEngine::analyze(&stats);
    assert_eq!(analysis.message, "Perfect run! Your sensitivity is well-tuned.");
}

#[test]
fn stats_serialize_for_the_results_screen() {
    let mut engine = engine(ScenarioId::Tracking, 3);
    let t = engine.targets()[0].position.as_dvec3();
    engine.fire(&shot_at(t + DVec3::new(0.0, -1.0, 0.0)));
    let stats = engine.end_session();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["scenario"], "Tracking");
    assert_eq!(json["shot_log"][0]["kind"]["type"], "Miss");
    assert_eq!(engine.shot_log().miss_offsets().len(), 1);
}
