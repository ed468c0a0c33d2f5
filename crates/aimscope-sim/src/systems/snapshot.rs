//! Snapshot system: builds the renderer-facing view of the session.

use hecs::World;

use aimscope_core::enums::{ScenarioId, SessionPhase};
use aimscope_core::state::{ScoreView, SessionSnapshot};
use aimscope_core::types::SessionTime;

use crate::world_setup::collect_targets;

/// Build a complete snapshot from the current world and counters.
pub fn build_snapshot(
    world: &World,
    time: &SessionTime,
    phase: SessionPhase,
    scenario: ScenarioId,
    score: ScoreView,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        phase,
        scenario,
        targets: collect_targets(world),
        score,
    }
}
