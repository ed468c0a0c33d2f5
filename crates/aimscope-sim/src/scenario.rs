//! Scenario definitions: pool size, placement, motion and target size.

use aimscope_core::constants::*;
use aimscope_core::enums::ScenarioId;
use aimscope_core::types::Position;

/// Everything a scenario fixes about its targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProfile {
    pub scenario: ScenarioId,
    /// Number of live targets, held constant for the whole session.
    pub target_count: usize,
    /// Hit sphere radius.
    pub radius: f64,
    /// Whether targets get a horizontal velocity.
    pub moving: bool,
    /// Spawn point used instead of a random draw, if any.
    pub fixed_spawn: Option<Position>,
}

/// Build the profile for a given scenario.
pub fn build_profile(scenario: ScenarioId) -> ScenarioProfile {
    match scenario {
        // Three static targets, random placement.
        ScenarioId::Gridshot => ScenarioProfile {
            scenario,
            target_count: GRIDSHOT_TARGET_COUNT,
            radius: TARGET_RADIUS,
            moving: false,
            fixed_spawn: None,
        },
        // One strafing target that always enters from the middle of the lane.
        ScenarioId::Tracking => ScenarioProfile {
            scenario,
            target_count: SINGLE_TARGET_COUNT,
            radius: TARGET_RADIUS,
            moving: true,
            fixed_spawn: Some(Position::from(TRACKING_SPAWN)),
        },
        // One small static target, random placement.
        ScenarioId::Precision => ScenarioProfile {
            scenario,
            target_count: SINGLE_TARGET_COUNT,
            radius: PRECISION_TARGET_RADIUS,
            moving: false,
            fixed_spawn: None,
        },
    }
}
