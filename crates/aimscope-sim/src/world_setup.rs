//! Target spawn factories and the remove-and-respawn rule.
//!
//! Targets are hecs entities carrying `Target`, `Position` and `Velocity`.
//! Ids come from a counter owned by the engine, so two live targets can
//! never share one.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use aimscope_core::components::Target;
use aimscope_core::constants::*;
use aimscope_core::enums::ScenarioId;
use aimscope_core::error::SimError;
use aimscope_core::state::TargetView;
use aimscope_core::types::{Position, TargetId, Velocity};

use crate::scenario::build_profile;

/// Spawn the full pool for a scenario, honoring its fixed spawn point.
pub fn spawn_pool(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    scenario: ScenarioId,
) -> Vec<TargetView> {
    let profile = build_profile(scenario);
    (0..profile.target_count)
        .map(|_| spawn_target(world, rng, next_target_id, scenario, profile.fixed_spawn))
        .collect()
}

/// Spawn a single target. A `fixed_position` is used verbatim; otherwise the
/// position is drawn uniformly from the spawn volume in front of the player.
pub fn spawn_target(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    scenario: ScenarioId,
    fixed_position: Option<Position>,
) -> TargetView {
    let profile = build_profile(scenario);

    let position = fixed_position.unwrap_or_else(|| random_spawn_position(rng));

    let velocity = if profile.moving {
        let speed: f64 = rng.gen_range(TRACKING_SPEED_MIN..TRACKING_SPEED_MAX);
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        Velocity::horizontal(speed * sign)
    } else {
        Velocity::default()
    };

    let id = TargetId(*next_target_id);
    *next_target_id += 1;

    let target = Target {
        id,
        radius: profile.radius,
    };
    world.spawn((target, position, velocity));

    debug!(%id, ?position, vx = velocity.x, "spawned target");

    TargetView {
        id,
        position,
        velocity,
        radius: profile.radius,
    }
}

/// Remove the target with `target_id` and spawn exactly one replacement
/// under the scenario's spawn rule, keeping the pool size unchanged.
pub fn remove_and_respawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_target_id: &mut u32,
    scenario: ScenarioId,
    target_id: TargetId,
) -> Result<TargetView, SimError> {
    let entity = world
        .query_mut::<&Target>()
        .into_iter()
        .find(|(_, target)| target.id == target_id)
        .map(|(entity, _)| entity)
        .ok_or(SimError::NotFound { target_id })?;

    world
        .despawn(entity)
        .map_err(|_| SimError::NotFound { target_id })?;

    let fixed = build_profile(scenario).fixed_spawn;
    Ok(spawn_target(world, rng, next_target_id, scenario, fixed))
}

/// All live targets in spawn order (ascending id). This is the iteration
/// order the raycast resolver sees.
pub fn collect_targets(world: &World) -> Vec<TargetView> {
    let mut query = world.query::<(&Target, &Position, &Velocity)>();
    let mut targets: Vec<TargetView> = query
        .iter()
        .map(|(_entity, (target, pos, vel))| TargetView {
            id: target.id,
            position: *pos,
            velocity: *vel,
            radius: target.radius,
        })
        .collect();
    targets.sort_by_key(|t| t.id);
    targets
}

fn random_spawn_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(SPAWN_X_MIN..SPAWN_X_MAX),
        rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX),
        rng.gen_range(SPAWN_Z_MIN..SPAWN_Z_MAX),
    )
}
