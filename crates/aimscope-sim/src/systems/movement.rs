//! Kinematic integration for moving targets.
//!
//! Advances `x` by `velocity.x * elapsed`. When the step would carry a
//! target outward past the horizontal bound, the horizontal velocity is
//! reflected and the step is recomputed from the pre-tick position, so the
//! bounce happens within the same tick. The result is clamped to the bound.
//! `y` and `z` are never touched.

use hecs::World;

use aimscope_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World, elapsed_secs: f64, bounce_limit_x: f64) {
    if !elapsed_secs.is_finite() || elapsed_secs <= 0.0 {
        return;
    }

    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &mut Velocity)>() {
        if vel.is_zero() {
            continue;
        }
        let (x, vx) = step_x(pos.x, vel.x, elapsed_secs, bounce_limit_x);
        pos.x = x;
        vel.x = vx;
    }
}

/// One horizontal step with in-tick reflection. Returns the new `(x, vx)`.
pub fn step_x(x: f64, vx: f64, elapsed_secs: f64, bounce_limit_x: f64) -> (f64, f64) {
    let next = x + vx * elapsed_secs;
    if next.abs() > bounce_limit_x && next.signum() == vx.signum() {
        let reflected = -vx;
        let x = (x + reflected * elapsed_secs).clamp(-bounce_limit_x, bounce_limit_x);
        (x, reflected)
    } else {
        (next, vx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimscope_core::components::Target;
    use aimscope_core::types::TargetId;

    fn spawn(world: &mut World, x: f64, vx: f64) -> hecs::Entity {
        world.spawn((
            Target {
                id: TargetId(0),
                radius: 0.5,
            },
            Position::new(x, 2.0, -10.0),
            Velocity::horizontal(vx),
        ))
    }

    #[test]
    fn test_advances_by_velocity() {
        let mut world = World::new();
        let e = spawn(&mut world, 1.0, 3.0);
        run(&mut world, 0.5, 8.0);
        let pos = *world.get::<&Position>(e).unwrap();
        assert!((pos.x - 2.5).abs() < 1e-12);
        assert_eq!(pos.y, 2.0);
        assert_eq!(pos.z, -10.0);
    }

    #[test]
    fn test_bounce_reflects_within_tick() {
        let mut world = World::new();
        let e = spawn(&mut world, 7.9, 3.0);
        run(&mut world, 0.1, 8.0);
        let pos = *world.get::<&Position>(e).unwrap();
        let vel = *world.get::<&Velocity>(e).unwrap();
        assert_eq!(vel.x, -3.0);
        assert!((pos.x - 7.6).abs() < 1e-9, "x = {}", pos.x);
    }

    #[test]
    fn test_bounce_on_negative_side() {
        let (x, vx) = step_x(-7.95, -2.0, 0.1, 8.0);
        assert_eq!(vx, 2.0);
        assert!((x - -7.75).abs() < 1e-9);
    }

    #[test]
    fn test_landing_exactly_on_bound_does_not_reflect() {
        let (x, vx) = step_x(7.0, 2.0, 0.5, 8.0);
        assert_eq!(x, 8.0);
        assert_eq!(vx, 2.0);
    }

    #[test]
    fn test_zero_or_invalid_elapsed_is_noop() {
        let mut world = World::new();
        let e = spawn(&mut world, 3.0, 4.0);
        run(&mut world, 0.0, 8.0);
        run(&mut world, -1.0, 8.0);
        run(&mut world, f64::NAN, 8.0);
        run(&mut world, f64::INFINITY, 8.0);
        let pos = *world.get::<&Position>(e).unwrap();
        assert_eq!(pos.x, 3.0);
    }

    #[test]
    fn test_static_targets_untouched() {
        let mut world = World::new();
        let e = spawn(&mut world, 9.5, 0.0);
        run(&mut world, 1.0, 8.0);
        let pos = *world.get::<&Position>(e).unwrap();
        assert_eq!(pos.x, 9.5);
    }

    #[test]
    fn test_long_frame_stays_inside_bound() {
        let (mut x, mut vx) = step_x(0.0, 3.0, 5.0, 8.0);
        assert_eq!(vx, -3.0);
        assert!(x.abs() <= 8.0, "x = {x}");
        for _ in 0..60 {
            (x, vx) = step_x(x, vx, 1.0 / 60.0, 8.0);
            assert!(x.abs() <= 8.0, "x = {x}");
        }
        // Bounced off the left wall and heading right again.
        assert_eq!(vx, 3.0);
        assert!(x > -8.0 && x < -4.0, "x = {x}");
        for _ in 0..1200 {
            (x, vx) = step_x(x, vx, 1.0 / 60.0, 8.0);
            assert!(x.abs() <= 8.0, "x = {x}");
        }
    }

    #[test]
    fn test_inward_step_from_outside_is_not_reflected() {
        let (x, vx) = step_x(-9.0, 3.0, 0.1, 8.0);
        assert_eq!(vx, 3.0);
        assert!((x - -8.7).abs() < 1e-9);
    }
}
