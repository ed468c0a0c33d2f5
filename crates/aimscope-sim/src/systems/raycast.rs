//! Raycast resolver: ray-vs-sphere hit test plus intended-target selection.
//!
//! One pass over the live targets in store order. The ray is treated as an
//! infinite line (the projection length is not clamped), so a target behind
//! the origin can register if the line passes through it. When several
//! targets would register, the first one in iteration order wins; this is
//! not a nearest-occluder test.

use glam::DVec3;

use aimscope_core::state::TargetView;
use aimscope_core::types::{Ray, TargetId};

/// Outcome of resolving one shot against the live targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveResult {
    /// First target whose sphere the ray passes through.
    pub hit: Option<TargetId>,
    /// Target with the smallest angular deviation from the ray. `None` only
    /// when no targets are live.
    pub intended: Option<TargetId>,
}

/// Resolve a shot. `ray.direction` is expected to be unit length.
pub fn resolve(ray: &Ray, targets: &[TargetView]) -> ResolveResult {
    let mut hit = None;
    let mut intended: Option<(TargetId, f64)> = None;

    for target in targets {
        let center = target.position.as_dvec3();
        let to_target = center - ray.origin;

        if hit.is_none() && distance_to_center(ray, center) < target.radius {
            hit = Some(target.id);
        }

        let angle = angular_deviation(ray.direction, to_target);
        let better = match intended {
            None => true,
            Some((_, best)) => angle < best,
        };
        if better {
            intended = Some((target.id, angle));
        }
    }

    ResolveResult {
        hit,
        intended: intended.map(|(id, _)| id),
    }
}

/// Perpendicular distance from `center` to the ray's supporting line.
pub fn distance_to_center(ray: &Ray, center: DVec3) -> f64 {
    let projection_length = (center - ray.origin).dot(ray.direction);
    let closest_point = ray.at(projection_length);
    (closest_point - center).length()
}

/// Angle in radians between the ray and the direction to a target center.
/// Degenerate (zero-length) inputs yield a right angle rather than NaN.
pub fn angular_deviation(direction: DVec3, to_target: DVec3) -> f64 {
    direction
        .normalize_or_zero()
        .dot(to_target.normalize_or_zero())
        .clamp(-1.0, 1.0)
        .acos()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimscope_core::types::{Position, Velocity};

    fn target(id: u32, x: f64, y: f64, z: f64, radius: f64) -> TargetView {
        TargetView {
            id: TargetId(id),
            position: Position::new(x, y, z),
            velocity: Velocity::default(),
            radius,
        }
    }

    fn forward_ray() -> Ray {
        Ray::new(DVec3::new(0.0, 2.0, 0.0), DVec3::NEG_Z)
    }

    #[test]
    fn test_empty_target_set() {
        let result = resolve(&forward_ray(), &[]);
        assert_eq!(result, ResolveResult::default());
    }

    #[test]
    fn test_center_shot_hits() {
        let targets = vec![
            target(0, 3.0, 2.0, -10.0, 0.5),
            target(1, 0.0, 2.0, -10.0, 0.5),
        ];
        let result = resolve(&forward_ray(), &targets);
        assert_eq!(result.hit, Some(TargetId(1)));
        assert_eq!(result.intended, Some(TargetId(1)));
    }

    #[test]
    fn test_edge_is_exclusive() {
        // Ray passes exactly `radius` away from the center.
        let targets = vec![target(0, 0.5, 2.0, -10.0, 0.5)];
        let result = resolve(&forward_ray(), &targets);
        assert_eq!(result.hit, None);
        assert_eq!(result.intended, Some(TargetId(0)));

        let targets = vec![target(0, 0.49, 2.0, -10.0, 0.5)];
        assert_eq!(resolve(&forward_ray(), &targets).hit, Some(TargetId(0)));
    }

    #[test]
    fn test_miss_picks_smallest_angle_not_nearest() {
        // Target 0 is closer in straight-line terms but further off-axis.
        let targets = vec![
            target(0, 1.0, 2.0, -2.0, 0.3),
            target(1, 1.5, 2.0, -12.0, 0.3),
        ];
        let result = resolve(&forward_ray(), &targets);
        assert_eq!(result.hit, None);
        assert_eq!(result.intended, Some(TargetId(1)));
    }

    #[test]
    fn test_first_encountered_hit_wins_over_nearer() {
        // Both spheres straddle the ray; the far one comes first in store order.
        let targets = vec![
            target(0, 0.0, 2.0, -12.0, 0.5),
            target(1, 0.0, 2.0, -8.0, 0.5),
        ];
        let result = resolve(&forward_ray(), &targets);
        assert_eq!(result.hit, Some(TargetId(0)));
    }

    #[test]
    fn test_intended_ties_keep_first() {
        let targets = vec![
            target(0, 0.0, 2.0, -10.0, 0.5),
            target(1, 0.0, 2.0, -10.0, 0.5),
        ];
        let result = resolve(&forward_ray(), &targets);
        assert_eq!(result.hit, Some(TargetId(0)));
        assert_eq!(result.intended, Some(TargetId(0)));
    }

    #[test]
    fn test_target_behind_origin_can_register() {
        let targets = vec![target(0, 0.0, 2.0, 5.0, 0.5)];
        let result = resolve(&forward_ray(), &targets);
        assert_eq!(result.hit, Some(TargetId(0)));
    }

    #[test]
    fn test_zero_direction_still_picks_intended() {
        let ray = Ray::new(DVec3::new(0.0, 2.0, 0.0), DVec3::ZERO);
        let targets = vec![
            target(0, 2.0, 2.0, -10.0, 0.5),
            target(1, -2.0, 2.0, -10.0, 0.5),
        ];
        let result = resolve(&ray, &targets);
        assert_eq!(result.hit, None);
        assert_eq!(result.intended, Some(TargetId(0)));
    }

    #[test]
    fn test_target_at_origin_is_hit_and_intended() {
        let ray = forward_ray();
        let targets = vec![target(0, 0.0, 2.0, 0.0, 0.5)];
        let result = resolve(&ray, &targets);
        assert_eq!(result.hit, Some(TargetId(0)));
        assert_eq!(result.intended, Some(TargetId(0)));
    }

    #[test]
    fn test_angular_deviation() {
        assert_eq!(angular_deviation(DVec3::NEG_Z, DVec3::new(0.0, 0.0, -5.0)), 0.0);
        let right_angle = angular_deviation(DVec3::NEG_Z, DVec3::X);
        assert!((right_angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let behind = angular_deviation(DVec3::NEG_Z, DVec3::Z);
        assert!((behind - std::f64::consts::PI).abs() < 1e-12);
    }
}
