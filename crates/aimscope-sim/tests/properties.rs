//! Property tests for the raycast resolver.

use glam::DVec3;
use proptest::prelude::*;

use aimscope_core::state::TargetView;
use aimscope_core::types::{Position, Ray, TargetId, Velocity};
use aimscope_sim::systems::raycast::resolve;

fn arb_point() -> impl Strategy<Value = DVec3> {
    (-5.0f64..5.0, 1.0f64..4.0, -13.0f64..-8.0).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

fn arb_targets() -> impl Strategy<Value = Vec<TargetView>> {
    prop::collection::vec((arb_point(), 0.3f64..0.6), 1..6).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (p, radius))| TargetView {
                id: TargetId(i as u32),
                position: Position::from(p),
                velocity: Velocity::default(),
                radius,
            })
            .collect()
    })
}

fn arb_ray() -> impl Strategy<Value = Ray> {
    (
        (-1.0f64..1.0, 1.0f64..2.5, -1.0f64..1.0),
        (-0.6f64..0.6, -0.4f64..0.4),
    )
        .prop_map(|((ox, oy, oz), (dx, dy))| {
            Ray::new(
                DVec3::new(ox, oy, oz),
                DVec3::new(dx, dy, -1.0).normalize(),
            )
        })
}

proptest! {
    #[test]
    fn translation_does_not_change_outcome(
        ray in arb_ray(),
        targets in arb_targets(),
        shift in (-50.0f64..50.0, -50.0f64..50.0, -50.0f64..50.0),
    ) {
        let shift = DVec3::new(shift.0, shift.1, shift.2);
        let moved_ray = Ray::new(ray.origin + shift, ray.direction);
        let moved: Vec<TargetView> = targets
            .iter()
            .map(|t| TargetView { position: t.position.translated(shift), ..t.clone() })
            .collect();

        prop_assert_eq!(resolve(&ray, &targets), resolve(&moved_ray, &moved));
    }

    #[test]
    fn ray_through_center_hits_first_target(
        origin in (-1.0f64..1.0, 1.0f64..2.5, -1.0f64..1.0),
        targets in arb_targets(),
    ) {
        let origin = DVec3::new(origin.0, origin.1, origin.2);
        let aimed = &targets[0];
        let ray = Ray::new(origin, (aimed.position.as_dvec3() - origin).normalize());

        let result = resolve(&ray, &targets);
        prop_assert_eq!(result.hit, Some(aimed.id));
        prop_assert!(result.intended.is_some());
    }

    #[test]
    fn intended_is_present_whenever_targets_are(
        ray in arb_ray(),
        targets in arb_targets(),
    ) {
        let result = resolve(&ray, &targets);
        prop_assert!(result.intended.is_some());
        if let Some(hit) = result.hit {
            prop_assert!(targets.iter().any(|t| t.id == hit));
        }
    }
}
