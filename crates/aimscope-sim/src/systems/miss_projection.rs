//! Miss projector: turns a near-miss into a signed 2D offset.
//!
//! The reference plane passes through the intended target's center with
//! the camera's forward axis as its normal. The fire ray is intersected
//! with that plane and the offset from the center is expressed along the
//! camera's right and up axes at fire time.

use aimscope_core::constants::PARALLEL_EPSILON;
use aimscope_core::error::SimError;
use aimscope_core::state::{MissOffset, TargetView};
use aimscope_core::types::{CameraBasis, Ray};

/// Project a missed ray onto the intended target's depth plane.
///
/// Fails with `DegenerateGeometry` when the ray runs parallel to the plane
/// (or the camera forward axis is zero); the caller records an offset-less
/// miss in that case.
pub fn project_miss(
    ray: &Ray,
    camera: &CameraBasis,
    intended: &TargetView,
) -> Result<MissOffset, SimError> {
    let normal = camera.forward;
    let center = intended.position.as_dvec3();

    let denom = normal.dot(ray.direction);
    if !denom.is_finite() || denom.abs() < PARALLEL_EPSILON {
        return Err(SimError::DegenerateGeometry);
    }

    let t = (center - ray.origin).dot(normal) / denom;
    if !t.is_finite() {
        return Err(SimError::DegenerateGeometry);
    }

    let diff = ray.at(t) - center;

    Ok(MissOffset {
        relative_x: diff.dot(camera.right),
        relative_y: diff.dot(camera.up),
        distance_from_center: diff.length(),
    })
}
