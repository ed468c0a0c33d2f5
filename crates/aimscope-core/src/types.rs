//! Fundamental geometric and session types.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// 3D position in world space (scene units).
/// x = right, y = up, z = toward the viewer (targets live at negative z).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 3D velocity in world space (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Identifier of a live target. Allocated from a monotonically increasing
/// counter, so it is never reused within a session.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TargetId(pub u32);

/// Session clock advanced by the frame-driven `tick`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SessionTime {
    /// Number of ticks applied so far.
    pub tick: u64,
    /// Sum of elapsed seconds passed to `tick`.
    pub elapsed_secs: f64,
}

/// A fire ray in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: DVec3,
    /// Expected to be unit length; zero-length is tolerated.
    pub direction: DVec3,
}

/// Camera orientation at the moment of firing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraBasis {
    pub position: DVec3,
    pub forward: DVec3,
    pub right: DVec3,
    pub up: DVec3,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_dvec3().distance(other.as_dvec3())
    }

    /// Same position shifted by `offset`.
    pub fn translated(&self, offset: DVec3) -> Self {
        (self.as_dvec3() + offset).into()
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Position {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Purely horizontal velocity (the only kind a moving target gets).
    pub fn horizontal(x: f64) -> Self {
        Self::new(x, 0.0, 0.0)
    }

    pub fn as_dvec3(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Speed magnitude (units/s).
    pub fn speed(&self) -> f64 {
        self.as_dvec3().length()
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

impl SessionTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

impl Ray {
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Point at signed distance `t` along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

impl CameraBasis {
    /// Basis of an unrotated camera: looking down -Z, right = +X, up = +Y.
    pub fn looking_down_negative_z(position: DVec3) -> Self {
        Self {
            position,
            forward: DVec3::NEG_Z,
            right: DVec3::X,
            up: DVec3::Y,
        }
    }

    /// Build a basis from yaw/pitch (radians). Yaw 0 / pitch 0 looks down -Z;
    /// positive yaw turns right, positive pitch looks up.
    pub fn from_yaw_pitch(position: DVec3, yaw: f64, pitch: f64) -> Self {
        let (sy, cy) = yaw.sin_cos();
        let (sp, cp) = pitch.sin_cos();
        let forward = DVec3::new(sy * cp, sp, -cy * cp);
        let right = DVec3::new(cy, 0.0, sy);
        let up = right.cross(forward);
        Self {
            position,
            forward,
            right,
            up,
        }
    }

    /// Basis of a camera at `position` aimed at `point`, with no roll.
    pub fn looking_at(position: DVec3, point: DVec3) -> Self {
        let dir = (point - position).normalize_or_zero();
        if dir == DVec3::ZERO {
            return Self::looking_down_negative_z(position);
        }
        let yaw = dir.x.atan2(-dir.z);
        let pitch = dir.y.clamp(-1.0, 1.0).asin();
        Self::from_yaw_pitch(position, yaw, pitch)
    }

    /// The ray a shot fired straight down the crosshair travels along.
    pub fn forward_ray(&self) -> Ray {
        Ray::new(self.position, self.forward)
    }
}
