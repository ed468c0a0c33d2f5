//! Player commands sent from the host to the session engine.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::ScenarioId;
use crate::types::{CameraBasis, Ray};

/// Inputs captured at the instant the player fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireInput {
    pub ray_origin: DVec3,
    /// Unit vector along the crosshair.
    pub ray_direction: DVec3,
    pub camera_right: DVec3,
    pub camera_up: DVec3,
    pub camera_forward: DVec3,
}

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Spawn the initial pool and start accepting fire events.
    StartSession { scenario: ScenarioId },
    /// Resolve one shot.
    Fire { shot: FireInput },
    /// Freeze the shot log and produce stats (countdown expired).
    EndSession,
}

impl FireInput {
    /// A shot fired straight down the camera's forward axis.
    pub fn from_camera(camera: &CameraBasis) -> Self {
        Self {
            ray_origin: camera.position,
            ray_direction: camera.forward,
            camera_right: camera.right,
            camera_up: camera.up,
            camera_forward: camera.forward,
        }
    }

    pub fn ray(&self) -> Ray {
        Ray::new(self.ray_origin, self.ray_direction)
    }

    /// Camera basis at fire time; the camera sits at the ray origin.
    pub fn camera(&self) -> CameraBasis {
        CameraBasis {
            position: self.ray_origin,
            forward: self.camera_forward,
            right: self.camera_right,
            up: self.camera_up,
        }
    }
}
