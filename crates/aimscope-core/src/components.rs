//! ECS components for hecs target entities.
//!
//! Components are plain data. Kinematics and hit-testing live in the
//! simulation systems. Every target entity carries `Target`, `Position`
//! and `Velocity`.

use serde::{Deserialize, Serialize};

use crate::types::TargetId;

/// A live target. Presence in the world means it is active; a hit target is
/// despawned immediately.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub id: TargetId,
    /// Hit sphere radius.
    pub radius: f64,
}
