//! Error taxonomy for the shot-resolution engine.
//!
//! Every error here is recoverable: the engine logs it and degrades to a
//! well-defined outcome (a no-op, an offset-less miss, an ignored fire).

use thiserror::Error;

use crate::enums::SessionPhase;
use crate::types::TargetId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Removal or respawn referenced an id that is no longer live.
    #[error("target {target_id} not found")]
    NotFound { target_id: TargetId },

    /// Fire ray is parallel to the miss projection plane.
    #[error("fire ray is parallel to the projection plane")]
    DegenerateGeometry,

    /// Operation requires an active session.
    #[error("session is not active (phase {phase:?})")]
    SessionNotActive { phase: SessionPhase },
}

impl SimError {
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimError::NotFound { .. } => true,
            SimError::DegenerateGeometry => true,
            SimError::SessionNotActive { .. } => true,
        }
    }
}
