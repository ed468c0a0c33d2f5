//! Events published by the session host for the view layer.

use serde::{Deserialize, Serialize};

use crate::state::{Analysis, SessionSnapshot, SessionStats, ShotOutcome};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// Initial pool spawned.
    SessionStarted { snapshot: SessionSnapshot },
    /// A fire event was resolved.
    ShotResolved { outcome: ShotOutcome },
    /// Countdown expired. Carries the frozen stats and their analysis.
    SessionEnded {
        stats: SessionStats,
        analysis: Analysis,
    },
}
