//! Session state: shot records, per-frame snapshots, fire outcomes,
//! end-of-session stats and the analysis handed to the results screen.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, SessionTime, TargetId, Velocity};

/// Visible state handed to the renderer after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SessionTime,
    pub phase: SessionPhase,
    pub scenario: ScenarioId,
    pub targets: Vec<TargetView>,
    pub score: ScoreView,
}

/// A live target as the renderer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub position: Position,
    pub velocity: Velocity,
    pub radius: f64,
}

/// Running tally for the HUD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Percentage, 0 when nothing has been fired.
    pub accuracy: f64,
}

/// Signed near-miss offset in the firer's camera-local axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissOffset {
    /// Along camera right; negative = left of the target.
    pub relative_x: f64,
    /// Along camera up; negative = below the target.
    pub relative_y: f64,
    /// Magnitude of the 3D offset on the projection plane.
    pub distance_from_center: f64,
}

/// Context recorded for a miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MissDetail {
    /// Target the shot was compared against, if any was live.
    pub intended_target: Option<TargetId>,
    /// Absent when no target was live or the projection degenerated.
    pub offset: Option<MissOffset>,
    /// Horizontal velocity of the intended target at fire time.
    pub target_velocity_x: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShotKind {
    Hit { target_id: TargetId },
    Miss(MissDetail),
}

/// One fired shot. Appended once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    /// Wall clock at firing, milliseconds since the Unix epoch.
    pub timestamp_ms: u64,
    /// Session clock at firing.
    pub session_secs: f64,
    pub kind: ShotKind,
}

/// Result of resolving one fire event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShotResult {
    Hit {
        target_id: TargetId,
    },
    Miss {
        intended: Option<TargetId>,
        offset: Option<MissOffset>,
    },
    /// Fired outside an active session; nothing was recorded.
    Ignored,
}

/// Everything the view needs to re-render after a shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotOutcome {
    pub result: ShotResult,
    pub score: ScoreView,
    pub targets: Vec<TargetView>,
}

/// Frozen end-of-session tally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStats {
    pub scenario: ScenarioId,
    pub score: u32,
    pub shots_fired: u32,
    pub shots_hit: u32,
    /// Percentage, 0 when nothing has been fired.
    pub accuracy: f64,
    /// Carried through for display only.
    pub sensitivity: f64,
    pub duration_secs: f64,
    pub shot_log: Vec<ShotRecord>,
}

/// Aggregate miss analysis and coaching verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
    pub overshoots: u32,
    pub undershoots: u32,
    pub total_misses: u32,
    /// Mean |relative_x| over misses that carry an offset.
    pub avg_spread: f64,
    pub recommendation: Recommendation,
    pub message: String,
}

impl ShotRecord {
    pub fn is_hit(&self) -> bool {
        matches!(self.kind, ShotKind::Hit { .. })
    }

    pub fn miss(&self) -> Option<&MissDetail> {
        match &self.kind {
            ShotKind::Miss(detail) => Some(detail),
            ShotKind::Hit { .. } => None,
        }
    }
}

impl ShotResult {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotResult::Hit { .. })
    }
}

impl ScoreView {
    pub fn new(score: u32, shots_fired: u32, shots_hit: u32) -> Self {
        Self {
            score,
            shots_fired,
            shots_hit,
            accuracy: accuracy_pct(shots_hit, shots_fired),
        }
    }
}

impl Analysis {
    /// Analysis of a session without a single miss.
    pub fn perfect() -> Self {
        let recommendation = Recommendation::PerfectRun;
        Self {
            left: 0,
            right: 0,
            top: 0,
            bottom: 0,
            overshoots: 0,
            undershoots: 0,
            total_misses: 0,
            avg_spread: 0.0,
            recommendation,
            message: recommendation.message().to_string(),
        }
    }
}

/// Hit percentage. Zero when nothing has been fired.
pub fn accuracy_pct(shots_hit: u32, shots_fired: u32) -> f64 {
    if shots_fired == 0 {
        return 0.0;
    }
    shots_hit as f64 / shots_fired as f64 * 100.0
}
