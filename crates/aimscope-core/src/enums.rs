//! Enumeration types used throughout the trainer.

use serde::{Deserialize, Serialize};

/// Training scenario. Fixed for the duration of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioId {
    /// Rapid-fire flicking: three static targets at random positions.
    #[default]
    Gridshot,
    /// One target oscillating horizontally across the lane.
    Tracking,
    /// One small static target at a random position.
    Precision,
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No targets spawned yet.
    #[default]
    Idle,
    /// Accepting ticks and fire events.
    Active,
    /// Countdown expired; the shot log is frozen.
    Ended,
}

/// Coaching verdict produced by the session analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    /// No misses at all.
    PerfectRun,
    /// Tracking: aim keeps running ahead of the target.
    Overshooting,
    /// Tracking: aim keeps trailing the target.
    Undershooting,
    /// Misses cluster to the left of targets.
    PullingLeft,
    /// Misses cluster to the right of targets.
    PullingRight,
    /// Misses cluster above or below targets.
    VerticalDrift,
    /// Misses are spread wide horizontally.
    WideScatter,
    /// No dominant pattern.
    Balanced,
}

impl ScenarioId {
    pub const ALL: [ScenarioId; 3] = [
        ScenarioId::Gridshot,
        ScenarioId::Tracking,
        ScenarioId::Precision,
    ];

    /// Display name for menus and reports.
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioId::Gridshot => "Gridshot",
            ScenarioId::Tracking => "Tracking",
            ScenarioId::Precision => "Precision",
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, ScenarioId::Tracking)
    }
}

impl Recommendation {
    /// The coaching text shown on the results screen.
    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::PerfectRun => "Perfect run! Your sensitivity is well-tuned.",
            Recommendation::Overshooting => {
                "You're overshooting moving targets. Try lowering your sensitivity or DPI slightly."
            }
            Recommendation::Undershooting => {
                "You're lagging behind moving targets. Try raising your sensitivity or DPI slightly."
            }
            Recommendation::PullingLeft => {
                "Most of your misses land LEFT of the target. You may be over-correcting leftward; slow down your final adjustment."
            }
            Recommendation::PullingRight => {
                "Most of your misses land RIGHT of the target. You may be over-flicking rightward; focus on stopping on the target."
            }
            Recommendation::VerticalDrift => {
                "Your misses drift vertically. Keep your crosshair at target head height and avoid pulling up or down."
            }
            Recommendation::WideScatter => {
                "Your shots are widely scattered. Your sensitivity may be too high; try lowering it for more control."
            }
            Recommendation::Balanced => {
                "Your aim is balanced with no strong bias. Keep practicing to tighten your grouping."
            }
        }
    }
}
