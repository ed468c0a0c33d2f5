//! Session engine: the single owner of all authoritative session state.
//!
//! `SessionEngine` owns the hecs world of live targets, the seeded RNG, the
//! shot log and the score counters. Ticks and fire events are synchronous
//! and resolved to completion one at a time, so every call observes the
//! latest target set. Completely headless, enabling deterministic testing.

use std::time::{SystemTime, UNIX_EPOCH};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use aimscope_core::commands::{FireInput, PlayerCommand};
use aimscope_core::constants::{BOUNCE_LIMIT_X, SCORE_PER_HIT};
use aimscope_core::enums::{ScenarioId, SessionPhase};
use aimscope_core::error::SimError;
use aimscope_core::events::SessionEvent;
use aimscope_core::state::*;
use aimscope_core::types::{Ray, SessionTime, TargetId};

use crate::shot_log::ShotLog;
use crate::systems;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same spawn sequence.
    pub seed: u64,
    /// Player's sensitivity multiplier. Carried into the stats for display.
    pub sensitivity: f64,
    /// Horizontal bound at which moving targets reflect.
    pub bounce_limit_x: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            sensitivity: 1.0,
            bounce_limit_x: BOUNCE_LIMIT_X,
        }
    }
}

/// The session engine. Owns the target world and all session state.
pub struct SessionEngine {
    world: World,
    time: SessionTime,
    phase: SessionPhase,
    scenario: ScenarioId,
    config: SessionConfig,
    rng: ChaCha8Rng,
    next_target_id: u32,
    shot_log: ShotLog,
    score: u32,
    shots_fired: u32,
    shots_hit: u32,
    final_stats: Option<SessionStats>,
}

impl SessionEngine {
    /// Create a new engine with the given config. No targets until
    /// `spawn_initial`.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            world: World::new(),
            time: SessionTime::default(),
            phase: SessionPhase::default(),
            scenario: ScenarioId::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_target_id: 0,
            shot_log: ShotLog::new(),
            score: 0,
            shots_fired: 0,
            shots_hit: 0,
            final_stats: None,
        }
    }

    /// Start a session: clear any previous state and spawn the scenario's
    /// full target pool.
    pub fn spawn_initial(&mut self, scenario: ScenarioId) -> Vec<TargetView> {
        self.world.clear();
        self.time = SessionTime::default();
        self.scenario = scenario;
        self.shot_log.clear();
        self.score = 0;
        self.shots_fired = 0;
        self.shots_hit = 0;
        self.final_stats = None;

        let targets = world_setup::spawn_pool(
            &mut self.world,
            &mut self.rng,
            &mut self.next_target_id,
            scenario,
        );
        self.phase = SessionPhase::Active;

        info!(
            scenario = scenario.label(),
            targets = targets.len(),
            "session started"
        );
        targets
    }

    /// Advance target kinematics by one frame and return the new snapshot.
    /// Only moves targets while the session is active.
    pub fn tick(&mut self, elapsed_secs: f64) -> SessionSnapshot {
        if self.phase == SessionPhase::Active {
            systems::movement::run(&mut self.world, elapsed_secs, self.config.bounce_limit_x);
            if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
                self.time.advance(elapsed_secs);
            }
        }
        self.snapshot()
    }

    /// Resolve one fire event to completion: raycast, optional respawn and
    /// exactly one shot-log append. Fire events outside an active session
    /// are ignored and leave no record.
    pub fn fire(&mut self, input: &FireInput) -> ShotOutcome {
        if let Err(err) = self.require_active() {
            warn!(%err, "fire ignored");
            return self.outcome(ShotResult::Ignored);
        }

        let ray = Ray::new(input.ray_origin, input.ray_direction.normalize_or_zero());
        let targets = world_setup::collect_targets(&self.world);
        let resolved = systems::raycast::resolve(&ray, &targets);

        self.shots_fired += 1;

        let result = match resolved.hit {
            Some(target_id) => self.register_hit(target_id),
            None => {
                let intended = resolved
                    .intended
                    .and_then(|id| targets.iter().find(|t| t.id == id));
                self.register_miss(&ray, input, intended)
            }
        };

        debug!(?result, shots_fired = self.shots_fired, "shot resolved");
        self.outcome(result)
    }

    /// Freeze the shot log and return the final tally. Further fire events
    /// are ignored. Calling this again returns the same frozen stats.
    pub fn end_session(&mut self) -> SessionStats {
        if let Some(stats) = &self.final_stats {
            return stats.clone();
        }

        self.phase = SessionPhase::Ended;
        let stats = SessionStats {
            scenario: self.scenario,
            score: self.score,
            shots_fired: self.shots_fired,
            shots_hit: self.shots_hit,
            accuracy: accuracy_pct(self.shots_hit, self.shots_fired),
            sensitivity: self.config.sensitivity,
            duration_secs: self.time.elapsed_secs,
            shot_log: self.shot_log.records().to_vec(),
        };

        info!(
            scenario = self.scenario.label(),
            score = stats.score,
            shots_fired = stats.shots_fired,
            accuracy = stats.accuracy,
            "session ended"
        );
        self.final_stats = Some(stats.clone());
        stats
    }

    /// Run the session analyzer over frozen stats.
    pub fn analyze(stats: &SessionStats) -> Analysis {
        let analysis = systems::analysis::analyze_session(stats);
        info!(
            recommendation = ?analysis.recommendation,
            misses = analysis.total_misses,
            "session analyzed"
        );
        analysis
    }

    /// Apply a command and return the event it produced, if any.
    /// `EndSession` only produces an event the first time, so the analyzer
    /// runs exactly once per session.
    pub fn handle_command(&mut self, command: PlayerCommand) -> Option<SessionEvent> {
        match command {
            PlayerCommand::StartSession { scenario } => {
                self.spawn_initial(scenario);
                Some(SessionEvent::SessionStarted {
                    snapshot: self.snapshot(),
                })
            }
            PlayerCommand::Fire { shot } => {
                let outcome = self.fire(&shot);
                if matches!(outcome.result, ShotResult::Ignored) {
                    return None;
                }
                Some(SessionEvent::ShotResolved { outcome })
            }
            PlayerCommand::EndSession => {
                if self.phase != SessionPhase::Active {
                    warn!(phase = ?self.phase, "end of session ignored");
                    return None;
                }
                let stats = self.end_session();
                let analysis = Self::analyze(&stats);
                Some(SessionEvent::SessionEnded { stats, analysis })
            }
        }
    }

    /// Current renderer-facing snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.scenario,
            self.score_view(),
        )
    }

    /// Live targets in resolver iteration order.
    pub fn targets(&self) -> Vec<TargetView> {
        world_setup::collect_targets(&self.world)
    }

    pub fn score_view(&self) -> ScoreView {
        ScoreView::new(self.score, self.shots_fired, self.shots_hit)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn scenario(&self) -> ScenarioId {
        self.scenario
    }

    pub fn time(&self) -> SessionTime {
        self.time
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn shot_log(&self) -> &ShotLog {
        &self.shot_log
    }

    /// Get a read-only reference to the target world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Remove a live target and spawn its replacement. Unknown ids are a
    /// logged no-op.
    pub fn remove_and_respawn(&mut self, target_id: TargetId) -> Result<TargetView, SimError> {
        world_setup::remove_and_respawn(
            &mut self.world,
            &mut self.rng,
            &mut self.next_target_id,
            self.scenario,
            target_id,
        )
        .inspect_err(|err| warn!(%err, "respawn skipped"))
    }

    fn require_active(&self) -> Result<(), SimError> {
        match self.phase {
            SessionPhase::Active => Ok(()),
            phase => Err(SimError::SessionNotActive { phase }),
        }
    }

    fn register_hit(&mut self, target_id: TargetId) -> ShotResult {
        self.score += SCORE_PER_HIT;
        self.shots_hit += 1;
        let _ = self.remove_and_respawn(target_id);
        self.append(ShotKind::Hit { target_id });
        ShotResult::Hit { target_id }
    }

    fn register_miss(
        &mut self,
        ray: &Ray,
        input: &FireInput,
        intended: Option<&TargetView>,
    ) -> ShotResult {
        let detail = match intended {
            None => MissDetail::default(),
            Some(target) => {
                let offset =
                    match systems::miss_projection::project_miss(ray, &input.camera(), target) {
                        Ok(offset) => Some(offset),
                        Err(err) => {
                            debug!(%err, target = %target.id, "miss recorded without offset");
                            None
                        }
                    };
                MissDetail {
                    intended_target: Some(target.id),
                    offset,
                    target_velocity_x: Some(target.velocity.x),
                }
            }
        };

        self.append(ShotKind::Miss(detail));
        ShotResult::Miss {
            intended: detail.intended_target,
            offset: detail.offset,
        }
    }

    fn append(&mut self, kind: ShotKind) {
        self.shot_log.append(ShotRecord {
            timestamp_ms: wall_clock_ms(),
            session_secs: self.time.elapsed_secs,
            kind,
        });
    }

    fn outcome(&self, result: ShotResult) -> ShotOutcome {
        ShotOutcome {
            result,
            score: self.score_view(),
            targets: self.targets(),
        }
    }
}

fn wall_clock_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
