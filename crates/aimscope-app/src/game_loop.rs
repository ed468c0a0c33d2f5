//! Game loop thread: owns the session engine, ticks it at a fixed rate,
//! runs the session countdown and publishes snapshots and events.
//!
//! The engine is created inside the thread. Commands arrive over an `mpsc`
//! channel, events leave over another, and the latest snapshot is stored in
//! shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use aimscope_core::commands::PlayerCommand;
use aimscope_core::enums::SessionPhase;
use aimscope_core::events::SessionEvent;
use aimscope_core::state::SessionSnapshot;
use aimscope_sim::SessionEngine;

use crate::config::{AppConfig, AppError};
use crate::state::GameLoopCommand;

/// Drives one engine the way the loop thread does, minus the wall clock.
pub struct LoopDriver {
    engine: SessionEngine,
    tick_secs: f64,
    session_secs: f64,
}

impl LoopDriver {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine: SessionEngine::new(config.session_config()),
            tick_secs: config.tick_secs(),
            session_secs: config.session_secs,
        }
    }

    pub fn apply(&mut self, command: PlayerCommand) -> Option<SessionEvent> {
        self.engine.handle_command(command)
    }

    /// Advance one tick. Ends the session once the countdown runs out.
    pub fn advance(&mut self) -> (SessionSnapshot, Option<SessionEvent>) {
        let snapshot = self.engine.tick(self.tick_secs);
        if snapshot.phase == SessionPhase::Active && self.remaining_secs() <= 0.0 {
            info!(session_secs = self.session_secs, "countdown expired");
            let event = self.engine.handle_command(PlayerCommand::EndSession);
            return (self.engine.snapshot(), event);
        }
        (snapshot, None)
    }

    /// Countdown seconds left, rounded to the nearest tick.
    pub fn remaining_secs(&self) -> f64 {
        let left = self.session_secs - self.engine.time().elapsed_secs;
        if left < self.tick_secs * 0.5 {
            0.0
        } else {
            left
        }
    }

    pub fn engine(&self) -> &SessionEngine {
        &self.engine
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(self.tick_secs)
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: AppConfig,
    latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
    event_tx: mpsc::Sender<SessionEvent>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), AppError> {
    config.validate()?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("aimscope-game-loop".into())
        .spawn(move || {
            run_game_loop(LoopDriver::new(&config), cmd_rx, &latest_snapshot, &event_tx);
        })
        .map_err(AppError::ThreadSpawn)?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown or channel disconnect.
fn run_game_loop(
    mut driver: LoopDriver,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SessionSnapshot>>,
    event_tx: &mpsc::Sender<SessionEvent>,
) {
    let tick_duration = driver.tick_duration();
    let mut next_tick_time = Instant::now();
    info!(tick_ms = tick_duration.as_secs_f64() * 1000.0, "game loop started");

    loop {
        // 1. Drain pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    if let Some(event) = driver.apply(cmd) {
                        publish(event_tx, event);
                    }
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick and run the countdown
        let (snapshot, event) = driver.advance();
        if let Some(event) = event {
            publish(event_tx, event);
        }

        // 3. Store latest snapshot
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset instead of catching up
            next_tick_time = now;
        }
    }
}

fn publish(event_tx: &mpsc::Sender<SessionEvent>, event: SessionEvent) {
    if event_tx.send(event).is_err() {
        debug!("event receiver dropped");
    }
}
