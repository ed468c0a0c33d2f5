//! Host API: start and stop the game loop, forward commands, poll state.

use std::sync::mpsc;

use tracing::warn;

use aimscope_core::commands::PlayerCommand;
use aimscope_core::events::SessionEvent;
use aimscope_core::state::SessionSnapshot;

use crate::config::{AppConfig, AppError};
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the game loop if it is not already running. Returns the receiving
/// end of the session event stream.
pub fn start_game_loop(
    state: &AppState,
    config: AppConfig,
) -> Result<mpsc::Receiver<SessionEvent>, AppError> {
    let mut loop_handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::StatePoisoned)?;
    if loop_handle.is_some() {
        return Err(AppError::AlreadyRunning);
    }

    let (event_tx, event_rx) = mpsc::channel();
    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), event_tx)?;

    *state.command_tx.lock().map_err(|_| AppError::StatePoisoned)? = Some(cmd_tx);
    *loop_handle = Some(handle);

    Ok(event_rx)
}

/// Forward a player command to the game loop.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::StatePoisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Player(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::NotStarted),
    }
}

/// Latest snapshot, for polling and initial state.
pub fn get_snapshot(state: &AppState) -> Result<Option<SessionSnapshot>, AppError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| AppError::StatePoisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_game_loop(state: &AppState) -> Result<(), AppError> {
    let mut loop_handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::StatePoisoned)?;
    let Some(handle) = loop_handle.take() else {
        return Err(AppError::NotStarted);
    };

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|_| AppError::StatePoisoned)?
        .take()
    {
        // A closed channel means the loop is already gone.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if handle.join().is_err() {
        warn!("game loop thread panicked");
    }
    Ok(())
}
