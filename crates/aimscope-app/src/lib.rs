//! AIMSCOPE frame-driven host.
//!
//! Wires the session engine into a fixed-rate game loop thread and exposes
//! a small host API for sending commands and polling snapshots.

pub mod config;
pub mod game_loop;
pub mod host;
pub mod state;

pub use aimscope_core as core;
pub use config::{AppConfig, AppError};
