//! Shot-resolution and miss-analysis engine for AIMSCOPE.
//!
//! Owns the hecs world of live targets, resolves fire events against it,
//! keeps the append-only shot log and turns a finished session into
//! bias statistics and a coaching recommendation.

pub mod engine;
pub mod scenario;
pub mod shot_log;
pub mod systems;
pub mod world_setup;

pub use aimscope_core as core;
pub use engine::{SessionConfig, SessionEngine};
