//! Core types and definitions for the AIMSCOPE aim trainer.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, shot records, snapshots, events, constants and
//! the error taxonomy. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
