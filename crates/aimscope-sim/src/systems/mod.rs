//! Systems that operate on the target world and the shot log.
//!
//! Systems are free functions over `&mut World`, `&World` or plain slices.
//! They do not own state; the engine passes in what they need.

pub mod analysis;
pub mod miss_projection;
pub mod movement;
pub mod raycast;
pub mod snapshot;
