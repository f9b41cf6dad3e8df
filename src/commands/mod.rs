//! Command implementations

pub mod families;
pub mod replay;

pub use families::{FamiliesResult, preview_families};
pub use replay::{ReplayResult, ReplayStep, replay_letters};
