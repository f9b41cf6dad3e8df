//! Adversarial hangman engine
//!
//! Partitions the candidate words by reveal pattern after every guess and keeps the
//! family that leaves the player with the most words to rule out.

mod error;
mod guesser;
mod partition;
mod selector;

pub use error::{EngineError, ErrorKind};
pub use guesser::{FamilySummary, GuessEngine};
pub use partition::{Families, group_by_pattern};
pub use selector::{rank_families, select_family};
