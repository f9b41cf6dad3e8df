//! Core domain types for evil hangman
//!
//! Pure value types with no dependencies beyond the standard library.

mod pattern;

pub use pattern::{PLACEHOLDER, Pattern, Slot};
