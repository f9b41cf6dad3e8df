//! Evil Hangman
//!
//! A hangman opponent that never picks a secret word. Every guess splits the remaining
//! dictionary into families of words sharing a reveal pattern, and the largest family
//! survives.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::engine::GuessEngine;
//!
//! let mut engine = GuessEngine::new(["ah", "am", "an", "at"], 2, 3).unwrap();
//!
//! // Every word has an 'a' first, so the letter has to be revealed
//! assert_eq!(engine.record('a').unwrap(), 1);
//! println!("Pattern: {}", engine.pattern().unwrap());
//! ```

// Core domain types
pub mod core;

// Partition-and-select game engine
pub mod engine;

// Game configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Log output for the command-line driver
pub mod logging;
