//! Engine error type

use std::fmt;

/// Broad category of an [`EngineError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value the engine can never accept
    InvalidArgument,
    /// The call is not allowed in the game's current state
    InvalidState,
}

/// Error type for rejected engine operations
///
/// A rejected operation never leaves the engine partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidLength(i64),
    NegativeBudget(i64),
    AlreadyGuessed(char),
    NoCandidates,
    OutOfGuesses,
    EmptyFamily,
}

impl EngineError {
    /// Which of the two error categories this error belongs to
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength(_) | Self::NegativeBudget(_) | Self::AlreadyGuessed(_) => {
                ErrorKind::InvalidArgument
            }
            Self::NoCandidates | Self::OutOfGuesses | Self::EmptyFamily => ErrorKind::InvalidState,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(f, "Word length must be at least 1, got {len}"),
            Self::NegativeBudget(max) => {
                write!(f, "Guess budget must not be negative, got {max}")
            }
            Self::AlreadyGuessed(letter) => write!(f, "Letter '{letter}' was already guessed"),
            Self::NoCandidates => write!(f, "No candidate words remain"),
            Self::OutOfGuesses => write!(f, "No guesses left"),
            Self::EmptyFamily => write!(f, "Selected word family is empty"),
        }
    }
}

impl std::error::Error for EngineError {}
