//! Game configuration
//!
//! Validates signed user-facing settings before they reach the engine, which only
//! works with unsigned lengths and budgets.

use crate::engine::{EngineError, GuessEngine};

/// Default guess budget when none is given
pub const DEFAULT_MAX_GUESSES: i64 = 10;

/// Validated settings for a new game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub length: usize,
    pub max_guesses: usize,
}

impl GameConfig {
    /// Validate a word length and guess budget
    ///
    /// # Errors
    /// - [`EngineError::InvalidLength`] if `length < 1`
    /// - [`EngineError::NegativeBudget`] if `max_guesses < 0`
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::config::GameConfig;
    /// use evil_hangman::engine::EngineError;
    ///
    /// assert!(GameConfig::new(5, 6).is_ok());
    /// assert_eq!(GameConfig::new(0, 6), Err(EngineError::InvalidLength(0)));
    /// assert_eq!(GameConfig::new(5, -1), Err(EngineError::NegativeBudget(-1)));
    /// ```
    pub fn new(length: i64, max_guesses: i64) -> Result<Self, EngineError> {
        let length = usize::try_from(length)
            .ok()
            .filter(|&len| len >= 1)
            .ok_or(EngineError::InvalidLength(length))?;
        let max_guesses =
            usize::try_from(max_guesses).map_err(|_| EngineError::NegativeBudget(max_guesses))?;

        Ok(Self {
            length,
            max_guesses,
        })
    }

    /// Start a game over `words` with these settings
    ///
    /// # Errors
    /// Propagates construction errors from [`GuessEngine::new`].
    pub fn build<I, S>(self, words: I) -> Result<GuessEngine, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        GuessEngine::new(words, self.length, self.max_guesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ErrorKind;

    #[test]
    fn accepts_valid_settings() {
        let config = GameConfig::new(4, 0).unwrap();
        assert_eq!(
            config,
            GameConfig {
                length: 4,
                max_guesses: 0
            }
        );
    }

    #[test]
    fn rejects_non_positive_length() {
        for length in [0, -1, i64::MIN] {
            let err = GameConfig::new(length, 3).unwrap_err();
            assert_eq!(err, EngineError::InvalidLength(length));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn rejects_negative_budget() {
        let err = GameConfig::new(3, -5).unwrap_err();
        assert_eq!(err, EngineError::NegativeBudget(-5));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn length_checked_before_budget() {
        assert_eq!(
            GameConfig::new(0, -1),
            Err(EngineError::InvalidLength(0))
        );
    }

    #[test]
    fn build_applies_settings() {
        let engine = GameConfig::new(2, DEFAULT_MAX_GUESSES)
            .unwrap()
            .build(["ah", "abc", "at"])
            .unwrap();

        assert_eq!(engine.length(), 2);
        assert_eq!(engine.guesses_left(), 10);
        assert_eq!(engine.words().len(), 2);
    }
}
