//! The adversarial guess engine
//!
//! Holds the state of one game and answers every guess with the family of words that
//! keeps the most candidates alive.

use super::error::EngineError;
use super::partition::group_by_pattern;
use super::selector::{rank_families, select_family};
use crate::core::Pattern;
use log::{debug, trace, warn};
use std::collections::BTreeSet;

/// One family in a [`GuessEngine::families`] preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySummary {
    pub pattern: Pattern,
    pub size: usize,
    /// How often the previewed letter appears in `pattern`
    pub occurrences: usize,
}

/// State machine for a single game of evil hangman
///
/// The engine never commits to a secret word. After every guess it keeps the largest
/// family of candidates consistent with everything revealed so far.
///
/// # Examples
/// ```
/// use evil_hangman::engine::GuessEngine;
///
/// let mut engine = GuessEngine::new(["ah", "am", "an", "at"], 2, 3).unwrap();
///
/// assert_eq!(engine.record('a').unwrap(), 1);
/// assert_eq!(engine.record('t').unwrap(), 0);
/// assert_eq!(engine.guesses_left(), 2);
/// assert_eq!(engine.pattern().unwrap().to_string(), "a_");
/// assert_eq!(engine.words().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct GuessEngine {
    length: usize,
    guesses_left: usize,
    guessed: BTreeSet<char>,
    candidates: BTreeSet<String>,
}

impl GuessEngine {
    /// Start a game from a dictionary, a word length and a guess budget
    ///
    /// Words of any other length are dropped. An empty candidate set is accepted here;
    /// later calls reject it.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidLength`] if `length` is 0.
    pub fn new<I, S>(words: I, length: usize, max_guesses: usize) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if length < 1 {
            return Err(EngineError::InvalidLength(0));
        }

        let candidates: BTreeSet<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| word.chars().count() == length)
            .collect();

        debug!(
            "new game: length {length}, {max_guesses} guesses, {} candidates",
            candidates.len()
        );

        Ok(Self {
            length,
            guesses_left: max_guesses,
            guessed: BTreeSet::new(),
            candidates,
        })
    }

    /// Words still consistent with every guess, in sorted order
    #[inline]
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.candidates
    }

    /// Remaining guess budget
    #[inline]
    #[must_use]
    pub const fn guesses_left(&self) -> usize {
        self.guesses_left
    }

    /// Letters guessed so far, in sorted order
    #[inline]
    #[must_use]
    pub const fn guesses(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Word length fixed at construction
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The pattern currently shown to the player
    ///
    /// All candidates share this pattern because every `record` keeps a single family.
    ///
    /// # Errors
    /// Returns [`EngineError::NoCandidates`] if no candidate words remain.
    pub fn pattern(&self) -> Result<Pattern, EngineError> {
        let first = self.candidates.first().ok_or(EngineError::NoCandidates)?;

        if self.guessed.is_empty() {
            return Ok(Pattern::hidden(self.length));
        }

        let pattern = Pattern::reveal(first, &self.guessed);
        debug_assert!(
            self.candidates
                .iter()
                .all(|word| Pattern::reveal(word, &self.guessed) == pattern),
            "candidates disagree on the current pattern"
        );

        Ok(pattern)
    }

    /// Guess a letter and return how many times it appears in the new pattern
    ///
    /// A letter with zero occurrences costs one guess.
    ///
    /// # Errors
    /// - [`EngineError::NoCandidates`] if no candidate words remain
    /// - [`EngineError::OutOfGuesses`] if the budget is spent
    /// - [`EngineError::AlreadyGuessed`] if `guess` was guessed before
    ///
    /// On error the engine is left unchanged.
    pub fn record(&mut self, guess: char) -> Result<usize, EngineError> {
        if self.candidates.is_empty() {
            warn!("rejected '{guess}': no candidates");
            return Err(EngineError::NoCandidates);
        }
        if self.guesses_left < 1 {
            warn!("rejected '{guess}': no guesses left");
            return Err(EngineError::OutOfGuesses);
        }
        self.check_fresh(guess)?;

        let mut guessed = self.guessed.clone();
        guessed.insert(guess);

        let families = group_by_pattern(&self.candidates, &guessed);
        debug!(
            "'{guess}' splits {} candidates into {} families",
            self.candidates.len(),
            families.len()
        );
        for (pattern, words) in &families {
            trace!("  {pattern}: {}", words.len());
        }

        let (pattern, family) = select_family(families).ok_or(EngineError::EmptyFamily)?;
        if family.is_empty() {
            return Err(EngineError::EmptyFamily);
        }
        let candidates: BTreeSet<String> = family.into_iter().map(str::to_owned).collect();
        let count = pattern.occurrences(guess);
        debug!("kept {pattern} with {} words, {count} occurrences", candidates.len());

        self.guessed = guessed;
        self.candidates = candidates;
        if count == 0 {
            self.guesses_left -= 1;
        }

        Ok(count)
    }

    /// Preview the families `record(guess)` would choose between
    ///
    /// Entries come in selection order, so the first one is the family `record`
    /// would keep. Unlike `record`, previewing is allowed with no guesses left.
    ///
    /// # Errors
    /// - [`EngineError::NoCandidates`] if no candidate words remain
    /// - [`EngineError::AlreadyGuessed`] if `guess` was guessed before
    pub fn families(&self, guess: char) -> Result<Vec<FamilySummary>, EngineError> {
        if self.candidates.is_empty() {
            return Err(EngineError::NoCandidates);
        }
        self.check_fresh(guess)?;

        let mut guessed = self.guessed.clone();
        guessed.insert(guess);

        let families = group_by_pattern(&self.candidates, &guessed);
        Ok(rank_families(&families)
            .into_iter()
            .map(|(pattern, size)| FamilySummary {
                occurrences: pattern.occurrences(guess),
                pattern,
                size,
            })
            .collect())
    }

    /// True once a single word remains and every letter of it is revealed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.candidates.len() == 1 && self.pattern().is_ok_and(|p| p.is_complete())
    }

    /// True once the player has won or has no guesses left
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.guesses_left == 0 || self.is_won()
    }

    fn check_fresh(&self, guess: char) -> Result<(), EngineError> {
        if self.guessed.contains(&guess) {
            warn!("rejected '{guess}': already guessed");
            return Err(EngineError::AlreadyGuessed(guess));
        }
        Ok(())
    }
}
