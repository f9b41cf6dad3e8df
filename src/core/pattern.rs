//! Reveal pattern generation and representation
//!
//! A pattern is the positional template a player sees: every slot either shows a
//! guessed letter or hides the letter behind a placeholder.
//!
//! Patterns are totally ordered slot by slot. [`Slot::Hidden`] ranks below every
//! revealed letter, so `a_` sorts before `am`. The selector relies on this order to
//! break ties between equally large families.

use std::collections::BTreeSet;
use std::fmt;

/// Character used to render a hidden slot
pub const PLACEHOLDER: char = '_';

/// A single position of a [`Pattern`]
///
/// Variant order is significant: the derived `Ord` ranks `Hidden` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    /// Letter not guessed yet
    Hidden,
    /// Guessed letter present at this position
    Revealed(char),
}

impl Slot {
    /// Render the slot as a single character
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => PLACEHOLDER,
            Self::Revealed(letter) => letter,
        }
    }
}

/// Fixed-length reveal pattern for a word under a set of guessed letters
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(Vec<Slot>);

impl Pattern {
    /// Pattern with every slot hidden
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::hidden(4).to_string(), "____");
    /// ```
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self(vec![Slot::Hidden; length])
    }

    /// Reveal every position of `word` whose letter has been guessed
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use evil_hangman::core::Pattern;
    ///
    /// let guessed: BTreeSet<char> = ['e', 'l'].into_iter().collect();
    /// assert_eq!(Pattern::reveal("hello", &guessed).to_string(), "_ell_");
    /// ```
    #[must_use]
    pub fn reveal(word: &str, guessed: &BTreeSet<char>) -> Self {
        Self(
            word.chars()
                .map(|letter| {
                    if guessed.contains(&letter) {
                        Slot::Revealed(letter)
                    } else {
                        Slot::Hidden
                    }
                })
                .collect(),
        )
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The slots in positional order
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Count how many slots reveal `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.0
            .iter()
            .filter(|&&slot| slot == Slot::Revealed(letter))
            .count()
    }

    /// True once no slot is hidden
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.0.contains(&Slot::Hidden)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.0 {
            write!(f, "{}", slot.symbol())?;
        }
        Ok(())
    }
}

/// Parses the rendered form, e.g. `a_` or `_ell_`
///
/// Every `_` parses as [`Slot::Hidden`]. A pattern that reveals a literal `_` (from a
/// dictionary word containing the placeholder) renders the same as a hidden slot, so
/// it does not survive a `to_string`/`parse` round trip.
impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Invalid pattern string: empty".to_string());
        }

        Ok(Self(
            s.chars()
                .map(|ch| {
                    if ch == PLACEHOLDER {
                        Slot::Hidden
                    } else {
                        Slot::Revealed(ch)
                    }
                })
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(s: &str) -> BTreeSet<char> {
        s.chars().collect()
    }

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn hidden_pattern_has_requested_length() {
        let p = Pattern::hidden(5);
        assert_eq!(p.len(), 5);
        assert!(p.slots().iter().all(|&s| s == Slot::Hidden));
        assert!(!p.is_complete());
    }

    #[test]
    fn reveal_with_no_guesses_is_all_hidden() {
        assert_eq!(Pattern::reveal("crane", &BTreeSet::new()), Pattern::hidden(5));
    }

    #[test]
    fn reveal_shows_every_position_of_a_guessed_letter() {
        let p = Pattern::reveal("banana", &letters("a"));
        assert_eq!(p.to_string(), "_a_a_a");
        assert_eq!(p.occurrences('a'), 3);
        assert_eq!(p.occurrences('n'), 0);
    }

    #[test]
    fn reveal_combines_earlier_guesses() {
        let p = Pattern::reveal("banana", &letters("an"));
        assert_eq!(p.to_string(), "_anana");
        assert_eq!(p.occurrences('n'), 2);
    }

    #[test]
    fn reveal_is_case_sensitive() {
        let p = Pattern::reveal("Aa", &letters("a"));
        assert_eq!(p.to_string(), "_a");
    }

    #[test]
    fn reveal_counts_chars_not_bytes() {
        let p = Pattern::reveal("café", &letters("é"));
        assert_eq!(p.len(), 4);
        assert_eq!(p.to_string(), "___é");
    }

    #[test]
    fn hidden_sorts_before_letters() {
        assert!(Slot::Hidden < Slot::Revealed('a'));
        assert!(Slot::Hidden < Slot::Revealed('\0'));
        assert!(pattern("a_") < pattern("am"));
        assert!(pattern("_z") < pattern("a_"));
    }

    #[test]
    fn ordering_is_slot_by_slot() {
        let mut patterns = vec![pattern("ba"), pattern("a_"), pattern("__"), pattern("ab")];
        patterns.sort();
        let rendered: Vec<String> = patterns.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["__", "a_", "ab", "ba"]);
    }

    #[test]
    fn complete_when_nothing_hidden() {
        assert!(pattern("at").is_complete());
        assert!(!pattern("a_").is_complete());
    }

    #[test]
    fn parse_matches_display() {
        for s in ["a_", "_ell_", "____", "xyz"] {
            assert_eq!(pattern(s).to_string(), s);
        }
    }

    #[test]
    fn revealed_placeholder_parses_as_hidden() {
        let revealed = Pattern::reveal("a_", &letters("_"));
        assert_eq!(revealed.slots(), [Slot::Hidden, Slot::Revealed('_')]);
        assert_eq!(revealed.to_string(), "__");

        let parsed = pattern(&revealed.to_string());
        assert_eq!(parsed, Pattern::hidden(2));
        assert_ne!(parsed, revealed);
    }

    #[test]
    fn parse_rejects_empty() {
        assert!("".parse::<Pattern>().is_err());
    }
}
