//! Grouping candidate words into families
//!
//! Given the candidate set and the guessed letters, every candidate produces exactly
//! one reveal pattern. Words sharing a pattern form a family.

use crate::core::Pattern;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// Candidate words grouped by the pattern they produce
///
/// Every family is non-empty. Words inside a family keep the candidate set's order.
pub type Families<'a> = FxHashMap<Pattern, Vec<&'a str>>;

/// Group candidates by the pattern they produce under `guessed`
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use evil_hangman::core::Pattern;
/// use evil_hangman::engine::group_by_pattern;
///
/// let words: BTreeSet<String> = ["ah", "am", "at"].map(String::from).into();
/// let guessed: BTreeSet<char> = ['t'].into();
///
/// let families = group_by_pattern(&words, &guessed);
/// let unrevealed: Pattern = "__".parse().unwrap();
/// assert_eq!(families.len(), 2);
/// assert_eq!(families[&unrevealed], ["ah", "am"]);
/// ```
#[must_use]
pub fn group_by_pattern<'a>(
    candidates: &'a BTreeSet<String>,
    guessed: &BTreeSet<char>,
) -> Families<'a> {
    let mut families: Families<'a> = FxHashMap::default();

    for word in candidates {
        let pattern = Pattern::reveal(word, guessed);
        families.entry(pattern).or_default().push(word.as_str());
    }

    families
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> BTreeSet<String> {
        list.iter().map(|&w| w.to_string()).collect()
    }

    fn pattern(s: &str) -> Pattern {
        s.parse().unwrap()
    }

    #[test]
    fn empty_candidates_give_no_families() {
        let empty = BTreeSet::new();
        let families = group_by_pattern(&empty, &['a'].into());
        assert!(families.is_empty());
    }

    #[test]
    fn no_guesses_gives_one_family() {
        let candidates = words(&["ah", "am", "an"]);
        let families = group_by_pattern(&candidates, &BTreeSet::new());

        assert_eq!(families.len(), 1);
        assert_eq!(families[&pattern("__")], ["ah", "am", "an"]);
    }

    #[test]
    fn splits_on_letter_position() {
        let candidates = words(&["ally", "beta", "cool", "deal", "else"]);
        let families = group_by_pattern(&candidates, &['e'].into());

        assert_eq!(families.len(), 3);
        assert_eq!(families[&pattern("_e__")], ["beta", "deal"]);
        assert_eq!(families[&pattern("____")], ["ally", "cool"]);
        assert_eq!(families[&pattern("e__e")], ["else"]);
    }

    #[test]
    fn repeated_letters_form_their_own_family() {
        let candidates = words(&["aa", "ab", "ba"]);
        let families = group_by_pattern(&candidates, &['a'].into());

        assert_eq!(families.len(), 3);
        assert_eq!(families[&pattern("aa")], ["aa"]);
    }

    #[test]
    fn family_sizes_sum_to_candidates() {
        let candidates = words(&["ah", "am", "an", "at", "ma", "ta"]);
        let families = group_by_pattern(&candidates, &['a', 't'].into());

        assert_eq!(families.values().map(Vec::len).sum::<usize>(), candidates.len());
        assert!(families.values().all(|family| !family.is_empty()));
    }

    #[test]
    fn every_member_produces_its_key() {
        let candidates = words(&["ah", "am", "an", "at", "ma", "ta"]);
        let guessed: BTreeSet<char> = ['a', 'm'].into();
        let families = group_by_pattern(&candidates, &guessed);

        for (key, family) in &families {
            for word in family {
                assert_eq!(&Pattern::reveal(word, &guessed), key);
            }
        }
    }
}
