//! Surviving family selection
//!
//! The engine always keeps the largest family. Among equally large families the one
//! with the lexicographically smallest pattern wins, which makes the choice independent
//! of the order families were produced in.

use super::partition::Families;
use crate::core::Pattern;
use std::cmp::Ordering;

/// Order two families by preference: larger first, then smaller pattern first
fn preference(a: (&Pattern, usize), b: (&Pattern, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Pick the family that keeps the most candidates alive
///
/// Returns the winning pattern with its words, or `None` if there are no families.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use evil_hangman::engine::{group_by_pattern, select_family};
///
/// let words: BTreeSet<String> = ["am", "an"].map(String::from).into();
/// let guessed: BTreeSet<char> = ['a', 'm'].into();
///
/// // "a_" and "am" both hold one word; the placeholder ranks below 'm'
/// let (pattern, family) = select_family(group_by_pattern(&words, &guessed)).unwrap();
/// assert_eq!(pattern.to_string(), "a_");
/// assert_eq!(family, ["an"]);
/// ```
#[must_use]
pub fn select_family(families: Families<'_>) -> Option<(Pattern, Vec<&str>)> {
    families
        .into_iter()
        .min_by(|(pa, wa), (pb, wb)| preference((pa, wa.len()), (pb, wb.len())))
}

/// Patterns and family sizes in selection order
///
/// The first entry is the family [`select_family`] would return.
#[must_use]
pub fn rank_families(families: &Families<'_>) -> Vec<(Pattern, usize)> {
    let mut ranked: Vec<(Pattern, usize)> = families
        .iter()
        .map(|(pattern, words)| (pattern.clone(), words.len()))
        .collect();
    ranked.sort_by(|(pa, na), (pb, nb)| preference((pa, *na), (pb, *nb)));
    ranked
}
