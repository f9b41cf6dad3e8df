//! Family preview command
//!
//! Replays a letter sequence, then shows how the next letter would split the
//! remaining candidates.

use crate::config::GameConfig;
use crate::core::Pattern;
use crate::engine::{EngineError, FamilySummary};

/// Result of previewing a letter
pub struct FamiliesResult {
    pub probe: char,
    /// Pattern shown before the probe
    pub pattern: Pattern,
    pub total_candidates: usize,
    /// Families in selection order; the first would be kept
    pub families: Vec<FamilySummary>,
}

/// Play `letters`, then preview the partition for `probe`
///
/// # Errors
///
/// Returns an error if:
/// - The engine cannot be constructed from `config`
/// - Any letter in `letters` is rejected
/// - `probe` was already guessed or no candidates remain
pub fn preview_families<I, S>(
    config: GameConfig,
    words: I,
    letters: &[char],
    probe: char,
) -> Result<FamiliesResult, EngineError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut engine = config.build(words)?;
    for &letter in letters {
        engine.record(letter)?;
    }

    Ok(FamiliesResult {
        probe,
        families: engine.families(probe)?,
        pattern: engine.pattern()?,
        total_candidates: engine.words().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DICT: [&str; 4] = ["ah", "am", "an", "at"];

    #[test]
    fn previews_next_split() {
        let config = GameConfig::new(2, 3).unwrap();
        let result = preview_families(config, DICT, &['a', 't'], 'h').unwrap();

        assert_eq!(result.pattern.to_string(), "a_");
        assert_eq!(result.total_candidates, 3);

        let rendered: Vec<(String, usize)> = result
            .families
            .iter()
            .map(|f| (f.pattern.to_string(), f.size))
            .collect();
        assert_eq!(rendered, [("a_".to_string(), 2), ("ah".to_string(), 1)]);
    }

    #[test]
    fn probe_allowed_after_budget_spent() {
        let config = GameConfig::new(2, 1).unwrap();
        let result = preview_families(config, DICT, &['z'], 'a').unwrap();
        assert_eq!(result.families.len(), 1);
        assert_eq!(result.families[0].occurrences, 1);
    }

    #[test]
    fn rejected_replay_letter_is_an_error() {
        let config = GameConfig::new(2, 3).unwrap();
        let err = preview_families(config, DICT, &['a', 'a'], 'h').err();
        assert_eq!(err, Some(EngineError::AlreadyGuessed('a')));
    }

    #[test]
    fn probe_must_be_fresh() {
        let config = GameConfig::new(2, 3).unwrap();
        let err = preview_families(config, DICT, &['a'], 'a').err();
        assert_eq!(err, Some(EngineError::AlreadyGuessed('a')));
    }
}
