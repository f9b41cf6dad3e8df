//! Scripted replay command
//!
//! Plays a fixed sequence of letters against the engine and records what happened
//! after each one.

use crate::config::GameConfig;
use crate::core::Pattern;
use crate::engine::{EngineError, GuessEngine};

/// Result of replaying a letter sequence
pub struct ReplayResult {
    pub steps: Vec<ReplayStep>,
    /// Error that ended the replay early, if any
    pub stopped: Option<(char, EngineError)>,
    pub final_pattern: Option<Pattern>,
    pub guesses_left: usize,
    pub remaining: Vec<String>,
    pub won: bool,
}

/// A single recorded guess
pub struct ReplayStep {
    pub letter: char,
    pub occurrences: usize,
    pub pattern: Pattern,
    pub guesses_left: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Record `letters` in order against a fresh engine
///
/// A rejected guess ends the replay and is reported in [`ReplayResult::stopped`];
/// letters after it are not played.
///
/// # Errors
///
/// Returns an error if the engine cannot be constructed from `config`.
pub fn replay_letters<I, S>(
    config: GameConfig,
    words: I,
    letters: &[char],
) -> Result<ReplayResult, EngineError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut engine = config.build(words)?;
    let mut steps = Vec::with_capacity(letters.len());
    let mut stopped = None;

    for &letter in letters {
        let candidates_before = engine.words().len();
        let outcome = engine
            .record(letter)
            .and_then(|n| engine.pattern().map(|pattern| (n, pattern)));
        match outcome {
            Ok((occurrences, pattern)) => steps.push(ReplayStep {
                letter,
                occurrences,
                pattern,
                guesses_left: engine.guesses_left(),
                candidates_before,
                candidates_after: engine.words().len(),
            }),
            Err(err) => {
                stopped = Some((letter, err));
                break;
            }
        }
    }

    Ok(finish(&engine, steps, stopped))
}

fn finish(
    engine: &GuessEngine,
    steps: Vec<ReplayStep>,
    stopped: Option<(char, EngineError)>,
) -> ReplayResult {
    ReplayResult {
        steps,
        stopped,
        final_pattern: engine.pattern().ok(),
        guesses_left: engine.guesses_left(),
        remaining: engine.words().iter().cloned().collect(),
        won: engine.is_won(),
    }
}
