//! Formatting utilities for terminal output

use crate::core::Pattern;

/// Format a pattern with a space between slots, e.g. `a _ _`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    pattern
        .slots()
        .iter()
        .map(|slot| slot.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a bar showing `value` out of `max`
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
