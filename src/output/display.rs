//! Display functions for command results

use super::formatters::{create_progress_bar, spaced_pattern};
use crate::commands::{FamiliesResult, ReplayResult};
use colored::Colorize;

/// Print the result of a scripted replay
pub fn print_replay_result(result: &ReplayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "REPLAY".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let outcome = if step.occurrences == 0 {
            "miss".red().to_string()
        } else {
            format!("{} found", step.occurrences).green().to_string()
        };
        println!(
            "\nTurn {}: {} {} ({})",
            i + 1,
            step.letter.to_string().bright_yellow().bold(),
            spaced_pattern(&step.pattern),
            outcome
        );
        println!("  Guesses left: {}", step.guesses_left);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    if let Some((letter, err)) = &result.stopped {
        println!("\n{}", format!("⚠ '{letter}' rejected: {err}").yellow());
    }

    println!();
    if let Some(pattern) = &result.final_pattern {
        println!("Pattern:      {}", spaced_pattern(pattern).bold());
    }
    println!("Guesses left: {}", result.guesses_left);
    println!("Candidates:   {}", result.remaining.len());
    if verbose && !result.remaining.is_empty() {
        println!("  {}", result.remaining.join(", ").bright_black());
    }

    println!();
    if result.won {
        println!("{}", "✅ Word revealed!".green().bold());
    } else if result.guesses_left == 0 {
        println!("{}", "❌ Out of guesses".red().bold());
    }
}

/// Print a family preview
pub fn print_families_result(result: &FamiliesResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "FAMILIES FOR".bright_cyan().bold(),
        result.probe.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nCurrent pattern {} with {} candidates:\n",
        spaced_pattern(&result.pattern).bold(),
        result.total_candidates
    );

    for (i, family) in result.families.iter().enumerate() {
        let bar = create_progress_bar(family.size, result.total_candidates, 30);
        let marker = if i == 0 { "→".green().bold() } else { " ".normal() };
        println!(
            " {marker} {:<20} [{}] {:4}  ({} × '{}')",
            spaced_pattern(&family.pattern),
            bar.green(),
            family.size,
            family.occurrences,
            result.probe
        );
    }
}
