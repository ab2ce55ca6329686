//! Terminal report formatting
//!
//! Console-side presentation of a ranking run: the active constraint, the
//! list of still-possible solutions, and the ranked best-guess table. The
//! library itself never prints; only the CLI calls into this module.

use crate::core::{Constraint, Word};
use crate::filter::kernels::UNKNOWN;
use crate::solver::RankedGuess;
use colored::Colorize;
use std::time::Duration;

/// Print the constraint in use before solving
pub fn print_constraint(constraint: &Constraint) {
    println!("{}", "Using configuration:".bright_cyan().bold());

    let correct: String = constraint
        .correct()
        .iter()
        .map(|&c| if c == UNKNOWN { '_' } else { c as char })
        .collect();
    println!("  Correct letters:   {}", correct.bright_green());

    let mut any_misplaced = false;
    for position in 0..5 {
        let letters = constraint.misplaced(position);
        if !letters.is_empty() {
            let shown: String = letters.iter().map(|&c| c as char).collect();
            println!(
                "  Misplaced at {}:    {}",
                position,
                shown.bright_yellow()
            );
            any_misplaced = true;
        }
    }
    if !any_misplaced {
        println!("  Misplaced letters: {}", "(none)".bright_black());
    }

    let wrong: String = constraint.wrong().iter().map(|&c| c as char).collect();
    if wrong.is_empty() {
        println!("  Wrong letters:     {}", "(none)".bright_black());
    } else {
        println!("  Wrong letters:     {}", wrong.red());
    }
}

/// Print the still-possible solution words
pub fn print_possible_words(words: &[Word], list_all: bool) {
    println!(
        "\n{} {}",
        "Possible answers:".bright_cyan().bold(),
        words.len().to_string().bright_yellow()
    );

    if list_all {
        for word in words {
            println!("  {word}");
        }
    }
}

/// Print the ranked best-guess table and elapsed scoring time
pub fn print_ranked_guesses(ranked: &[RankedGuess], elapsed: Duration) {
    println!(
        "\n{} {}",
        "Best".bright_cyan().bold(),
        format!("{} responses:", ranked.len()).bright_cyan().bold()
    );

    for (i, guess) in ranked.iter().enumerate() {
        println!(
            "  {:>3}. {}  {}",
            i + 1,
            guess.word.text().to_uppercase().bright_yellow().bold(),
            format!("{:.3}", guess.score).green()
        );
    }

    println!(
        "\nTime: {}",
        format!("{:.3}s", elapsed.as_secs_f64()).bright_black()
    );
}
