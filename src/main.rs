//! Wordle guess ranker - CLI
//!
//! Loads the candidate and guess corpora, builds the constraint from the
//! command-line description, lists the still-possible answers, and prints
//! the guesses ranked by expected remaining candidates.

use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::ProgressBar;
use std::time::{Duration, Instant};
use wordle_rank::{
    core::Constraint,
    corpus::PackWidth,
    filter::{kernels::UNKNOWN, row},
    output::{print_constraint, print_possible_words, print_ranked_guesses},
    solver::{EngineConfig, compute_best_guesses},
    wordlists::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordle-rank",
    about = "Rank Wordle guesses by expected remaining candidates (lower is better)",
    version,
    author
)]
struct Cli {
    /// Path to the candidate-solution word list (one 5-letter word per line)
    #[arg(long)]
    candidates: String,

    /// Path to the guess word list; defaults to the candidate list
    #[arg(long)]
    guesses: Option<String>,

    /// Known correct letters, underscores for unknown slots (e.g. "_r_n_")
    #[arg(short, long, default_value = "_____")]
    correct: String,

    /// Misplaced letters per position, e.g. "0:ae,3:b"
    #[arg(short, long, default_value = "")]
    misplaced: String,

    /// Letters known absent from the word
    #[arg(short = 'x', long, default_value = "")]
    wrong: String,

    /// Number of best guesses to report
    #[arg(short = 'n', long, default_value = "50")]
    top: usize,

    /// Worker threads (0 = one per CPU)
    #[arg(short, long, default_value = "0")]
    threads: usize,

    /// Packed batch width: 32 or 64
    #[arg(long, default_value = "64")]
    width: usize,

    /// List every still-possible answer word
    #[arg(short, long)]
    list: bool,
}

/// Parse the correct-slot description: 5 characters, underscore = unknown
fn parse_correct(text: &str) -> Result<[u8; 5]> {
    if text.len() != 5 {
        bail!("Correct-letter description must be exactly 5 characters, got {}", text.len());
    }

    let mut correct = [UNKNOWN; 5];
    for (slot, ch) in correct.iter_mut().zip(text.bytes()) {
        match ch {
            b'_' => {}
            c if c.is_ascii_alphabetic() => *slot = c.to_ascii_lowercase(),
            c => bail!("Invalid correct-letter character '{}'", c as char),
        }
    }
    Ok(correct)
}

/// Parse the misplaced description: comma-separated "position:letters" groups
fn parse_misplaced(text: &str) -> Result<[Vec<u8>; 5]> {
    let mut misplaced: [Vec<u8>; 5] = Default::default();

    for group in text.split(',').filter(|g| !g.trim().is_empty()) {
        let (position, letters) = group
            .trim()
            .split_once(':')
            .with_context(|| format!("Misplaced group '{group}' is not 'position:letters'"))?;

        let position: usize = position
            .trim()
            .parse()
            .with_context(|| format!("Invalid misplaced position '{position}'"))?;
        if position >= 5 {
            bail!("Misplaced position {position} is out of range 0-4");
        }

        for ch in letters.trim().bytes() {
            if !ch.is_ascii_alphabetic() {
                bail!("Invalid misplaced letter '{}'", ch as char);
            }
            misplaced[position].push(ch.to_ascii_lowercase());
        }
    }

    Ok(misplaced)
}

fn parse_wrong(text: &str) -> Result<Vec<u8>> {
    let mut wrong = Vec::with_capacity(text.len());
    for ch in text.trim().bytes() {
        if !ch.is_ascii_alphabetic() {
            bail!("Invalid wrong letter '{}'", ch as char);
        }
        wrong.push(ch.to_ascii_lowercase());
    }
    Ok(wrong)
}

fn parse_width(width: usize) -> Result<PackWidth> {
    match width {
        32 => Ok(PackWidth::W32),
        64 => Ok(PackWidth::W64),
        other => bail!("Batch width must be 32 or 64, got {other}"),
    }
}

fn build_constraint(cli: &Cli) -> Result<Constraint> {
    let correct = parse_correct(&cli.correct)?;
    let misplaced = parse_misplaced(&cli.misplaced)?;
    let wrong = parse_wrong(&cli.wrong)?;

    Constraint::new(correct, misplaced, &wrong).map_err(anyhow::Error::from)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let constraint = build_constraint(&cli)?;
    let config = EngineConfig {
        threads: if cli.threads == 0 {
            EngineConfig::default().threads
        } else {
            cli.threads
        },
        pack_width: parse_width(cli.width)?,
    };

    let candidates = load_from_file(&cli.candidates)
        .with_context(|| format!("Failed to load candidate list '{}'", cli.candidates))?;
    let guesses = match &cli.guesses {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load guess list '{path}'"))?,
        None => candidates.clone(),
    };

    print_constraint(&constraint);

    let possible = row::filter_corpus(&constraint, &candidates);
    print_possible_words(&possible, cli.list);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!(
        "Scoring {} guesses against {} candidates...",
        guesses.len(),
        possible.len()
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let ranked = compute_best_guesses(&constraint, &candidates, &guesses, cli.top, &config)?;
    let elapsed = start.elapsed();
    spinner.finish_and_clear();

    print_ranked_guesses(&ranked, elapsed);

    Ok(())
}
