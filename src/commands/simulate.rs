//! Simulate every game - comprehensive solver evaluation
//!
//! Plays the solver against every solution word and aggregates statistics.
//! A game that runs over the attempt budget stops the whole run.

use super::solve::{ATTEMPT_BUDGET, GameRecord, play_game};
use crate::core::Word;
use crate::error::SolverError;
use crate::solver::{GuessSelector, Mode};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Options for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub mode: Mode,
    /// Only play the first `limit` answers
    pub limit: Option<usize>,
    pub budget: usize,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            limit: None,
            budget: ATTEMPT_BUDGET,
            show_progress: true,
        }
    }
}

/// Statistics from playing every answer
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationStatistics {
    pub total_games: usize,
    pub guess_distribution: BTreeMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub first_guess: Option<String>,
    pub hardest_words: Vec<(String, usize)>,
}

impl SimulationStatistics {
    /// Aggregate finished games
    #[must_use]
    pub fn from_games(games: &[GameRecord], total_time: Duration) -> Self {
        let mut guess_distribution: BTreeMap<usize, usize> = BTreeMap::new();
        for game in games {
            *guess_distribution.entry(game.attempts()).or_insert(0) += 1;
        }

        let total_guesses: usize = games.iter().map(GameRecord::attempts).sum();
        let average_guesses = if games.is_empty() {
            0.0
        } else {
            total_guesses as f64 / games.len() as f64
        };

        let mut hardest_words: Vec<(String, usize)> = games
            .iter()
            .filter(|g| g.attempts() >= 5)
            .map(|g| (g.answer.clone(), g.attempts()))
            .collect();
        hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
        hardest_words.truncate(10);

        Self {
            total_games: games.len(),
            max_guesses: games.iter().map(GameRecord::attempts).max().unwrap_or(0),
            min_guesses: games.iter().map(GameRecord::attempts).min().unwrap_or(0),
            first_guess: games
                .first()
                .and_then(|g| g.guesses().first().map(|w| (*w).to_string())),
            guess_distribution,
            total_time,
            average_guesses,
            hardest_words,
        }
    }
}

/// Play every answer (or the first `config.limit`) in order
///
/// Games share the selector, so its cache carries over from one game to the
/// next.
///
/// # Errors
///
/// Returns the first game's error, notably
/// `SolverError::AttemptBudgetExceeded`.
pub fn run_simulation(
    selector: &GuessSelector<'_>,
    answers: &[Word],
    config: &SimulationConfig,
) -> Result<SimulationStatistics, SolverError> {
    let targets = &answers[..config.limit.unwrap_or(answers.len()).min(answers.len())];

    let pb = if config.show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut games: Vec<GameRecord> = Vec::with_capacity(targets.len());

    for (idx, answer) in targets.iter().enumerate() {
        let game = match play_game(selector, answer, config.mode, config.budget) {
            Ok(game) => game,
            Err(e) => {
                pb.abandon_with_message(format!("Failed on {answer}"));
                return Err(e);
            }
        };
        games.push(game);

        if idx % 10 == 0 {
            let avg = games.iter().map(GameRecord::attempts).sum::<usize>() as f64
                / games.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(SimulationStatistics::from_games(&games, start.elapsed()))
}
