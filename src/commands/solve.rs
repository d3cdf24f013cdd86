//! Word solving command
//!
//! Plays one game against a known answer and returns the solution path.

use crate::core::{Constraint, ConstraintSet, Word, colorize};
use crate::error::SolverError;
use crate::solver::{GuessSelector, Mode};
use crate::wordlists::Vocabulary;

/// Guesses a game may use before it counts as lost
pub const ATTEMPT_BUDGET: usize = 6;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub mode: Mode,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, mode: Mode) -> Self {
        Self {
            target,
            mode,
            max_guesses: ATTEMPT_BUDGET,
        }
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Vec<Constraint>,
    pub score: f64,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// A finished game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub answer: String,
    pub steps: Vec<GuessStep>,
}

impl GameRecord {
    /// Number of guesses the game took
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn guesses(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.word.as_str()).collect()
    }
}

/// Play one game from an empty constraint set until `answer` is guessed
///
/// # Errors
///
/// Returns `SolverError::AttemptBudgetExceeded` if `answer` is not guessed
/// within `budget` guesses, or any selection error.
pub fn play_game(
    selector: &GuessSelector<'_>,
    answer: &Word,
    mode: Mode,
    budget: usize,
) -> Result<GameRecord, SolverError> {
    let mut constraints = ConstraintSet::new();
    let mut steps: Vec<GuessStep> = Vec::new();

    loop {
        if steps.len() >= budget {
            return Err(SolverError::AttemptBudgetExceeded {
                answer: answer.text().to_string(),
                budget,
                guesses: steps.into_iter().map(|s| s.word).collect(),
            });
        }

        let guess_index = steps.len() as u32 + 1;
        let result = selector.select(&constraints, mode)?;
        let feedback = colorize(result.word, answer, guess_index);
        constraints.extend_from_guess(feedback.iter().copied())?;

        steps.push(GuessStep {
            word: result.word.text().to_string(),
            feedback,
            score: result.score,
            candidates_before: result.list.len(),
            candidates_after: selector.candidates(&constraints).len(),
        });

        if result.word == answer {
            return Ok(GameRecord {
                answer: answer.text().to_string(),
                steps,
            });
        }
    }
}

/// Solve a specific solution word
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-letters)
/// - The target is not a solution word
/// - The game exceeds `config.max_guesses`
pub fn solve_word(
    config: &SolveConfig,
    selector: &GuessSelector<'_>,
    vocabulary: &Vocabulary,
) -> Result<GameRecord, SolverError> {
    let target = Word::new(&config.target)?;
    let answer = vocabulary
        .find_solution(target.text())
        .ok_or_else(|| SolverError::UnknownAnswer(target.text().to_string()))?;

    play_game(selector, answer, config.mode, config.max_guesses)
}
