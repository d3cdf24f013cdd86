//! Error types shared by the solver and the game drivers

use crate::core::{ConstraintError, WordError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that can stop a guess selection or a simulated game
#[derive(Debug, Error)]
pub enum SolverError {
    /// The recorded feedback rules out every possible answer
    #[error("No solution word is consistent with the {constraints} recorded constraints")]
    NoCandidates { constraints: usize },

    /// A game ran past the attempt budget
    #[error("'{answer}' was not found within {budget} guesses: {}", .guesses.join(", "))]
    AttemptBudgetExceeded {
        answer: String,
        budget: usize,
        guesses: Vec<String>,
    },

    #[error("'{0}' is not a solution word")]
    UnknownAnswer(String),

    #[error("'{0}' is not in the vocabulary")]
    UnknownWord(String),

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error(transparent)]
    InvalidFeedback(#[from] ConstraintError),

    #[error("{}:{line}: invalid word list entry", .path.display())]
    InvalidListEntry {
        path: PathBuf,
        line: usize,
        #[source]
        source: WordError,
    },

    #[error("Failed to read word list {}", .path.display())]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
