//! Core domain types for Wordle
//!
//! Words, feedback constraints and the game's coloring rules. Everything here
//! is pure and independent of the solver.

mod constraint;
mod feedback;
mod word;

pub use constraint::{
    Color, Constraint, ConstraintError, ConstraintSet, PROBE_GROUP, feedback_to_emoji,
    parse_feedback,
};
pub use feedback::{colorize, is_solved};
pub use word::{WORD_LENGTH, Word, WordError};
