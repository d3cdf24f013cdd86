//! Wordle solving algorithms
//!
//! Constraint matching, outcome trees and the greedy guess selector built on
//! them.

mod cache;
mod matcher;
mod mode;
mod selector;
pub mod tree;

pub use cache::GuessCache;
pub use matcher::{ConstraintMatcher, matches};
pub use mode::Mode;
pub use selector::{FALLBACK_SCORE, GuessResult, GuessSelector, SHORTLIST_THRESHOLD, best_guess};
pub use tree::{OutcomeNode, build_tree, score_tree};
