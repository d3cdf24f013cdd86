//! Wordle Collision Solver
//!
//! A greedy Wordle solver. Each guess is chosen to minimize the probability
//! that two remaining answers end up with the same feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_collision::core::{ConstraintSet, Word, colorize};
//! use wordle_collision::solver::{GuessSelector, Mode};
//!
//! let vocabulary: Vec<Word> = ["cigar", "rebut", "sissy", "humph", "awake"]
//!     .into_iter()
//!     .map(|w| Word::new(w).unwrap())
//!     .collect();
//! let selector = GuessSelector::new(&vocabulary, &vocabulary);
//!
//! let mut constraints = ConstraintSet::new();
//! let first = selector.select(&constraints, Mode::Easy).unwrap();
//!
//! // Play the guess against REBUT and ask again
//! constraints
//!     .extend_from_guess(colorize(first.word, &vocabulary[1], 1))
//!     .unwrap();
//! let next = selector.select(&constraints, Mode::Easy).unwrap();
//! assert!(next.list.len() <= first.list.len());
//! assert!(next.list.contains(&&vocabulary[1]));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
