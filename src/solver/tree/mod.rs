//! Outcome trees
//!
//! A guess is judged by how finely it splits the remaining candidates, letter
//! by letter, into green/yellow/black partitions.

mod builder;
mod scorer;

pub use builder::{Branch, Leaf, OutcomeNode, build_tree};
pub use scorer::{TreeSummary, leaf_probabilities, score_tree, summarize};
