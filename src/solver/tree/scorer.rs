//! Outcome tree scoring
//!
//! Reduces a tree to the probability that two random candidates land in the
//! same leaf. Lower means the guess splits the candidates better.

use super::builder::{Branch, OutcomeNode};

/// Score a tree: Σ P(leaf)², where P(leaf) multiplies the conditional
/// probabilities along the path from the root
///
/// # Properties
/// - 1.0 when every candidate ends in one leaf
/// - 1/n when n candidates each get their own leaf
/// - 0.0 for an empty tree
#[must_use]
pub fn score_tree(tree: &OutcomeNode<'_>) -> f64 {
    leaf_probabilities(tree).iter().map(|p| p * p).sum()
}

/// Absolute probability of every leaf, in green/yellow/black depth-first order
#[must_use]
pub fn leaf_probabilities(tree: &OutcomeNode<'_>) -> Vec<f64> {
    let mut probabilities = Vec::new();
    collect(tree, 1.0, &mut probabilities);
    probabilities
}

fn collect(node: &OutcomeNode<'_>, p: f64, out: &mut Vec<f64>) {
    for (_, branch) in node.children() {
        let path_p = branch.p() * p;
        match branch {
            Branch::Node(child) => collect(child, path_p, out),
            Branch::Leaf(_) => out.push(path_p),
        }
    }
}

/// Shape of a scored tree, for reporting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeSummary {
    pub score: f64,
    /// Number of non-empty leaves
    pub leaves: usize,
    /// Candidates in the largest leaf (worst case after this guess)
    pub largest_leaf: usize,
    /// Expected candidates left after this guess
    pub expected_remaining: f64,
}

/// Score plus leaf statistics of a tree
#[must_use]
pub fn summarize(tree: &OutcomeNode<'_>) -> TreeSummary {
    let total = tree.list().len();
    let probabilities = leaf_probabilities(tree);

    // Leaf sizes recovered from probabilities; exact after rounding
    let sizes: Vec<usize> = probabilities
        .iter()
        .map(|p| (p * total as f64).round() as usize)
        .collect();

    TreeSummary {
        score: probabilities.iter().map(|p| p * p).sum(),
        leaves: probabilities.len(),
        largest_leaf: sizes.iter().copied().max().unwrap_or(0),
        expected_remaining: probabilities
            .iter()
            .zip(&sizes)
            .map(|(p, &size)| p * size as f64)
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::tree::build_tree;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn single_candidate_scores_one() {
        let vocabulary = words(&["voice"]);
        let candidates: Vec<&Word> = vocabulary.iter().collect();

        let tree = build_tree(&vocabulary[0], &candidates);
        assert!((score_tree(&tree) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn undiscriminating_guess_scores_one() {
        // ZZZZZ is black everywhere for all of these
        let vocabulary = words(&["cigar", "rebut", "sissy"]);
        let candidates: Vec<&Word> = vocabulary.iter().collect();
        let guess = Word::new("zzzzz").unwrap();

        let tree = build_tree(&guess, &candidates);
        assert!((score_tree(&tree) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_split_scores_one_over_n() {
        let vocabulary = words(&["abcde", "fghij", "klmno", "pqrst"]);
        let candidates: Vec<&Word> = vocabulary.iter().collect();
        // One letter from each candidate in a distinct position
        let guess = Word::new("agmsz").unwrap();

        let tree = build_tree(&guess, &candidates);
        assert!((score_tree(&tree) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_tree_scores_zero() {
        let guess = Word::new("cigar").unwrap();
        let tree = build_tree(&guess, &[]);
        assert!(score_tree(&tree).abs() < f64::EPSILON);
    }

    #[test]
    fn score_stays_within_unit_interval() {
        let vocabulary = words(&[
            "cigar", "rebut", "sissy", "humph", "awake", "blush", "focal", "evade", "naval", "serve",
        ]);
        let candidates: Vec<&Word> = vocabulary.iter().collect();

        for guess in &vocabulary {
            let score = score_tree(&build_tree(guess, &candidates));
            assert!((0.0..=1.0).contains(&score), "{guess} scored {score}");
            assert!(score >= 1.0 / candidates.len() as f64 - 1e-12);
        }
    }

    #[test]
    fn leaf_probabilities_sum_to_one() {
        let vocabulary = words(&["cigar", "rebut", "sissy", "humph", "awake"]);
        let candidates: Vec<&Word> = vocabulary.iter().collect();

        let tree = build_tree(&vocabulary[2], &candidates);
        let sum: f64 = leaf_probabilities(&tree).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn summary_reports_leaf_sizes() {
        let vocabulary = words(&["cigar", "cider", "rebut"]);
        let candidates: Vec<&Word> = vocabulary.iter().collect();
        let guess = Word::new("zzzzr").unwrap();

        // CIGAR and CIDER end in R, REBUT has it elsewhere: {cigar, cider} and {rebut}
        let summary = summarize(&build_tree(&guess, &candidates));
        assert_eq!(summary.leaves, 2);
        assert_eq!(summary.largest_leaf, 2);
        assert!((summary.score - (4.0 / 9.0 + 1.0 / 9.0)).abs() < 1e-12);
        assert!((summary.expected_remaining - (2.0 / 3.0 * 2.0 + 1.0 / 3.0)).abs() < 1e-9);
    }
}
