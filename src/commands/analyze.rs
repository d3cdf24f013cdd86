//! Word analysis command
//!
//! Scores a single guess against the possible answers and reports the shape
//! of its outcome tree.

use crate::core::Word;
use crate::error::SolverError;
use crate::solver::tree::{TreeSummary, build_tree, summarize};
use crate::wordlists::Vocabulary;

/// Result of analyzing a word
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub word: String,
    pub summary: TreeSummary,
    pub total_candidates: usize,
}

impl AnalysisResult {
    /// Fraction of candidates guaranteed to be ruled out in the worst case
    #[must_use]
    pub fn worst_case_reduction(&self) -> f64 {
        if self.total_candidates == 0 {
            return 0.0;
        }
        1.0 - self.summary.largest_leaf as f64 / self.total_candidates as f64
    }
}

/// Analyze a guess against every solution word
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the vocabulary
pub fn analyze_word(word: &str, vocabulary: &Vocabulary) -> Result<AnalysisResult, SolverError> {
    let parsed = Word::new(word)?;
    let guess = vocabulary
        .find(parsed.text())
        .ok_or_else(|| SolverError::UnknownWord(parsed.text().to_string()))?;

    let candidates: Vec<&Word> = vocabulary.solutions().iter().collect();
    let summary = summarize(&build_tree(guess, &candidates));

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        summary,
        total_candidates: candidates.len(),
    })
}
