//! Word lists for Wordle solving
//!
//! The solution list is embedded in the binary; extra allowed guesses can be
//! loaded from a file and appended to form the full vocabulary.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::error::SolverError;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Ordered vocabulary: solution words first, then extra allowed guesses
///
/// Only solutions can be answers; any word can be guessed. Order is kept
/// because it decides ties between equally good guesses.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: Vec<Word>,
    solution_count: usize,
}

impl Vocabulary {
    /// Build a vocabulary, dropping repeated words (first occurrence wins)
    #[must_use]
    pub fn new(solutions: Vec<Word>, extras: Vec<Word>) -> Self {
        let mut seen: FxHashSet<Word> = FxHashSet::default();
        let mut words = Vec::with_capacity(solutions.len() + extras.len());

        for word in solutions {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }
        let solution_count = words.len();

        for word in extras {
            if seen.insert(word.clone()) {
                words.push(word);
            }
        }

        Self {
            words,
            solution_count,
        }
    }

    /// The embedded solution list with no extra guesses
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(ANSWERS), Vec::new())
    }

    /// The embedded solution list plus extra guesses read from `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds a malformed word.
    pub fn embedded_with_extras<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let extras = loader::load_from_file(path)?;
        Ok(Self::new(loader::words_from_slice(ANSWERS), extras))
    }

    /// Every guessable word
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words that can be answers
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.words[..self.solution_count]
    }

    /// Guessable words that are never answers
    #[must_use]
    pub fn extras(&self) -> &[Word] {
        &self.words[self.solution_count..]
    }

    /// Find a word by text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }

    /// Find a solution word by text
    #[must_use]
    pub fn find_solution(&self, text: &str) -> Option<&Word> {
        self.solutions().iter().find(|w| w.text() == text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::loader::words_from_slice;

    #[test]
    fn answers_count_matches_const() {
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
    }

    #[test]
    fn answers_are_valid_words() {
        for &word in ANSWERS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn answers_keep_game_order() {
        assert_eq!(&ANSWERS[..3], &["cigar", "rebut", "sissy"]);
        assert_eq!(ANSWERS_COUNT, 2315, "Expected 2,315 answer words");
    }

    #[test]
    fn embedded_vocabulary_has_no_extras() {
        let vocabulary = Vocabulary::embedded();
        assert_eq!(vocabulary.words().len(), ANSWERS_COUNT);
        assert_eq!(vocabulary.solutions().len(), ANSWERS_COUNT);
        assert!(vocabulary.extras().is_empty());
    }

    #[test]
    fn extras_follow_solutions_without_duplicates() {
        let solutions = words_from_slice(&["cigar", "rebut"]);
        let extras = words_from_slice(&["aahed", "cigar", "aalii", "aahed"]);

        let vocabulary = Vocabulary::new(solutions, extras);
        let texts: Vec<&str> = vocabulary.words().iter().map(Word::text).collect();

        assert_eq!(texts, ["cigar", "rebut", "aahed", "aalii"]);
        assert_eq!(vocabulary.solutions().len(), 2);
        assert_eq!(vocabulary.extras().len(), 2);
    }

    #[test]
    fn find_distinguishes_solutions() {
        let vocabulary = Vocabulary::new(
            words_from_slice(&["cigar"]),
            words_from_slice(&["aahed"]),
        );

        assert!(vocabulary.find("aahed").is_some());
        assert!(vocabulary.find_solution("aahed").is_none());
        assert!(vocabulary.find_solution("cigar").is_some());
        assert!(vocabulary.find("zzzzz").is_none());
    }
}
