//! Next-guess recommendation
//!
//! Replays feedback typed by the player (e.g. `crane` / `-Y--G`) and asks
//! the selector for the best next guess.

use crate::core::{ConstraintSet, Word, parse_feedback};
use crate::error::SolverError;
use crate::solver::{GuessSelector, Mode};

/// One guess the player made and the colors they saw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub guess: String,
    pub pattern: String,
}

impl FeedbackEntry {
    #[must_use]
    pub fn new(guess: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
            pattern: pattern.into(),
        }
    }
}

/// The suggested guess and the answers still in play
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub word: String,
    pub score: f64,
    pub candidates: Vec<String>,
}

impl Recommendation {
    /// Whether the suggestion is the only possible answer
    #[must_use]
    pub fn is_forced(&self) -> bool {
        self.candidates.len() == 1
    }
}

/// Rebuild the constraint set from typed feedback, numbering guesses from 1
///
/// # Errors
///
/// Returns an error if a guess is not a valid word or a pattern is malformed.
pub fn constraints_from_feedback(entries: &[FeedbackEntry]) -> Result<ConstraintSet, SolverError> {
    let mut constraints = ConstraintSet::new();
    for (group, entry) in (1..).zip(entries) {
        let guess = Word::new(&entry.guess)?;
        constraints.extend_from_guess(parse_feedback(&guess, &entry.pattern, group)?)?;
    }
    Ok(constraints)
}

/// Recommend the next guess given the feedback so far
///
/// # Errors
///
/// Returns an error if the feedback cannot be parsed or no solution word
/// fits it.
pub fn recommend(
    selector: &GuessSelector<'_>,
    entries: &[FeedbackEntry],
    mode: Mode,
) -> Result<Recommendation, SolverError> {
    let constraints = constraints_from_feedback(entries)?;
    let result = selector.select(&constraints, mode)?;

    Ok(Recommendation {
        word: result.word.text().to_string(),
        score: result.score,
        candidates: result.list.iter().map(|w| w.text().to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, ConstraintError, WordError};
    use crate::wordlists::loader::words_from_slice;

    fn vocabulary() -> Vec<Word> {
        words_from_slice(&["sheep", "those", "thyme", "shelf", "cigar", "rebut"])
    }

    #[test]
    fn no_feedback_gives_an_opening_guess() {
        let words = vocabulary();
        let selector = GuessSelector::new(&words, &words);

        let rec = recommend(&selector, &[], Mode::Easy).unwrap();
        assert_eq!(rec.candidates.len(), words.len());
        assert!(rec.score < 1.0);
    }

    #[test]
    fn feedback_narrows_to_the_answer() {
        let words = vocabulary();
        let selector = GuessSelector::new(&words, &words);

        // SHEEP against THOSE
        let entries = [FeedbackEntry::new("sheep", "YGY--")];
        let rec = recommend(&selector, &entries, Mode::Hard).unwrap();

        assert_eq!(rec.word, "those");
        assert!(rec.is_forced());
        assert!((rec.score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn emoji_patterns_are_accepted() {
        let entries = [
            FeedbackEntry::new("cigar", "⬛⬛⬛⬛🟨"),
            FeedbackEntry::new("rebut", "🟩🟩⬛⬛⬛"),
        ];
        let constraints = constraints_from_feedback(&entries).unwrap();

        assert_eq!(constraints.len(), 10);
        assert_eq!(constraints.last_group(), Some(2));
        assert_eq!(constraints.as_slice()[4].color(), Color::Yellow);
        assert_eq!(constraints.as_slice()[5].color(), Color::Green);
    }

    #[test]
    fn malformed_feedback_is_an_error() {
        assert!(matches!(
            constraints_from_feedback(&[FeedbackEntry::new("sheep", "GGX--")]),
            Err(SolverError::InvalidFeedback(ConstraintError::InvalidPattern(_)))
        ));
        assert!(matches!(
            constraints_from_feedback(&[FeedbackEntry::new("sheep", "GG")]),
            Err(SolverError::InvalidFeedback(_))
        ));
        assert!(matches!(
            constraints_from_feedback(&[FeedbackEntry::new("sheeps", "GGGGG")]),
            Err(SolverError::InvalidWord(WordError::InvalidLength(6)))
        ));
    }

    #[test]
    fn contradictory_feedback_has_no_candidates() {
        let words = vocabulary();
        let selector = GuessSelector::new(&words, &words);

        let entries = [FeedbackEntry::new("zzzzz", "GGGGG")];
        assert!(matches!(
            recommend(&selector, &entries, Mode::Easy),
            Err(SolverError::NoCandidates { .. })
        ));
    }
}
