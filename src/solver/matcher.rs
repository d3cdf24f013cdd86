//! Constraint matching
//!
//! Filters a word list down to the words consistent with accumulated feedback.

use crate::core::{Color, Constraint, Word};

/// A constraint reduced to the test it performs on a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    /// Letter sits at this position
    At { position: usize, letter: u8 },
    /// Letter occurs, but not at this position
    Elsewhere { position: usize, letter: u8 },
    /// Letter does not occur at all
    Absent { letter: u8 },
    /// Letter occurs at most `max` times
    AtMost { letter: u8, max: usize },
}

impl Rule {
    #[inline]
    fn accepts(self, word: &Word) -> bool {
        match self {
            Self::At { position, letter } => word.char_at(position) == letter,
            Self::Elsewhere { position, letter } => {
                word.has_letter(letter) && word.char_at(position) != letter
            }
            Self::Absent { letter } => !word.has_letter(letter),
            Self::AtMost { letter, max } => word.count_of(letter) <= max,
        }
    }
}

/// A compiled set of constraints
///
/// Black constraints are resolved against their guess here, once: the first
/// black for a letter within a guess means the letter is absent, while a
/// black that follows `k - 1` earlier same-letter constraints of that guess
/// caps the letter at `k - 1` copies.
#[derive(Debug, Clone)]
pub struct ConstraintMatcher {
    rules: Vec<Rule>,
}

impl ConstraintMatcher {
    #[must_use]
    pub fn new(constraints: &[Constraint]) -> Self {
        let rules = constraints
            .iter()
            .enumerate()
            .map(|(i, constraint)| {
                let position = constraint.position();
                let letter = constraint.letter();
                match constraint.color() {
                    Color::Green => Rule::At { position, letter },
                    Color::Yellow => Rule::Elsewhere { position, letter },
                    Color::Black => {
                        let ordinal = 1 + constraints[..i]
                            .iter()
                            .filter(|earlier| {
                                earlier.group() == constraint.group() && earlier.letter() == letter
                            })
                            .count();
                        if ordinal == 1 {
                            Rule::Absent { letter }
                        } else {
                            Rule::AtMost {
                                letter,
                                max: ordinal - 1,
                            }
                        }
                    }
                }
            })
            .collect();

        Self { rules }
    }

    /// Check a single word against every constraint
    #[inline]
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        self.rules.iter().all(|rule| rule.accepts(word))
    }

    /// Keep the accepted words, preserving their order
    #[must_use]
    pub fn filter<'w>(&self, words: impl IntoIterator<Item = &'w Word>) -> Vec<&'w Word> {
        words.into_iter().filter(|word| self.accepts(word)).collect()
    }
}

/// Every word in `words` satisfying all `constraints`, in original order
///
/// # Examples
/// ```
/// use wordle_collision::core::{Word, colorize};
/// use wordle_collision::solver::matches;
///
/// let vocabulary: Vec<Word> = ["sheep", "those", "thyme", "shelf"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let feedback = colorize(&vocabulary[0], &vocabulary[1], 1);
/// let remaining = matches(&vocabulary, &feedback);
///
/// assert_eq!(remaining, vec![&vocabulary[1]]);
/// ```
pub fn matches<'w>(
    words: impl IntoIterator<Item = &'w Word>,
    constraints: &[Constraint],
) -> Vec<&'w Word> {
    ConstraintMatcher::new(constraints).filter(words)
}
