//! Feedback constraints
//!
//! Every guess yields one constraint per letter position. A constraint records
//! the color the game showed, the position and letter it applies to, and the
//! guess (group) that produced it. Groups matter for black squares: the
//! matcher counts same-letter constraints within one guess to decide what a
//! black square means.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use thiserror::Error;

/// Group reserved for synthetic constraints that never came from a real guess
///
/// Real guesses are numbered from 1.
pub const PROBE_GROUP: u32 = 0;

/// Feedback color for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Letter is in the word at this position
    Green,
    /// Letter is in the word, but not at this position
    Yellow,
    /// Letter is absent (or already accounted for)
    Black,
}

impl Color {
    /// All colors in tree order
    pub const ALL: [Self; 3] = [Self::Green, Self::Yellow, Self::Black];

    /// Index of this color in [`Color::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::Yellow => 1,
            Self::Black => 2,
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and '-'/'_'/'B'/'b'/⬛/⬜.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            '-' | '_' | 'B' | 'b' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }

    /// Emoji square for this color
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Black => "black",
        };
        f.write_str(name)
    }
}

/// Error type for malformed constraints and feedback
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintError {
    #[error("Position {0} is outside a 5-letter word")]
    PositionOutOfBounds(usize),
    #[error("Letter {0:?} is not a lowercase ASCII letter")]
    InvalidLetter(char),
    #[error("Group {group} recorded after group {previous}")]
    GroupOutOfOrder { previous: u32, group: u32 },
    #[error("Invalid feedback pattern: {0:?}")]
    InvalidPattern(String),
}

/// One piece of feedback learned from one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    color: Color,
    position: usize,
    letter: u8,
    group: u32,
}

impl Constraint {
    /// Create a constraint, validating position and letter
    ///
    /// # Errors
    /// Returns `ConstraintError` if the position is not in `0..5` or the
    /// letter is not `a..=z`.
    pub fn new(color: Color, position: usize, letter: u8, group: u32) -> Result<Self, ConstraintError> {
        if position >= WORD_LENGTH {
            return Err(ConstraintError::PositionOutOfBounds(position));
        }
        if !letter.is_ascii_lowercase() {
            return Err(ConstraintError::InvalidLetter(char::from(letter)));
        }
        Ok(Self::for_word(color, position, letter, group))
    }

    /// Build a constraint for a letter already known to come from a valid word
    #[inline]
    pub(crate) const fn for_word(color: Color, position: usize, letter: u8, group: u32) -> Self {
        Self {
            color,
            position,
            letter,
            group,
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn group(&self) -> u32 {
        self.group
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}@{} {}",
            self.group,
            char::from(self.letter),
            self.position,
            self.color
        )
    }
}

/// Constraints accumulated over one game, in the order they were recorded
///
/// Compared and hashed by value, so two games that reach the same feedback
/// share a memoized selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Append the feedback of one guess
    ///
    /// # Errors
    /// Returns `ConstraintError::GroupOutOfOrder` if a constraint's group is
    /// lower than the last recorded group.
    pub fn extend_from_guess(
        &mut self,
        feedback: impl IntoIterator<Item = Constraint>,
    ) -> Result<(), ConstraintError> {
        for constraint in feedback {
            if let Some(previous) = self.last_group()
                && constraint.group < previous
            {
                return Err(ConstraintError::GroupOutOfOrder {
                    previous,
                    group: constraint.group,
                });
            }
            self.constraints.push(constraint);
        }
        Ok(())
    }

    /// Group of the most recently recorded constraint
    #[must_use]
    pub fn last_group(&self) -> Option<u32> {
        self.constraints.last().map(Constraint::group)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn clear(&mut self) {
        self.constraints.clear();
    }
}

impl<'s> IntoIterator for &'s ConstraintSet {
    type Item = &'s Constraint;
    type IntoIter = std::slice::Iter<'s, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.constraints.iter()
    }
}

/// Turn a guess and a typed feedback string (e.g. "GY-G-") into constraints
///
/// # Errors
/// Returns `ConstraintError::InvalidPattern` unless the pattern has exactly
/// five recognised symbols.
///
/// # Examples
/// ```
/// use wordle_collision::core::{Color, Word, parse_feedback};
///
/// let guess = Word::new("sheep").unwrap();
/// let feedback = parse_feedback(&guess, "-gy-b", 1).unwrap();
/// assert_eq!(feedback[1].color(), Color::Green);
/// assert_eq!(feedback[2].color(), Color::Yellow);
/// ```
pub fn parse_feedback(guess: &Word, pattern: &str, group: u32) -> Result<Vec<Constraint>, ConstraintError> {
    let colors: Vec<Color> = pattern
        .chars()
        .map(Color::from_symbol)
        .collect::<Option<_>>()
        .ok_or_else(|| ConstraintError::InvalidPattern(pattern.to_string()))?;

    if colors.len() != WORD_LENGTH {
        return Err(ConstraintError::InvalidPattern(pattern.to_string()));
    }

    Ok(colors
        .into_iter()
        .zip(guess.chars())
        .enumerate()
        .map(|(position, (color, &letter))| Constraint::for_word(color, position, letter, group))
        .collect())
}

/// Render feedback as emoji squares in position order
#[must_use]
pub fn feedback_to_emoji(feedback: &[Constraint]) -> String {
    let mut ordered: Vec<&Constraint> = feedback.iter().collect();
    ordered.sort_by_key(|c| c.position());
    ordered.iter().map(|c| c.color().to_emoji()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_rejects_out_of_bounds_position() {
        assert_eq!(
            Constraint::new(Color::Green, 5, b'a', 1),
            Err(ConstraintError::PositionOutOfBounds(5))
        );
        assert!(Constraint::new(Color::Green, 4, b'a', 1).is_ok());
    }

    #[test]
    fn constraint_rejects_non_letters() {
        assert!(matches!(
            Constraint::new(Color::Black, 0, b'A', 1),
            Err(ConstraintError::InvalidLetter('A'))
        ));
    }

    #[test]
    fn color_index_matches_all_order() {
        for (i, color) in Color::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
    }

    #[test]
    fn set_rejects_decreasing_groups() {
        let mut set = ConstraintSet::new();
        set.extend_from_guess([Constraint::new(Color::Black, 0, b'a', 2).unwrap()])
            .unwrap();

        let result = set.extend_from_guess([Constraint::new(Color::Black, 1, b'b', 1).unwrap()]);
        assert_eq!(
            result,
            Err(ConstraintError::GroupOutOfOrder {
                previous: 2,
                group: 1
            })
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn sets_compare_by_value() {
        let c = Constraint::new(Color::Yellow, 2, b'e', 1).unwrap();
        let mut a = ConstraintSet::new();
        let mut b = ConstraintSet::new();
        a.extend_from_guess([c]).unwrap();
        b.extend_from_guess([c]).unwrap();
        assert_eq!(a, b);

        b.clear();
        assert!(b.is_empty());
        assert_ne!(a, b);
    }

    #[test]
    fn parse_feedback_accepts_letters_and_emoji() {
        let guess = Word::new("crane").unwrap();
        let typed = parse_feedback(&guess, "GY-GY", 3).unwrap();
        let emoji = parse_feedback(&guess, "🟩🟨⬜🟩🟨", 3).unwrap();

        assert_eq!(typed, emoji);
        assert_eq!(typed.len(), 5);
        assert!(typed.iter().all(|c| c.group() == 3));
        assert_eq!(typed[3].letter(), b'n');
    }

    #[test]
    fn parse_feedback_rejects_bad_patterns() {
        let guess = Word::new("crane").unwrap();
        assert!(parse_feedback(&guess, "GYG", 1).is_err());
        assert!(parse_feedback(&guess, "GYGGYG", 1).is_err());
        assert!(parse_feedback(&guess, "GXGGY", 1).is_err());
    }

    #[test]
    fn emoji_rendering_follows_position_order() {
        let feedback = [
            Constraint::new(Color::Black, 1, b'r', 1).unwrap(),
            Constraint::new(Color::Green, 0, b'c', 1).unwrap(),
        ];
        assert_eq!(feedback_to_emoji(&feedback), "🟩⬛");
    }
}
