//! Game feedback generation
//!
//! Reproduces the coloring a player sees after guessing, including the
//! duplicate-letter rules, as a list of constraints ready to append to a
//! game's [`ConstraintSet`](super::ConstraintSet).

use super::constraint::{Color, Constraint};
use super::word::{WORD_LENGTH, Word};

/// Color `guess` against `answer`
///
/// Returns one constraint per position, in position order, all tagged with
/// `guess_index` (1-based within the game).
///
/// # Algorithm
/// 1. Green pass: exact matches are colored and consumed
/// 2. Yellow pass: a remaining letter is yellow while fewer yellows have been
///    given for it than the answer holds copies in total (greens are not
///    deducted first)
/// 3. Everything left is black
///
/// # Examples
/// ```
/// use wordle_collision::core::{Color, Word, colorize};
///
/// let guess = Word::new("sheep").unwrap();
/// let answer = Word::new("those").unwrap();
/// let colors: Vec<Color> = colorize(&guess, &answer, 1)
///     .iter()
///     .map(|c| c.color())
///     .collect();
///
/// assert_eq!(
///     colors,
///     [Color::Yellow, Color::Green, Color::Yellow, Color::Black, Color::Black]
/// );
/// ```
#[must_use]
pub fn colorize(guess: &Word, answer: &Word, guess_index: u32) -> Vec<Constraint> {
    let mut colors: [Option<Color>; WORD_LENGTH] = [None; WORD_LENGTH];

    // Green pass
    for (i, color) in colors.iter_mut().enumerate() {
        if guess.char_at(i) == answer.char_at(i) {
            *color = Some(Color::Green);
        }
    }

    // Yellow pass
    let mut yellows_given = [0usize; 26];
    for (i, color) in colors.iter_mut().enumerate() {
        if color.is_some() {
            continue;
        }
        let letter = guess.char_at(i);
        let given = &mut yellows_given[usize::from(letter - b'a')];
        if answer.has_letter(letter) && *given < answer.count_of(letter) {
            *color = Some(Color::Yellow);
            *given += 1;
        }
    }

    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            Constraint::for_word(
                color.unwrap_or(Color::Black),
                i,
                guess.char_at(i),
                guess_index,
            )
        })
        .collect()
}

/// True when every constraint in the feedback is green
#[must_use]
pub fn is_solved(feedback: &[Constraint]) -> bool {
    feedback.len() == WORD_LENGTH && feedback.iter().all(|c| c.color() == Color::Green)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors_of(guess: &str, answer: &str) -> Vec<Color> {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        colorize(&guess, &answer, 1)
            .iter()
            .map(Constraint::color)
            .collect()
    }

    #[test]
    fn all_green_for_identical_words() {
        for text in ["cigar", "sheep", "voice", "mamma", "eerie"] {
            let word = Word::new(text).unwrap();
            let feedback = colorize(&word, &word, 4);
            assert!(is_solved(&feedback), "{text} against itself");
            assert!(feedback.iter().all(|c| c.group() == 4));
        }
    }

    #[test]
    fn all_black_for_disjoint_words() {
        assert_eq!(colors_of("abcde", "fghij"), [Color::Black; 5]);
    }

    #[test]
    fn emitted_in_position_order() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("react").unwrap();
        let feedback = colorize(&guess, &answer, 2);

        for (i, constraint) in feedback.iter().enumerate() {
            assert_eq!(constraint.position(), i);
            assert_eq!(constraint.letter(), guess.char_at(i));
        }
    }

    #[test]
    fn single_copy_answer_gives_one_yellow_and_one_black() {
        // THOSE has one E; SHEEP has two, neither in place
        let colors = colors_of("sheep", "those");
        let e_colors: Vec<Color> = vec![colors[2], colors[3]];

        assert_eq!(e_colors, [Color::Yellow, Color::Black]);
        assert_eq!(colors[1], Color::Green); // H
        assert_eq!(colors[0], Color::Yellow); // S
        assert_eq!(colors[4], Color::Black); // P
    }

    #[test]
    fn double_copy_answer_allows_two_yellows() {
        // FENCE has two E's, so both misplaced E's in SHEEP light up
        let colors = colors_of("sheep", "fence");
        assert_eq!(colors[2], Color::Yellow);
        assert_eq!(colors[3], Color::Yellow);
    }

    #[test]
    fn yellow_pass_does_not_deduct_greens() {
        // SHELF has one E, already green at position 2. The yellow pass compares
        // against the total count, so the second E still shows yellow.
        let colors = colors_of("sheep", "shelf");
        assert_eq!(
            colors,
            [
                Color::Green,
                Color::Green,
                Color::Green,
                Color::Yellow,
                Color::Black
            ]
        );
    }

    #[test]
    fn yellows_capped_by_total_count() {
        // ROBOT vs FLOOR: both O's in FLOOR; second O is green, first yellow
        let colors = colors_of("robot", "floor");
        assert_eq!(
            colors,
            [
                Color::Yellow,
                Color::Yellow,
                Color::Black,
                Color::Green,
                Color::Black
            ]
        );
    }

    #[test]
    fn is_solved_requires_full_feedback() {
        let word = Word::new("voice").unwrap();
        let feedback = colorize(&word, &word, 1);
        assert!(is_solved(&feedback));
        assert!(!is_solved(&feedback[..4]));
    }
}
