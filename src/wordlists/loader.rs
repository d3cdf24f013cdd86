//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::{Word, WordError};
use crate::error::SolverError;
use std::fs;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Blank lines are skipped. Any other line must be a valid word.
///
/// # Errors
///
/// Returns `SolverError::WordList` if the file cannot be read, or
/// `SolverError::InvalidListEntry` naming the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_collision::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/extra.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SolverError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    parse_word_list(&content).map_err(|(line, source)| SolverError::InvalidListEntry {
        path: path.to_path_buf(),
        line,
        source,
    })
}

/// Parse newline-delimited words, reporting the 1-based line of the first bad entry
fn parse_word_list(content: &str) -> Result<Vec<Word>, (usize, WordError)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| Word::new(line).map_err(|e| (line_number, e)))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_collision::wordlists::loader::words_from_slice;
/// use wordle_collision::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cigar", "rebut", "sissy"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cigar");
        assert_eq!(words[1].text(), "rebut");
        assert_eq!(words[2].text(), "sissy");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cigar", "toolong", "abc", "rebut"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cigar");
        assert_eq!(words[1].text(), "rebut");
    }

    #[test]
    fn parse_skips_blank_lines() {
        let words = parse_word_list("aahed\n\n  aalii \n").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "aalii");
    }

    #[test]
    fn parse_reports_first_bad_line() {
        let err = parse_word_list("aahed\n\nab\nzzzzzz\n").unwrap_err();
        assert_eq!(err, (3, WordError::InvalidLength(2)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(SolverError::WordList { .. })));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join("wordle_collision_loader_test.txt");
        fs::write(&path, "aahed\naalii\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "aahed");
    }
}
