//! `word_list`: load and normalize the word list the sampler draws from.
//!
//! Input is plain text, one word per line. A line is kept when, after trimming, it is
//! purely alphabetic ASCII and its length lies in `[min_len, max_len]`; kept words are
//! uppercased. Order and duplicates are preserved, so a word listed twice is drawn twice
//! as often.
//!
//! - `parse_from_str(...)` works everywhere, including WASM.
//! - `load_from_path(...)` is a **native-only** convenience that reads a file first.

use crate::errors::ParseError;
use log::warn;
use std::ops::RangeInclusive;

/// Shortest word kept by default.
pub const DEFAULT_MIN_LEN: usize = 3;
/// Longest word kept by default.
pub const DEFAULT_MAX_LEN: usize = 6;

/// A processed, ready-to-sample word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    /// Uppercase words, in file order.
    /// Example: `["CAT", "DOG", "COAT", ...]`
    pub words: Vec<String>,
}

impl WordList {
    /// Parse a word list from an in-memory string.
    ///
    /// # Errors
    ///
    /// [`ParseError::ContradictoryBounds`] if `min_len > max_len`.
    pub fn parse_from_str(
        contents: &str,
        min_len: usize,
        max_len: usize,
    ) -> Result<WordList, Box<ParseError>> {
        let lengths = length_window(min_len, max_len)?;

        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
            .filter(|w| lengths.contains(&w.len()))
            .map(str::to_ascii_uppercase)
            .collect();

        if words.is_empty() && !contents.trim().is_empty() {
            warn!("no words of length {min_len}-{max_len} survived filtering");
        }

        Ok(WordList { words })
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`, or if the length bounds
    /// contradict each other.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        min_len: usize,
        max_len: usize,
    ) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("failed to read word list from '{}': {}", path_ref.display(), e)
            )
        })?;

        Self::parse_from_str(&data, min_len, max_len).map_err(|e| std::io::Error::from(*e))
    }

    /// Borrowed view for the sampler.
    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.words.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn length_window(min_len: usize, max_len: usize) -> Result<RangeInclusive<usize>, Box<ParseError>> {
    if min_len > max_len {
        return Err(Box::new(ParseError::ContradictoryBounds { min: min_len, max: max_len }));
    }
    Ok(min_len.max(1)..=max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<String> {
        WordList::parse_from_str(input, DEFAULT_MIN_LEN, DEFAULT_MAX_LEN).unwrap().words
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("cat\ndog\ncoat"), vec!["CAT", "DOG", "COAT"]);
    }

    #[test]
    fn test_parse_filters_by_length() {
        assert_eq!(parse("a\nab\nabc\nabcdef\nabcdefg"), vec!["ABC", "ABCDEF"]);
    }

    #[test]
    fn test_parse_skips_non_alphabetic() {
        assert_eq!(parse("cat\nc4t\nice-cream\ndon't\ntwo words\ndog"), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_skips_non_ascii_letters() {
        // the solver works on A-Z only
        assert_eq!(parse("КОТ\ncafé\nday"), vec!["DAY"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_and_order() {
        assert_eq!(parse("dog\ncat\ndog"), vec!["DOG", "CAT", "DOG"]);
    }

    #[test]
    fn test_parse_handles_whitespace_and_blank_lines() {
        assert_eq!(parse("  cat  \n\n\t\n dog\r\n"), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("", 3, 6).unwrap().is_empty());
    }

    #[test]
    fn test_parse_custom_window() {
        let list = WordList::parse_from_str("a\nbb\nccc", 1, 2).unwrap();
        assert_eq!(list.words, vec!["A", "BB"]);
        assert_eq!(list.as_strs(), vec!["A", "BB"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_parse_contradictory_bounds() {
        let err = WordList::parse_from_str("cat", 6, 3).unwrap_err();
        assert!(matches!(*err, ParseError::ContradictoryBounds { min: 6, max: 3 }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("/definitely/not/here.txt", 3, 6).unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
