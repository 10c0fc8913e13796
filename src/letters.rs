use std::fmt;
use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const ALPHABET_SIZE: usize = 26;
pub(crate) const UPPERCASE_ALPHABET: RangeInclusive<char> = 'A'..='Z';

/// Number of decimal digits, and so the most distinct letters an equation can use.
pub const MAX_LETTERS: usize = 10;

pub(crate) trait CryptoChar {
    fn is_word_letter(&self) -> bool;
    /// Position of an uppercase letter in the alphabet (`'A'` → 0).
    fn letter_index(&self) -> Option<usize>;
}

impl CryptoChar for char {
    fn is_word_letter(&self) -> bool {
        self.is_ascii_uppercase()
    }
    fn letter_index(&self) -> Option<usize> {
        self.is_word_letter().then(|| *self as usize - 'A' as usize)
    }
}

/// Inverse of [`CryptoChar::letter_index`].
pub(crate) fn index_to_letter(i: usize) -> char {
    debug_assert!(i < ALPHABET_SIZE, "letter index {i} out of range");
    char::from(b'A' + i as u8)
}

/// True if `word` is non-empty and made only of the letters A-Z.
#[must_use]
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_word_letter())
}

/// A set of letters A-Z packed into the low 26 bits of a `u32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterMask(u32);

impl LetterMask {
    #[must_use]
    pub fn empty() -> Self {
        LetterMask(0)
    }

    /// All distinct letters of `word`. Characters outside A-Z are ignored.
    #[must_use]
    pub fn of_word(word: &str) -> Self {
        word.chars().fold(LetterMask::empty(), |mut mask, c| {
            mask.insert(c);
            mask
        })
    }

    /// Union of the letters of every word in `words`.
    pub fn of_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        words
            .into_iter()
            .fold(LetterMask::empty(), |acc, w| acc.union(LetterMask::of_word(w)))
    }

    /// The set of first letters of every word in `words`.
    pub fn leading_of<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut mask = LetterMask::empty();
        for first in words.into_iter().filter_map(|w| w.chars().next()) {
            mask.insert(first);
        }
        mask
    }

    /// Add a letter; returns false if it was already present or isn't A-Z.
    pub fn insert(&mut self, c: char) -> bool {
        match c.letter_index() {
            Some(i) if self.0 & (1 << i) == 0 => {
                self.0 |= 1 << i;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn contains(self, c: char) -> bool {
        c.letter_index().is_some_and(|i| self.0 & (1 << i) != 0)
    }

    #[must_use]
    pub fn union(self, other: LetterMask) -> LetterMask {
        LetterMask(self.0 | other.0)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in ascending alphabetical order.
    pub fn letters(self) -> impl Iterator<Item = char> {
        (0..ALPHABET_SIZE)
            .filter(move |i| self.0 & (1 << i) != 0)
            .map(index_to_letter)
    }
}

impl fmt::Display for LetterMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.letters().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index() {
        assert_eq!('A'.letter_index(), Some(0));
        assert_eq!('Z'.letter_index(), Some(25));
        assert_eq!('a'.letter_index(), None);
        assert_eq!('1'.letter_index(), None);
        assert_eq!('Ж'.letter_index(), None);
    }

    #[test]
    fn test_index_round_trips_whole_alphabet() {
        for c in UPPERCASE_ALPHABET {
            assert_eq!(c.letter_index().map(index_to_letter), Some(c));
        }
    }

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("A"));
        assert!(is_valid_word("MONEY"));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("Money"));
        assert!(!is_valid_word("TWO2"));
        assert!(!is_valid_word("TWO TWO"));
    }

    #[test]
    fn test_mask_of_words_counts_distinct_letters() {
        let mask = LetterMask::of_words(["TWO", "TWO", "FOUR"]);
        assert_eq!(mask.len(), 6);
        assert_eq!(mask.letters().collect::<String>(), "FORTUW");
        assert_eq!(mask.to_string(), "{F,O,R,T,U,W}");
    }

    #[test]
    fn test_repeated_letters_in_a_word_count_once() {
        let mask = LetterMask::of_word("BANANA");
        assert_eq!(mask.len(), 3);
        assert!(mask.contains('N'));
        assert!(!mask.contains('C'));
    }

    #[test]
    fn test_leading_letters() {
        let leading = LetterMask::leading_of(["TWO", "TWO", "FOUR"]);
        assert_eq!(leading.letters().collect::<Vec<_>>(), vec!['F', 'T']);
    }

    #[test]
    fn test_insert_reports_new_letters_only() {
        let mut mask = LetterMask::empty();
        assert!(mask.is_empty());
        assert!(mask.insert('Q'));
        assert!(!mask.insert('Q'));
        assert!(!mask.insert('q'));
        assert_eq!(mask.len(), 1);
    }
}
