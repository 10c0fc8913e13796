//! `Assignment`: a letter → digit mapping stored as a fixed 26-slot array.
//!
//! The solver creates and discards assignments in its hot loop, so we avoid hashing:
//! each letter A-Z owns one slot, `None` meaning "not part of this equation".

use crate::letters::{index_to_letter, CryptoChar, ALPHABET_SIZE};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Assignment {
    digits: [Option<u8>; ALPHABET_SIZE],
}

impl Assignment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `letter` to `digit`, replacing any earlier digit for that letter.
    ///
    /// Non A-Z letters are ignored.
    pub fn set(&mut self, letter: char, digit: u8) {
        debug_assert!(digit <= 9, "digit {digit} is not a decimal digit");
        if let Some(i) = letter.letter_index() {
            self.digits[i] = Some(digit);
        }
    }

    #[must_use]
    pub fn get(&self, letter: char) -> Option<u8> {
        letter.letter_index().and_then(|i| self.digits[i])
    }

    /// Number of letters bound.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(letter, digit)` pairs in ascending letter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u8)> + '_ {
        self.digits
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.map(|d| (index_to_letter(i), d)))
    }

    /// True if no two letters share a digit.
    #[must_use]
    pub fn is_injective(&self) -> bool {
        let mut seen = 0u16;
        for (_, d) in self.iter() {
            if seen & (1 << d) != 0 {
                return false;
            }
            seen |= 1 << d;
        }
        true
    }

    /// Positional decimal value of `word` under this assignment.
    ///
    /// Returns `None` if some letter of `word` is unbound or the value overflows `u64`.
    #[must_use]
    pub fn word_value(&self, word: &str) -> Option<u64> {
        word.chars().try_fold(0u64, |acc, c| {
            let d = self.get(c)?;
            acc.checked_mul(10)?.checked_add(u64::from(d))
        })
    }

    /// True if `Σ addends == result` and no word starts with a zero.
    #[must_use]
    pub fn satisfies(&self, addends: &[&str], result: &str) -> bool {
        let leading_ok = addends
            .iter()
            .chain(std::iter::once(&result))
            .filter_map(|w| w.chars().next())
            .all(|c| self.get(c).is_some_and(|d| d != 0));
        if !leading_ok {
            return false;
        }

        let sum = addends
            .iter()
            .try_fold(0u64, |acc, w| acc.checked_add(self.word_value(w)?));
        match (sum, self.word_value(result)) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl FromIterator<(char, u8)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (char, u8)>>(iter: T) -> Self {
        let mut assignment = Assignment::new();
        for (letter, digit) in iter {
            assignment.set(letter, digit);
        }
        assignment
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, digit)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}={digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_two_four() -> Assignment {
        [('T', 7), ('W', 3), ('O', 4), ('F', 1), ('U', 6), ('R', 8)].into_iter().collect()
    }

    #[test]
    fn test_get_and_len() {
        let a = two_two_four();
        assert_eq!(a.len(), 6);
        assert_eq!(a.get('T'), Some(7));
        assert_eq!(a.get('Z'), None);
        assert_eq!(a.get('t'), None);
    }

    #[test]
    fn test_iter_is_alphabetical() {
        let letters: String = two_two_four().iter().map(|(c, _)| c).collect();
        assert_eq!(letters, "FORTUW");
    }

    #[test]
    fn test_word_value() {
        let a = two_two_four();
        assert_eq!(a.word_value("TWO"), Some(734));
        assert_eq!(a.word_value("FOUR"), Some(1468));
        assert_eq!(a.word_value("TWX"), None);
    }

    #[test]
    fn test_satisfies_two_plus_two() {
        assert!(two_two_four().satisfies(&["TWO", "TWO"], "FOUR"));
    }

    #[test]
    fn test_satisfies_rejects_leading_zero() {
        // 0 + 0 = 0 balances but every word starts with a zero
        let a: Assignment = [('A', 0)].into_iter().collect();
        assert!(!a.satisfies(&["A", "A"], "A"));
    }

    #[test]
    fn test_is_injective() {
        assert!(two_two_four().is_injective());
        let clash: Assignment = [('A', 1), ('B', 1)].into_iter().collect();
        assert!(!clash.is_injective());
    }

    #[test]
    fn test_display() {
        let a: Assignment = [('B', 2), ('A', 1)].into_iter().collect();
        assert_eq!(a.to_string(), "A=1 B=2");
        assert!(Assignment::new().is_empty());
    }
}
