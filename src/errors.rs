//! Error types for parsing equations, modes and word-list settings, with error codes and
//! helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E008) for documentation lookup:
//!
//! - E001: `ParseFailure` (Generic equation parse failure)
//! - E002: `EmptyEquation` (Empty equation string)
//! - E003: `MissingEquals` (No `=` between the addends and the result)
//! - E004: `InvalidCharacter` (Character that is not a letter, `+`, `=` or whitespace)
//! - E005: `InvalidMode` (Unknown search mode name)
//! - E006: `ContradictoryBounds` (Contradictory word-length bounds)
//! - E007: `ParseIntError` (Integer parsing error)
//! - E008: `NomError` (Low-level nom parser error)
//!
//! # Examples
//!
//! ```
//! use cryptarithm::equation::Equation;
//!
//! match "SEND + MORE".parse::<Equation>() {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(eq) => println!("Parsed {eq}"),
//! }
//! ```

use nom::error::{ErrorKind, ParseError as NomParseError};
use std::io;
use std::num::ParseIntError;

/// Custom error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Equation parsing failed: \"{s}\"")]
    ParseFailure { s: String },

    #[error("Empty equation string")]
    EmptyEquation,

    #[error("Missing '=' in equation \"{input}\"")]
    MissingEquals { input: String },

    #[error("Invalid character '{invalid_char}' in equation \"{input}\"")]
    InvalidCharacter { input: String, invalid_char: char },

    #[error("Unknown search mode \"{mode}\"")]
    InvalidMode { mode: String },

    #[error("contradictory bounds: min={min}, max={max}")]
    ContradictoryBounds {
        min: usize,
        max: usize,
    },

    #[error("int-parsing error: {0}")]
    ParseIntError(#[from] ParseIntError),

    // nom parser error (lowest level)
    #[error("nom parser error: {0:?}")]
    NomError(ErrorKind),
}

impl From<ParseError> for io::Error {
    fn from(pe: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, pe.to_string())
    }
}

impl From<ParseIntError> for Box<ParseError> {
    fn from(pie: ParseIntError) -> Self {
        Box::new(ParseError::ParseIntError(pie))
    }
}

impl<'a> NomParseError<&'a str> for Box<ParseError> {
    fn from_error_kind(_input: &'a str, kind: ErrorKind) -> Self {
        Box::new(ParseError::NomError(kind))
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl ParseError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::ParseFailure { .. } => "E001",
            ParseError::EmptyEquation => "E002",
            ParseError::MissingEquals { .. } => "E003",
            ParseError::InvalidCharacter { .. } => "E004",
            ParseError::InvalidMode { .. } => "E005",
            ParseError::ContradictoryBounds { .. } => "E006",
            ParseError::ParseIntError(_) => "E007",
            ParseError::NomError(_) => "E008",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ParseError::ParseFailure { .. } => "Generic equation parse failure",
            ParseError::EmptyEquation => "Empty equation string",
            ParseError::MissingEquals { .. } => "No '=' between the addends and the result",
            ParseError::InvalidCharacter { .. } => "Character that is not a letter, '+', '=' or whitespace",
            ParseError::InvalidMode { .. } => "Unknown search mode name",
            ParseError::ContradictoryBounds { .. } => "Contradictory word-length bounds",
            ParseError::ParseIntError(_) => "Integer parsing error",
            ParseError::NomError(_) => "Low-level nom parser error",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            ParseError::ParseFailure { .. } => "The equation has the right characters but not the right shape, e.g. a dangling '+' or two results.",
            ParseError::EmptyEquation => "An equation needs at least one addend and a result.",
            ParseError::MissingEquals { .. } => "Equations are written as addends joined by '+', then '=' (or '=='), then the result word.",
            ParseError::InvalidCharacter { .. } => "Words may only contain the letters A-Z. Digits, punctuation and accented letters are rejected.",
            ParseError::InvalidMode { .. } => "The search mode selects between stopping at the first solvable equation and collecting every uniquely solvable one.",
            ParseError::ContradictoryBounds { .. } => "The minimum word length is larger than the maximum, so no word could ever be loaded.",
            ParseError::ParseIntError(_) => "A numeric argument could not be read as an integer.",
            ParseError::NomError(_) => "The low-level parser stopped on unexpected input. This is usually reported together with a more specific error.",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            ParseError::ParseFailure { .. } => Some("Example: 'SEND + MORE = MONEY'"),
            ParseError::EmptyEquation => Some("Example: Use 'TWO + TWO = FOUR' instead of an empty string"),
            ParseError::MissingEquals { .. } => Some("Add the result after '=', e.g. 'TWO + TWO = FOUR'"),
            ParseError::InvalidCharacter { .. } => Some("Only letters A-Z (either case), '+', '=' and spaces are allowed"),
            ParseError::InvalidMode { .. } => Some("Valid modes are 'first' and 'all'"),
            ParseError::ContradictoryBounds { .. } => Some("The minimum length cannot exceed the maximum length"),
            _ => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<ParseError> {
        vec![
            ParseError::ParseFailure { s: "A + = B".to_string() },
            ParseError::EmptyEquation,
            ParseError::MissingEquals { input: "A + B".to_string() },
            ParseError::InvalidCharacter { input: "A1 = B".to_string(), invalid_char: '1' },
            ParseError::InvalidMode { mode: "some".to_string() },
            ParseError::ContradictoryBounds { min: 6, max: 3 },
            ParseError::ParseIntError("x".parse::<usize>().unwrap_err()),
            ParseError::NomError(ErrorKind::Alpha),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = ParseError::EmptyEquation;
        assert_eq!(err.code(), "E002");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E002"));
        assert!(detailed.contains("Example"));
    }

    #[test]
    fn test_contradictory_bounds_help() {
        let err = ParseError::ContradictoryBounds { min: 6, max: 3 };
        assert_eq!(err.code(), "E006");
        let detailed = err.display_detailed();
        assert!(detailed.contains("minimum length cannot exceed"));
        assert!(detailed.contains('6') && detailed.contains('3'));
    }

    /// Test that all `ParseError` variants have unique, well-formed error codes
    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();

        for err in all_variants() {
            let code = err.code();
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert!(code[1..].parse::<u16>().is_ok(), "Error code '{}' should end with a number", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }

        assert_eq!(codes.len(), 8);
    }

    #[test]
    fn test_help_text_adds_information() {
        for err in all_variants() {
            if let Some(help_text) = err.help() {
                assert!(help_text.len() > 10, "Help text for {:?} should be substantial", err);
                assert_ne!(help_text, err.to_string());
            }
            assert!(!err.description().is_empty());
            assert!(!err.details().is_empty());
        }
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = ParseError::NomError(ErrorKind::Eof);
        assert_eq!(err.display_detailed(), format!("{err} (E008)"));
    }

    #[test]
    fn test_invalid_character_message_names_the_char() {
        let err = ParseError::InvalidCharacter { input: "A1 = B".to_string(), invalid_char: '1' };
        assert!(err.to_string().contains("'1'"));
        assert!(err.display_detailed().contains("E004"));
    }
}
