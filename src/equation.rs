//! `Equation`: addend words plus one result word, and the parser for typed equations.
//!
//! Typed equations look like `SEND + MORE = MONEY`. Either case is accepted (words are
//! uppercased), `==` works as well as `=`, and any number of addends is allowed. The
//! sampler only ever builds two-addend equations.

use crate::errors::ParseError;
use crate::letters::LetterMask;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, space0},
    combinator::eof,
    multi::separated_list1,
    sequence::preceded,
    IResult,
    Parser,
};
use std::fmt;
use std::str::FromStr;

/// Parser result type: input, output, with our custom `ParseError`
pub type PResult<'a, O> = IResult<&'a str, O, Box<ParseError>>;

/// An ordered list of addends and one result, all uppercase A-Z.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    addends: Vec<String>,
    result: String,
}

impl Equation {
    /// Build an equation from words that are already uppercase A-Z.
    ///
    /// No validation happens here; [`crate::solver::solve_equation`] checks the words.
    pub fn new<S: Into<String>>(addends: impl IntoIterator<Item = S>, result: impl Into<String>) -> Self {
        Equation {
            addends: addends.into_iter().map(Into::into).collect(),
            result: result.into(),
        }
    }

    #[must_use]
    pub fn addends(&self) -> &[String] {
        &self.addends
    }

    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    /// Every word: the addends in order, then the result.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.addends.iter().map(String::as_str).chain(std::iter::once(self.result.as_str()))
    }

    /// Distinct letters across all words.
    #[must_use]
    pub fn letters(&self) -> LetterMask {
        LetterMask::of_words(self.words())
    }

    /// First letters of all words; these may never be zero.
    #[must_use]
    pub fn leading_letters(&self) -> LetterMask {
        LetterMask::leading_of(self.words())
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.addends.join(" + "), self.result)
    }
}

impl FromStr for Equation {
    type Err = Box<ParseError>;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Box::new(ParseError::EmptyEquation));
        }

        // Friendlier errors for the two mistakes people actually make
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphabetic() || c.is_whitespace() || *c == '+' || *c == '='))
        {
            return Err(Box::new(ParseError::InvalidCharacter {
                input: trimmed.to_string(),
                invalid_char: bad,
            }));
        }
        if !trimmed.contains('=') {
            return Err(Box::new(ParseError::MissingEquals { input: trimmed.to_string() }));
        }

        match equation(trimmed) {
            Ok((_, (addends, result))) => Ok(Equation::new(
                addends.into_iter().map(str::to_ascii_uppercase),
                result.to_ascii_uppercase(),
            )),
            Err(nom::Err::Failure(e)) => Err(e),
            Err(_) => Err(Box::new(ParseError::ParseFailure { s: trimmed.to_string() })),
        }
    }
}

// === Token parsers ===

fn word(input: &'_ str) -> PResult<'_, &'_ str> {
    preceded(space0, alpha1).parse(input)
}

fn plus(input: &'_ str) -> PResult<'_, char> {
    preceded(space0, char('+')).parse(input)
}

fn equals(input: &'_ str) -> PResult<'_, &'_ str> {
    preceded(space0, alt((tag("=="), tag("=")))).parse(input)
}

fn equation(input: &'_ str) -> PResult<'_, (Vec<&'_ str>, &'_ str)> {
    (separated_list1(plus, word), equals, word, space0, eof)
        .map(|(addends, _, result, _, _)| (addends, result))
        .parse(input)
}
