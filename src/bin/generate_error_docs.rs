//! Generate error code documentation from the source of truth (error enums).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `ParseError`, `SolverError` and `SampleError` implementations
//! via their `code()`, `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use cryptarithm::errors::ParseError;
use cryptarithm::sampler::SampleError;
use cryptarithm::solver::SolverError;
use std::io::{self, Write};

/// Macro to generate error documentation for any error type
/// with `code()`, `description()`, `details()`, `help()`, and `display_detailed()` methods
macro_rules! generate_error_docs {
    ($out:expr, $errors:expr) => {
        for error in $errors {
            writeln!($out, "### {}: {}\n", error.code(), error.description())?;
            writeln!($out, "**Details:** {}\n", error.details())?;

            if let Some(help_text) = error.help() {
                writeln!($out, "**How to fix:**")?;
                writeln!($out, "```\n{}\n```\n", help_text)?;
            }

            writeln!($out, "**Example error message:**")?;
            writeln!($out, "```\n{}\n```\n", error)?;

            writeln!($out, "**Detailed format:**")?;
            writeln!($out, "```\n{}\n```\n", error.display_detailed())?;

            writeln!($out, "---\n")?;
        }
    };
}

/// Helper to create all `ParseError` variants for documentation
fn all_parse_error_variants() -> Vec<ParseError> {
    vec![
        ParseError::ParseFailure { s: "TWO + = FOUR".to_string() },
        ParseError::EmptyEquation,
        ParseError::MissingEquals { input: "TWO + TWO".to_string() },
        ParseError::InvalidCharacter { input: "TW0 + TWO = FOUR".to_string(), invalid_char: '0' },
        ParseError::InvalidMode { mode: "most".to_string() },
        ParseError::ContradictoryBounds { min: 6, max: 3 },
        // ParseIntError--create by parsing invalid integer
        ParseError::ParseIntError("not_a_number".parse::<usize>().unwrap_err()),
        ParseError::NomError(nom::error::ErrorKind::Alpha),
    ]
}

/// Helper to create all `SolverError` variants for documentation
fn all_solver_error_variants() -> Vec<SolverError> {
    vec![
        SolverError::ParseFailure(Box::new(ParseError::EmptyEquation)),
        SolverError::NoAddends,
        SolverError::InvalidWord { word: "Two".to_string() },
        SolverError::WordTooLong { word: "A".repeat(20), max: cryptarithm::solver::MAX_WORD_LEN },
    ]
}

/// Helper to create all `SampleError` variants for documentation
fn all_sample_error_variants() -> Vec<SampleError> {
    vec![
        SampleError::EmptyWordList,
        SampleError::InvalidWord { word: "café".to_string() },
        SampleError::Solver(SolverError::NoAddends),
    ]
}

fn write_docs<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n")?;

    writeln!(out, "## Table of Contents\n")?;
    writeln!(out, "- [Generator Errors (G001–G003)](#generator-errors)")?;
    writeln!(out, "- [Solver Errors (S001–S004)](#solver-errors)")?;
    writeln!(out, "- [Parse Errors (E001–E008)](#parse-errors)")?;
    writeln!(out, "- [How to Use Error Codes](#how-to-use-error-codes)\n")?;

    writeln!(out, "## Generator Errors\n")?;
    writeln!(out, "Errors from the random equation generator. These are raised before the first attempt.\n")?;
    generate_error_docs!(out, all_sample_error_variants());

    writeln!(out, "## Solver Errors\n")?;
    writeln!(out, "Errors from the solver. An equation without a solution is not an error.\n")?;
    generate_error_docs!(out, all_solver_error_variants());

    writeln!(out, "## Parse Errors\n")?;
    writeln!(out, "Errors that occur when parsing typed equations, mode names, or word-list settings.\n")?;
    generate_error_docs!(out, all_parse_error_variants());

    writeln!(out, "\n## How to Use Error Codes\n")?;
    writeln!(out, "When you see an error like:\n")?;
    writeln!(out, "```\nError: Missing '=' in equation \"TWO + TWO\" (E003)")?;
    writeln!(out, "Add the result after '=', e.g. 'TWO + TWO = FOUR'\n```\n")?;
    writeln!(out, "1. Note the error code (e.g., `E003`)")?;
    writeln!(out, "2. Look it up in this document for detailed explanation")?;
    writeln!(out, "3. Follow the suggested resolution steps")?;

    Ok(())
}

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_docs(&mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> String {
        let mut buf = Vec::new();
        write_docs(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_every_code_is_documented() {
        let text = docs();
        let codes = all_parse_error_variants()
            .iter()
            .map(ParseError::code)
            .chain(all_solver_error_variants().iter().map(SolverError::code))
            .chain(all_sample_error_variants().iter().map(SampleError::code))
            .collect::<Vec<_>>();

        assert_eq!(codes.len(), 15);
        for code in codes {
            assert!(text.contains(&format!("### {code}: ")), "missing section for {code}");
        }
    }

    #[test]
    fn test_sections_in_order() {
        let text = docs();
        let generator = text.find("## Generator Errors").unwrap();
        let solver = text.find("## Solver Errors").unwrap();
        let parse = text.find("## Parse Errors").unwrap();
        assert!(generator < solver && solver < parse);
    }
}
