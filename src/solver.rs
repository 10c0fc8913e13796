//! The exhaustive solver for a single cryptarithm.
//!
//! Given addend words and a result word, we try every injective letter → digit
//! assignment (k-permutations of 0..=9, k = distinct letters) and keep those where the
//! addends sum to the result and no word starts with a zero.
//!
//! # Error Handling
//!
//! The solver uses [`SolverError`] for malformed input only:
//!
//! - S001: `ParseFailure` (Equation text could not be parsed (wraps [`ParseError`]))
//! - S002: `NoAddends` (Equation has a result but nothing to add)
//! - S003: `InvalidWord` (A word is empty or not made of A-Z)
//! - S004: `WordTooLong` (A word has more digits than fit in 64 bits)
//!
//! A search that comes up empty is not an error; it is a [`SolveOutcome`].
//!
//! # Examples
//!
//! ```
//! use cryptarithm::solver::{self, SolveOutcome, DEFAULT_SOLUTION_CAP};
//!
//! let solved = solver::solve(&["SEND", "MORE"], "MONEY", true, DEFAULT_SOLUTION_CAP)?;
//! match solved.outcome {
//!     SolveOutcome::Found(assignment) => println!("{assignment}"),
//!     other => println!("no unique solution: {other}"),
//! }
//! # Ok::<(), cryptarithm::solver::SolverError>(())
//! ```

use crate::assignment::Assignment;
use crate::equation::Equation;
use crate::errors::ParseError;
use crate::letters::{is_valid_word, LetterMask, MAX_LETTERS};
use log::debug;
use std::fmt;
use std::ops::ControlFlow;

/// How many accepted assignments we look for before calling an equation ambiguous.
pub const DEFAULT_SOLUTION_CAP: usize = 2;

/// Longest word whose value always fits (with room for a sum) in 64 bits.
pub const MAX_WORD_LEN: usize = 18;

/// What the search concluded about an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// More distinct letters than digits; nothing was searched.
    Infeasible { letters: usize },

    /// Every permutation was tried and none balanced.
    NoSolution,

    /// Uniqueness was required and at least two assignments balance.
    Ambiguous,

    /// The accepted assignment (the first found, or the only one in uniqueness mode).
    Found(Assignment),
}

impl SolveOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, SolveOutcome::Found(_))
    }

    /// Flatten to "assignment or nothing".
    #[must_use]
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveOutcome::Found(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Display for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveOutcome::Infeasible { letters } => {
                write!(f, "infeasible ({letters} distinct letters > {MAX_LETTERS})")
            }
            SolveOutcome::NoSolution => write!(f, "no solution"),
            SolveOutcome::Ambiguous => write!(f, "more than one solution"),
            SolveOutcome::Found(a) => write!(f, "solved: {a}"),
        }
    }
}

/// Counters from one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Complete assignments whose arithmetic was checked.
    pub trials: u64,
    /// Accepted assignments seen before the search stopped.
    pub solutions_seen: usize,
}

/// Outcome plus counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub outcome: SolveOutcome,
    pub stats: SolveStats,
}

/// Unified error type for malformed solver input.
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    /// Failure during parsing of the equation string.
    #[error("parse failure: {0}")]
    ParseFailure(#[from] Box<ParseError>),

    #[error("equation has no addends")]
    NoAddends,

    #[error("invalid word \"{word}\" (only A-Z allowed)")]
    InvalidWord { word: String },

    #[error("word \"{word}\" is longer than {max} letters")]
    WordTooLong { word: String, max: usize },
}

impl SolverError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "S001",
            SolverError::NoAddends => "S002",
            SolverError::InvalidWord { .. } => "S003",
            SolverError::WordTooLong { .. } => "S004",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "Equation parsing failed",
            SolverError::NoAddends => "Equation has a result but nothing to add",
            SolverError::InvalidWord { .. } => "A word is empty or not made of A-Z",
            SolverError::WordTooLong { .. } => "A word has more digits than fit in 64 bits",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SolverError::ParseFailure(_) => "The input equation could not be parsed. This wraps an underlying ParseError (see Parse Errors section for specific error codes).",
            SolverError::NoAddends => "The solver was called with an empty list of addends. At least one word must appear on the left of '='.",
            SolverError::InvalidWord { .. } => "Every word handed to the solver must be non-empty and consist of the uppercase letters A-Z. Word lists are uppercased and filtered when loaded.",
            SolverError::WordTooLong { .. } => "Word values are computed in 64-bit integers, which bounds the number of letters per word.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SolverError::NoAddends => Some("Add at least one word before '=', e.g. 'TWO + TWO = FOUR'"),
            SolverError::InvalidWord { .. } => Some("Remove digits, punctuation and accented letters from the word"),
            SolverError::WordTooLong { .. } => Some("Use shorter words"),
            SolverError::ParseFailure(_) => None, // ParseError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SolverError::ParseFailure(pe) => {
                // delegate to ParseError's detailed display
                format!("{}\n  caused by: {}", self.code(), pe.display_detailed())
            }
            _ => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// One letter of the equation as the search sees it.
///
/// `weight` is the letter's net place value: `Σ 10^pos` over its occurrences in the
/// addends minus the same over the result. An assignment balances exactly when
/// `Σ weight * digit == 0`.
#[derive(Debug, Clone, Copy)]
struct LetterSetup {
    letter: char,
    leading: bool,
    weight: i128,
}

fn place_value_weight(word: &str, letter: char) -> i128 {
    word.chars()
        .rev()
        .fold((0i128, 1i128), |(sum, place), c| {
            (if c == letter { sum + place } else { sum }, place * 10)
        })
        .0
}

fn letter_setups(addends: &[&str], result: &str, letters: LetterMask) -> Vec<LetterSetup> {
    let leading = LetterMask::leading_of(addends.iter().copied().chain(std::iter::once(result)));
    letters
        .letters()
        .map(|letter| {
            let added: i128 = addends.iter().map(|w| place_value_weight(w, letter)).sum();
            LetterSetup {
                letter,
                leading: leading.contains(letter),
                weight: added - place_value_weight(result, letter),
            }
        })
        .collect()
}

/// Mutable state of one depth-first walk over digit permutations.
struct Search<'a> {
    setups: &'a [LetterSetup],
    digits: [u8; MAX_LETTERS],
    used: u16,
    uniqueness_required: bool,
    solution_cap: usize,
    solutions: Vec<Assignment>,
    trials: u64,
}

impl Search<'_> {
    fn assignment(&self) -> Assignment {
        self.setups
            .iter()
            .zip(self.digits.iter())
            .map(|(s, &d)| (s.letter, d))
            .collect()
    }

    /// Assign a digit to `setups[depth]`, in increasing digit order, and recurse.
    ///
    /// Visits k-permutations of 0..=9 in lexicographic order. Leading letters never
    /// receive 0; the branch is cut as soon as that digit would be placed.
    fn descend(&mut self, depth: usize, partial: i128) -> ControlFlow<()> {
        let Some(setup) = self.setups.get(depth).copied() else {
            self.trials += 1;
            if partial == 0 {
                self.solutions.push(self.assignment());
                if !self.uniqueness_required || self.solutions.len() >= self.solution_cap {
                    return ControlFlow::Break(());
                }
            }
            return ControlFlow::Continue(());
        };

        for digit in 0..10u8 {
            if self.used & (1 << digit) != 0 || (digit == 0 && setup.leading) {
                continue;
            }
            self.used |= 1 << digit;
            self.digits[depth] = digit;
            let flow = self.descend(depth + 1, partial + setup.weight * i128::from(digit));
            self.used &= !(1 << digit);
            flow?;
        }

        ControlFlow::Continue(())
    }
}

fn validate(addends: &[&str], result: &str) -> Result<(), SolverError> {
    if addends.is_empty() {
        return Err(SolverError::NoAddends);
    }
    for &word in addends.iter().chain(std::iter::once(&result)) {
        if !is_valid_word(word) {
            return Err(SolverError::InvalidWord { word: word.to_string() });
        }
        if word.len() > MAX_WORD_LEN {
            return Err(SolverError::WordTooLong { word: word.to_string(), max: MAX_WORD_LEN });
        }
    }
    Ok(())
}

/// Search letter → digit assignments for `addends[0] + addends[1] + ... = result`.
///
/// - More than [`MAX_LETTERS`] distinct letters: [`SolveOutcome::Infeasible`], zero trials.
/// - `uniqueness_required == false`: the first balancing assignment in enumeration order
///   (letters alphabetically, digits ascending).
/// - `uniqueness_required == true`: searches on; finding `solution_cap` assignments, or
///   more than one by the end, gives [`SolveOutcome::Ambiguous`]. A cap below 2 is raised
///   to 2 since a single solution cannot be ambiguous.
///
/// # Errors
///
/// [`SolverError`] if there are no addends, or a word is not made of A-Z or is longer
/// than [`MAX_WORD_LEN`].
pub fn solve(
    addends: &[&str],
    result: &str,
    uniqueness_required: bool,
    solution_cap: usize,
) -> Result<SolveResult, SolverError> {
    validate(addends, result)?;

    let letters = LetterMask::of_words(addends.iter().copied().chain(std::iter::once(result)));
    if letters.len() > MAX_LETTERS {
        debug!("{} + ... = {result}: {} letters, skipping search", addends[0], letters.len());
        return Ok(SolveResult {
            outcome: SolveOutcome::Infeasible { letters: letters.len() },
            stats: SolveStats::default(),
        });
    }

    let setups = letter_setups(addends, result, letters);
    let mut search = Search {
        setups: &setups,
        digits: [0; MAX_LETTERS],
        used: 0,
        uniqueness_required,
        solution_cap: solution_cap.max(2),
        solutions: Vec::with_capacity(2),
        trials: 0,
    };
    // Break only means "stop early"; the verdict comes from what was collected
    let _ = search.descend(0, 0);

    let stats = SolveStats { trials: search.trials, solutions_seen: search.solutions.len() };
    let mut solutions = search.solutions;
    let outcome = match solutions.len() {
        0 => SolveOutcome::NoSolution,
        1 => SolveOutcome::Found(solutions.remove(0)),
        _ if uniqueness_required => SolveOutcome::Ambiguous,
        // only reachable with uniqueness off, where we stop at the first
        _ => SolveOutcome::Found(solutions.remove(0)),
    };

    debug!(
        "{} = {result} letters={letters} trials={} -> {outcome}",
        addends.join(" + "),
        stats.trials
    );

    Ok(SolveResult { outcome, stats })
}

/// [`solve`] for an already-built [`Equation`].
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_equation(
    equation: &Equation,
    uniqueness_required: bool,
    solution_cap: usize,
) -> Result<SolveResult, SolverError> {
    let addends: Vec<&str> = equation.addends().iter().map(String::as_str).collect();
    solve(&addends, equation.result(), uniqueness_required, solution_cap)
}

/// Parse `input` (e.g. `"SEND + MORE = MONEY"`) and solve it.
///
/// # Errors
///
/// [`SolverError::ParseFailure`] for malformed text, otherwise as [`solve`].
pub fn solve_str(
    input: &str,
    uniqueness_required: bool,
    solution_cap: usize,
) -> Result<(Equation, SolveResult), SolverError> {
    let equation = input.parse::<Equation>()?;
    let solved = solve_equation(&equation, uniqueness_required, solution_cap)?;
    Ok((equation, solved))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(result: SolveResult) -> Assignment {
        match result.outcome {
            SolveOutcome::Found(a) => a,
            other => panic!("expected a solution, got {other}"),
        }
    }

    #[test]
    fn test_place_value_weight() {
        assert_eq!(place_value_weight("TWO", 'T'), 100);
        assert_eq!(place_value_weight("TOOT", 'T'), 1001);
        assert_eq!(place_value_weight("TWO", 'X'), 0);
    }

    #[test]
    fn test_letter_setups_net_weights() {
        let letters = LetterMask::of_words(["A", "A", "B"]);
        let setups = letter_setups(&["A", "A"], "B", letters);
        assert_eq!(setups.len(), 2);
        assert_eq!((setups[0].letter, setups[0].weight, setups[0].leading), ('A', 2, true));
        assert_eq!((setups[1].letter, setups[1].weight, setups[1].leading), ('B', -1, true));
    }

    #[test]
    fn test_two_plus_two_first_match() {
        let a = found(solve(&["TWO", "TWO"], "FOUR", false, DEFAULT_SOLUTION_CAP).unwrap());
        // first in (F, O, R, T, U, W) lexicographic digit order
        let expected: Assignment =
            [('F', 1), ('O', 4), ('R', 8), ('T', 7), ('U', 6), ('W', 3)].into_iter().collect();
        assert_eq!(a, expected);
        assert_eq!(a.word_value("TWO"), Some(734));
        assert_eq!(a.word_value("FOUR"), Some(1468));
        assert!(a.satisfies(&["TWO", "TWO"], "FOUR"));
    }

    #[test]
    fn test_two_plus_two_is_not_unique() {
        let result = solve(&["TWO", "TWO"], "FOUR", true, DEFAULT_SOLUTION_CAP).unwrap();
        assert_eq!(result.outcome, SolveOutcome::Ambiguous);
        assert_eq!(result.stats.solutions_seen, 2);
    }

    #[test]
    fn test_single_letter_words() {
        let a = found(solve(&["A", "A"], "B", false, DEFAULT_SOLUTION_CAP).unwrap());
        assert_eq!((a.get('A'), a.get('B')), (Some(1), Some(2)));
    }

    #[test]
    fn test_exactly_two_solutions_is_ambiguous() {
        // ODD + ODD = EVEN: 655 + 655 = 1310 and 855 + 855 = 1710
        let result = solve(&["ODD", "ODD"], "EVEN", true, DEFAULT_SOLUTION_CAP).unwrap();
        assert_eq!(result.outcome, SolveOutcome::Ambiguous);

        // with a larger cap we exhaust the space and still see exactly two
        let result = solve(&["ODD", "ODD"], "EVEN", true, 5).unwrap();
        assert_eq!(result.outcome, SolveOutcome::Ambiguous);
        assert_eq!(result.stats.solutions_seen, 2);
    }

    #[test]
    fn test_unique_solution_is_returned() {
        // TO + GO = OUT has the single solution 21 + 81 = 102
        let a = found(solve(&["TO", "GO"], "OUT", true, DEFAULT_SOLUTION_CAP).unwrap());
        let expected: Assignment = [('G', 8), ('O', 1), ('T', 2), ('U', 0)].into_iter().collect();
        assert_eq!(a, expected);
    }

    #[test]
    fn test_unique_search_is_exhaustive() {
        // 4 letters, leading T, G, O: every permutation that survives the
        // leading-zero cut is checked
        let result = solve(&["TO", "GO"], "OUT", true, DEFAULT_SOLUTION_CAP).unwrap();
        assert!(result.outcome.is_found());
        // P(10,4) = 5040 minus assignments with a zero on T, G or O (3 * 504)
        assert_eq!(result.stats.trials, 5040 - 3 * 504);
    }

    #[test]
    fn test_send_more_money() {
        let a = found(solve(&["SEND", "MORE"], "MONEY", true, DEFAULT_SOLUTION_CAP).unwrap());
        assert_eq!(a.word_value("SEND"), Some(9567));
        assert_eq!(a.word_value("MORE"), Some(1085));
        assert_eq!(a.word_value("MONEY"), Some(10652));
    }

    #[test]
    fn test_no_solution() {
        // A + B = CA would need B to be a multiple of ten
        let result = solve(&["A", "B"], "CA", false, DEFAULT_SOLUTION_CAP).unwrap();
        assert_eq!(result.outcome, SolveOutcome::NoSolution);
        assert!(result.stats.trials > 0);
        assert_eq!(result.outcome.into_assignment(), None);
    }

    #[test]
    fn test_more_than_ten_letters_is_infeasible_without_trials() {
        let result = solve(&["ABCDEF", "GHIJK"], "LMN", false, DEFAULT_SOLUTION_CAP).unwrap();
        assert_eq!(result.outcome, SolveOutcome::Infeasible { letters: 14 });
        assert_eq!(result.stats.trials, 0);
    }

    #[test]
    fn test_repeated_letters_within_a_word() {
        // AA + B = BCC: 99 + 1 = 100
        let a = found(solve(&["AA", "B"], "BCC", true, DEFAULT_SOLUTION_CAP).unwrap());
        assert_eq!(a.to_string(), "A=9 B=1 C=0");
    }

    #[test]
    fn test_cap_below_two_still_detects_uniqueness() {
        let a = found(solve(&["TO", "GO"], "OUT", true, 1).unwrap());
        assert_eq!(a.get('O'), Some(1));
    }

    #[test]
    fn test_invalid_input() {
        assert!(matches!(solve(&[], "A", false, 2), Err(SolverError::NoAddends)));
        assert!(matches!(solve(&["ab"], "C", false, 2), Err(SolverError::InvalidWord { .. })));
        assert!(matches!(solve(&["A"], "", false, 2), Err(SolverError::InvalidWord { .. })));
        let long = "A".repeat(MAX_WORD_LEN + 1);
        assert!(matches!(solve(&[long.as_str()], "B", false, 2), Err(SolverError::WordTooLong { .. })));
    }

    #[test]
    fn test_solve_str() {
        let (eq, solved) = solve_str("to + go = out", true, DEFAULT_SOLUTION_CAP).unwrap();
        assert_eq!(eq.to_string(), "TO + GO = OUT");
        assert!(solved.outcome.is_found());

        let err = solve_str("TO + GO", true, DEFAULT_SOLUTION_CAP).unwrap_err();
        assert_eq!(err.code(), "S001");
        assert!(err.display_detailed().contains("E003"));
    }

    #[test]
    fn test_solver_error_codes_are_unique() {
        let errors = [
            SolverError::ParseFailure(Box::new(ParseError::EmptyEquation)),
            SolverError::NoAddends,
            SolverError::InvalidWord { word: "x".to_string() },
            SolverError::WordTooLong { word: "X".to_string(), max: 18 },
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(SolverError::code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| !e.details().is_empty()));
    }
}
