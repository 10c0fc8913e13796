//! Random search for solvable `WORD + WORD = WORD` equations in a word list.
//!
//! Each attempt draws three words uniformly with replacement (two addends and a
//! result), throws the triple away if it obviously cannot work, and otherwise hands it
//! to [`crate::solver::solve`]. Duplicate triples are not remembered; drawing the same
//! triple twice costs two attempts and, in [`SampleMode::AllUnique`], yields it twice.
//!
//! # Examples
//!
//! ```
//! use cryptarithm::sampler::{Sampler, SampleMode, SampleOptions};
//! use rand::SeedableRng;
//!
//! let words = ["TOO", "FOUR"];
//! let options = SampleOptions { mode: SampleMode::FirstMatch, max_tries: 500, ..SampleOptions::default() };
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//!
//! let result = Sampler::new(&words, options).run(&mut rng)?;
//! for found in &result.found {
//!     println!("{}  ({})", found.expression, found.assignment);
//! }
//! # Ok::<(), cryptarithm::sampler::SampleError>(())
//! ```

use crate::assignment::Assignment;
use crate::letters::{is_valid_word, LetterMask, MAX_LETTERS};
use crate::errors::ParseError;
use crate::solver::{self, SolveOutcome, SolverError, DEFAULT_SOLUTION_CAP};
use instant::Instant;
use log::{debug, info};
use rand::Rng;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// The progress callback fires on every attempt number divisible by this.
pub const PROGRESS_INTERVAL: usize = 100;

/// Default number of attempts per run.
pub const DEFAULT_MAX_TRIES: usize = 1000;

/// When to stop and what counts as a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Stop at the first equation with any solution.
    #[default]
    FirstMatch,
    /// Use the whole budget; keep every equation with exactly one solution.
    AllUnique,
}

impl FromStr for SampleMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first-match" => Ok(SampleMode::FirstMatch),
            "all" | "all-unique" => Ok(SampleMode::AllUnique),
            _ => Err(ParseError::InvalidMode { mode: s.to_string() }),
        }
    }
}

impl fmt::Display for SampleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleMode::FirstMatch => write!(f, "first"),
            SampleMode::AllUnique => write!(f, "all"),
        }
    }
}

/// Knobs for one sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    pub mode: SampleMode,
    pub max_tries: usize,
    /// Passed through to the solver in [`SampleMode::AllUnique`].
    pub solution_cap: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            mode: SampleMode::FirstMatch,
            max_tries: DEFAULT_MAX_TRIES,
            solution_cap: DEFAULT_SOLUTION_CAP,
        }
    }
}

/// One solved equation: its text (`"A + B = C"`) and the digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub expression: String,
    pub assignment: Assignment,
}

/// Why a sampling run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStatus {
    /// `FirstMatch` found an equation before the budget ran out.
    FoundFirst,
    /// Every attempt was used.
    BudgetExhausted,
    /// The stop flag was raised; carries the attempts completed.
    Cancelled { attempts: usize },
}

/// Counters describing where a run's attempts went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleStats {
    pub attempts: usize,
    /// Result shorter than the longer addend, or a word too long for the solver.
    pub rejected_by_length: usize,
    /// More than [`MAX_LETTERS`] distinct letters.
    pub rejected_by_letters: usize,
    pub solver_calls: usize,
    pub no_solution: usize,
    pub ambiguous: usize,
    /// Permutation trials summed over all solver calls.
    pub trials: u64,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct SampleResult {
    pub found: Vec<Found>,
    pub status: SampleStatus,
    pub stats: SampleStats,
    pub elapsed: Duration,
}

impl SampleResult {
    /// Flatten to "some equations or nothing"; an empty run is `None`.
    #[must_use]
    pub fn into_found(self) -> Option<Vec<Found>> {
        if self.found.is_empty() {
            None
        } else {
            Some(self.found)
        }
    }
}

/// Problems with the sampler's input. Not finding anything is not an error.
#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("word list is empty")]
    EmptyWordList,

    #[error("invalid word \"{word}\" in word list (only A-Z allowed)")]
    InvalidWord { word: String },

    #[error("solver failure: {0}")]
    Solver(#[from] SolverError),
}

impl SampleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            SampleError::EmptyWordList => "G001",
            SampleError::InvalidWord { .. } => "G002",
            SampleError::Solver(_) => "G003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            SampleError::EmptyWordList => "The word list has no words",
            SampleError::InvalidWord { .. } => "A word in the word list is not made of A-Z",
            SampleError::Solver(_) => "The solver rejected a sampled equation",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            SampleError::EmptyWordList => "Sampling draws three words per attempt, so it needs at least one word. Check the length window used when loading the list.",
            SampleError::InvalidWord { .. } => "The sampler only accepts uppercase A-Z words. Loading a list through WordList uppercases and filters it.",
            SampleError::Solver(_) => "This wraps a SolverError (see Solver Errors section). Words the solver cannot take are filtered out per attempt, so reaching this means the solver and sampler disagree on what is solvable.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            SampleError::EmptyWordList => Some("Load a word list with words of 3-6 letters, or widen --min-len/--max-len"),
            SampleError::InvalidWord { .. } => Some("Load the list with WordList::parse_from_str, which filters and uppercases words"),
            SampleError::Solver(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            SampleError::Solver(se) => format!("{}\n  caused by: {}", self.code(), se.display_detailed()),
            _ => crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help()),
        }
    }
}

/// The cheap structural test run before any solving.
enum Prefilter {
    Pass,
    TooShort,
    TooLong,
    TooManyLetters,
}

fn prefilter(a: &str, b: &str, result: &str) -> Prefilter {
    if [a, b, result].iter().any(|w| w.len() > solver::MAX_WORD_LEN) {
        Prefilter::TooLong
    } else if result.len() < a.len().max(b.len()) {
        Prefilter::TooShort
    } else if LetterMask::of_words([a, b, result]).len() > MAX_LETTERS {
        Prefilter::TooManyLetters
    } else {
        Prefilter::Pass
    }
}

/// A configured sampling run over a borrowed word list.
pub struct Sampler<'a> {
    words: &'a [&'a str],
    options: SampleOptions,
    on_progress: Option<&'a mut dyn FnMut(usize)>,
    stop: Option<&'a AtomicBool>,
}

impl<'a> Sampler<'a> {
    #[must_use]
    pub fn new(words: &'a [&'a str], options: SampleOptions) -> Self {
        Sampler { words, options, on_progress: None, stop: None }
    }

    /// Called with attempt numbers 100, 200, ... Purely observational.
    #[must_use]
    pub fn with_progress(mut self, on_progress: &'a mut dyn FnMut(usize)) -> Self {
        self.on_progress = Some(on_progress);
        self
    }

    /// Checked before every attempt; once set, the run ends with [`SampleStatus::Cancelled`].
    #[must_use]
    pub fn with_stop_flag(mut self, stop: &'a AtomicBool) -> Self {
        self.stop = Some(stop);
        self
    }

    fn validate(&self) -> Result<(), SampleError> {
        if self.words.is_empty() {
            return Err(SampleError::EmptyWordList);
        }
        if let Some(bad) = self.words.iter().find(|w| !is_valid_word(w)) {
            return Err(SampleError::InvalidWord { word: (*bad).to_string() });
        }
        Ok(())
    }

    /// Run up to `max_tries` attempts.
    ///
    /// # Errors
    ///
    /// [`SampleError`] if the word list is empty or holds a non A-Z word. This is checked
    /// before the first attempt.
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<SampleResult, SampleError> {
        self.validate()?;

        let start = Instant::now();
        let uniqueness_required = self.options.mode == SampleMode::AllUnique;
        let n = self.words.len();
        let mut stats = SampleStats::default();
        let mut found = Vec::new();
        let mut status = SampleStatus::BudgetExhausted;

        for attempt in 1..=self.options.max_tries {
            if self.stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                status = SampleStatus::Cancelled { attempts: stats.attempts };
                break;
            }
            if attempt % PROGRESS_INTERVAL == 0 {
                if let Some(cb) = self.on_progress.as_mut() {
                    cb(attempt);
                }
            }
            stats.attempts += 1;

            let a = self.words[rng.random_range(0..n)];
            let b = self.words[rng.random_range(0..n)];
            let result = self.words[rng.random_range(0..n)];

            match prefilter(a, b, result) {
                Prefilter::TooShort | Prefilter::TooLong => {
                    stats.rejected_by_length += 1;
                    continue;
                }
                Prefilter::TooManyLetters => {
                    stats.rejected_by_letters += 1;
                    continue;
                }
                Prefilter::Pass => {}
            }

            stats.solver_calls += 1;
            let solved = solver::solve(&[a, b], result, uniqueness_required, self.options.solution_cap)?;
            stats.trials += solved.stats.trials;

            match solved.outcome {
                SolveOutcome::Found(assignment) => {
                    let expression = format!("{a} + {b} = {result}");
                    debug!("attempt {attempt}: {expression} ({assignment})");
                    found.push(Found { expression, assignment });
                    if self.options.mode == SampleMode::FirstMatch {
                        status = SampleStatus::FoundFirst;
                        break;
                    }
                }
                SolveOutcome::Ambiguous => stats.ambiguous += 1,
                SolveOutcome::NoSolution => stats.no_solution += 1,
                // the prefilter already caught these
                SolveOutcome::Infeasible { .. } => stats.rejected_by_letters += 1,
            }
        }

        let elapsed = start.elapsed();
        info!(
            "{} mode: {} found in {} attempts ({} solved, {} too short, {} too many letters) in {:.3}s",
            self.options.mode,
            found.len(),
            stats.attempts,
            stats.solver_calls,
            stats.rejected_by_length,
            stats.rejected_by_letters,
            elapsed.as_secs_f64()
        );

        Ok(SampleResult { found, status, stats, elapsed })
    }
}

/// Sample `word_list` for solvable equations.
///
/// Returns `None` when nothing was found: `FirstMatch` never hit, or `AllUnique` ran its
/// whole budget without a uniquely solvable equation.
///
/// # Errors
///
/// As [`Sampler::run`].
pub fn sample<R: Rng + ?Sized>(
    word_list: &[&str],
    mode: SampleMode,
    max_tries: usize,
    rng: &mut R,
    on_progress: Option<&mut dyn FnMut(usize)>,
) -> Result<Option<Vec<Found>>, SampleError> {
    let options = SampleOptions { mode, max_tries, ..SampleOptions::default() };
    let mut sampler = Sampler::new(word_list, options);
    if let Some(cb) = on_progress {
        sampler = sampler.with_progress(cb);
    }
    Ok(sampler.run(rng)?.into_found())
}
