//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of the solver on a handful of fixed equations.
//! - Each equation is solved in uniqueness mode (the expensive, exhaustive path)
//!   several times and the median is reported.
//! - Optionally times a seeded sampling run over a word list as well.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Include a sampling run:         `cargo run --bin bench_local --release -- -w words.txt`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - One warm-up run per equation is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;
use std::time::Instant;
use cryptarithm::sampler::{SampleMode, SampleOptions, Sampler};
use cryptarithm::solver::{self, DEFAULT_SOLUTION_CAP};
use cryptarithm::word_list::{WordList, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};

/// Simple local benchmark runner for the cryptarithm solver.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per equation (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Optional word list for an extra seeded sampling run
    #[arg(short, long)]
    word_list: Option<String>,

    /// Attempts for the sampling run
    #[arg(short = 'n', long, default_value_t = 2000)]
    max_tries: usize,
}

/// Equations worth timing: unique, ambiguous, unsolvable and the 10-letter worst case.
const CASES: &[&str] = &[
    "SEND + MORE = MONEY",
    "TWO + TWO = FOUR",
    "ODD + ODD = EVEN",
    "A + B = CA",
    "CROSS + ROADS = DANGER",
    "ABCDE + FGHIJ = JIHGFE",
];

const MAX_EQUATION_LEN: usize = 28;

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut summary: Vec<(String, f64, String)> = Vec::with_capacity(CASES.len() + 1);

    for (idx, equation) in CASES.iter().enumerate() {
        eprintln!("\n[{:02}] {}", idx + 1, equation);

        // warm-up, untimed
        let warmup = solver::solve_str(equation, true, DEFAULT_SOLUTION_CAP)?;
        let outcome = warmup.1.outcome.to_string();

        let mut times = Vec::with_capacity(cli.num_repeats);
        for rep in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let (_, solved) = solver::solve_str(black_box(equation), true, DEFAULT_SOLUTION_CAP)?;
            let solve_secs = t_solve.elapsed().as_secs_f64();
            let _keep = black_box(solved.stats.trials);
            times.push(solve_secs);
            eprintln!("  run {:>2}/{:>2}: {:.3}s ({} trials)", rep + 1, cli.num_repeats, solve_secs, solved.stats.trials);
        }

        let med = median(times);
        eprintln!("  → median {med:.3}s; {outcome}");
        summary.push((equation.to_string(), med, outcome));
    }

    if let Some(path) = &cli.word_list {
        let wl = WordList::load_from_path(path, DEFAULT_MIN_LEN, DEFAULT_MAX_LEN)?;
        let words = wl.as_strs();
        eprintln!("\nSampling {} tries over {} words", cli.max_tries, words.len());

        let options = SampleOptions { mode: SampleMode::AllUnique, max_tries: cli.max_tries, ..SampleOptions::default() };
        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut kept = 0;
        for _ in 0..cli.num_repeats {
            // same seed each repeat so every run does identical work
            let mut rng = StdRng::seed_from_u64(0);
            let result = Sampler::new(&words, options).run(&mut rng)?;
            times.push(result.elapsed.as_secs_f64());
            kept = result.found.len();
        }
        summary.push((format!("sample x{}", cli.max_tries), median(times), format!("{kept} kept")));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_EQUATION_LEN$} | {:>10} | result", "equation", "median (s)");
    eprintln!("{:-<MAX_EQUATION_LEN$}-+-{:-<10}-+-{:-<20}", "", "", "");
    for (equation, med, outcome) in &summary {
        eprintln!("{equation:<MAX_EQUATION_LEN$} | {med:>10.3} | {outcome}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_cases_parse() {
        for case in CASES {
            assert!(case.parse::<cryptarithm::equation::Equation>().is_ok(), "{case}");
        }
    }
}
