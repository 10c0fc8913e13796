use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use cryptarithm::report;
use cryptarithm::sampler::{self, SampleMode, SampleOptions, SampleStatus, Sampler};
use cryptarithm::solver::{self, SolveOutcome, DEFAULT_SOLUTION_CAP};
use cryptarithm::word_list::{WordList, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};

/// Cryptarithm generator and solver
#[derive(Parser, Debug)]
#[command(author, version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// Enable debug logging (also enabled by CRYPTARITHM_DEBUG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw random word triples and look for solvable WORD + WORD = WORD equations
    Generate {
        /// Path to the word list (one word per line)
        #[arg(short, long)]
        word_list: PathBuf,

        /// Search mode: "first" stops at the first solvable equation,
        /// "all" keeps every uniquely solvable one
        #[arg(short, long, default_value_t = SampleMode::FirstMatch)]
        mode: SampleMode,

        /// Number of word triples to try
        #[arg(short = 'n', long, default_value_t = sampler::DEFAULT_MAX_TRIES)]
        max_tries: usize,

        /// Shortest word to load
        #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
        min_len: usize,

        /// Longest word to load
        #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
        max_len: usize,

        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Also write the report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve a single equation such as "SEND + MORE = MONEY"
    Solve {
        /// The equation to solve
        equation: String,

        /// Only accept the equation if it has exactly one solution
        #[arg(short, long)]
        unique: bool,
    },
}

/// Entry point of the cryptarithm CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    cryptarithm::log::init_logger(cli.debug);

    if let Err(e) = try_main(cli) {
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else if let Some(sample_err) = e.downcast_ref::<sampler::SampleError>() {
            eprintln!("Error: {}", sample_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Generate { word_list, mode, max_tries, min_len, max_len, seed, output } => {
            let options = SampleOptions { mode, max_tries, solution_cap: DEFAULT_SOLUTION_CAP };
            generate(&word_list, options, min_len, max_len, seed, output.as_deref())
        }
        Command::Solve { equation, unique } => solve(&equation, unique),
    }
}

/// 1. Load the word list.
/// 2. Sample it, printing progress to stderr.
/// 3. Print the report on stdout (and optionally save it).
/// 4. Print a summary on stderr.
fn generate(
    path: &std::path::Path,
    options: SampleOptions,
    min_len: usize,
    max_len: usize,
    seed: Option<u64>,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(path, min_len, max_len)?;
    log::info!(
        "Loaded {} words ({}-{} letters) in {:.3}s",
        word_list.len(),
        min_len,
        max_len,
        t_load.elapsed().as_secs_f64()
    );

    let words = word_list.as_strs();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let max_tries = options.max_tries;
    let mut on_progress = |attempt: usize| eprint!("\rAttempt {attempt}/{max_tries}");

    let result = Sampler::new(&words, options)
        .with_progress(&mut on_progress)
        .run(&mut rng)?;
    if max_tries >= sampler::PROGRESS_INTERVAL {
        eprintln!();
    }

    let found_count = result.found.len();
    let status = result.status;
    let elapsed = result.elapsed;

    match result.into_found() {
        Some(found) => {
            println!("Found {} cryptarithm(s)\n", found.len());
            print!("{}", report::report_to_string(&found));
            if let Some(out_path) = output {
                report::save_to_path(out_path, &found)?;
                eprintln!("Report saved to {}", out_path.display());
            }
        }
        None => println!("No cryptarithm found"),
    }

    match status {
        SampleStatus::FoundFirst => eprintln!("✓ Stopped at the first solvable equation"),
        SampleStatus::BudgetExhausted => eprintln!("✓ Tried all {max_tries} triples ({found_count} kept)"),
        SampleStatus::Cancelled { attempts } => eprintln!("⚠️  Cancelled after {attempts} attempts"),
    }
    eprintln!("Generation time: {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

fn solve(input: &str, unique: bool) -> Result<(), Box<dyn std::error::Error>> {
    let t_solve = Instant::now();
    let (equation, solved) = solver::solve_str(input, unique, DEFAULT_SOLUTION_CAP)?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    match solved.outcome {
        SolveOutcome::Found(assignment) => {
            let found = sampler::Found { expression: equation.to_string(), assignment };
            print!("{}", report::report_to_string(std::slice::from_ref(&found)));
        }
        other => println!("{equation}: {other}"),
    }

    eprintln!("Checked {} assignments in {:.3}s", solved.stats.trials, solve_secs);
    Ok(())
}
