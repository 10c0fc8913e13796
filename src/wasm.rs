use crate::errors::ParseError;
use crate::letters::MAX_LETTERS;
use crate::log::init_logger;
use crate::sampler::{Found, SampleError, SampleMode, SampleOptions, SampleStatus, Sampler};
use crate::solver::{solve_str, SolveOutcome, SolverError, DEFAULT_SOLUTION_CAP};
use crate::word_list::WordList;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "S002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<&ParseError> for WasmError {
    fn from(pe: &ParseError) -> Self {
        WasmError {
            code: pe.code().to_string(),
            message: pe.to_string(),
            description: pe.description().to_string(),
            details: pe.details().to_string(),
            help: pe.help().map(|s| s.to_string()),
        }
    }
}

impl From<SolverError> for WasmError {
    fn from(e: SolverError) -> Self {
        // For ParseFailure, extract the nested ParseError details
        match &e {
            SolverError::ParseFailure(pe) => WasmError::from(pe.as_ref()),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<SampleError> for WasmError {
    fn from(e: SampleError) -> Self {
        match e {
            SampleError::Solver(se) => WasmError::from(se),
            _ => WasmError {
                code: e.code().to_string(),
                message: e.to_string(),
                description: e.description().to_string(),
                details: e.details().to_string(),
                help: e.help().map(|s| s.to_string()),
            },
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(code: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: code.to_string(),
        message: format!("serialization failed: {e}"),
        description: "Failed to serialize result".to_string(),
        details: "The result could not be converted to JavaScript format.".to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

/// Initialize logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmFound {
    expression: String,
    /// `[letter, digit]` pairs, alphabetical
    digits: Vec<(char, u8)>,
}

impl From<Found> for WasmFound {
    fn from(f: Found) -> Self {
        WasmFound { digits: f.assignment.iter().collect(), expression: f.expression }
    }
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    expression: String,
    /// "found" | "no_solution" | "ambiguous" | "infeasible"
    outcome: &'static str,
    digits: Vec<(char, u8)>,
    trials: u64,
}

/// JS entry: (input: string, unique: boolean) → `{ expression, outcome, digits, trials }`
#[wasm_bindgen]
pub fn solve_equation_wasm(input: &str, unique: bool) -> Result<JsValue, JsValue> {
    let (equation, solved) = solve_str(input, unique, DEFAULT_SOLUTION_CAP).map_err(WasmError::from)?;

    let (outcome, digits) = match solved.outcome {
        SolveOutcome::Found(a) => ("found", a.iter().collect()),
        SolveOutcome::NoSolution => ("no_solution", Vec::new()),
        SolveOutcome::Ambiguous => ("ambiguous", Vec::new()),
        SolveOutcome::Infeasible { letters } => {
            log::debug!("{letters} letters > {MAX_LETTERS}");
            ("infeasible", Vec::new())
        }
    };

    let result = WasmSolveResult {
        expression: equation.to_string(),
        outcome,
        digits,
        trials: solved.stats.trials,
    };
    to_value(&result).map_err(|e| serialization_error("WASM002", e))
}

#[derive(serde::Serialize)]
struct WasmGenerateResult {
    found: Vec<WasmFound>,
    /// "found_first" | "budget_exhausted" | "cancelled"
    status: &'static str,
    attempts: usize,
    elapsed_ms: f64,
}

/// JS entry: (words: string[], mode: "first" | "all", max_tries: number, on_progress?: (n) => void)
///
/// `on_progress` is called with attempt numbers 100, 200, ...
#[wasm_bindgen]
pub fn generate_wasm(
    words: JsValue,
    mode: &str,
    max_tries: usize,
    on_progress: Option<js_sys::Function>,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        details: "The words parameter must be a JavaScript array of strings.".to_string(),
        help: Some("Pass the array returned by parse_word_list".to_string()),
    })?;
    let refs: Vec<&str> = words.iter().map(String::as_str).collect();

    let mode: SampleMode = mode.parse().map_err(|e: ParseError| WasmError::from(&e))?;
    let options = SampleOptions { mode, max_tries, solution_cap: DEFAULT_SOLUTION_CAP };

    // Math.random is all the entropy we need for picking words
    let mut rng = StdRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64);

    let mut report_progress = |attempt: usize| {
        if let Some(cb) = &on_progress {
            // a throwing callback must not abort the search
            let _ = cb.call1(&JsValue::NULL, &JsValue::from(attempt as u32));
        }
    };

    let result = Sampler::new(&refs, options)
        .with_progress(&mut report_progress)
        .run(&mut rng)
        .map_err(WasmError::from)?;

    let status = match result.status {
        SampleStatus::FoundFirst => "found_first",
        SampleStatus::BudgetExhausted => "budget_exhausted",
        SampleStatus::Cancelled { .. } => "cancelled",
    };

    let wasm_result = WasmGenerateResult {
        status,
        attempts: result.stats.attempts,
        elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
        found: result.found.into_iter().map(WasmFound::from).collect(),
    };
    to_value(&wasm_result).map_err(|e| serialization_error("WASM002", e))
}

/// Parse a newline-separated word list into uppercase words of `min_len..=max_len`
/// letters, returned as a JS string array.
///
/// # Errors
/// Returns a `JsValue` error if the bounds contradict each other or serialization fails.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_len: usize, max_len: usize) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_len, max_len)
        .map_err(|e| WasmError::from(e.as_ref()))?;
    to_value(&word_list.words).map_err(|e| serialization_error("WASM003", e))
}
