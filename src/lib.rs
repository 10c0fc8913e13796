// Reusable library API: visible to both CLI and WASM builds
pub mod assignment;
pub mod equation;
pub mod errors;
pub mod letters;
pub mod log;
pub mod report;
pub mod sampler;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;
