//! Linear scans over words and integer sequences.

pub mod increasing;
pub mod vowels;

pub use increasing::{increasing_run_json, max_increasing_run};
pub use vowels::{longest_vowel_runs, vowel_runs_json, VowelRun};
