//! Baseline vs. current comparison of BMB benchmark results.
//!
//! Loads two result files, joins them by `(tier, name)`, classifies each
//! percent delta against per-tier thresholds, and renders the outcome as a
//! plaintext report, a JSON document, or GitHub Actions annotations.
//!
//! Run with `cargo run --bin bench-compare -- <baseline.json> <current.json>`.

pub mod cli;
pub mod compare;
pub mod error;
pub mod loader;
pub mod report;
pub mod schema;

pub use crate::compare::{compare, Classification, Comparison, Thresholds};
pub use crate::error::CompareError;
pub use crate::loader::{load_results, parse_results};
pub use crate::schema::{BenchmarkRecord, BenchmarkReport};
