//! Benchmark comparison tool.
//!
//! Compares two JSON result files and reports per-benchmark regressions.
//!
//! Usage: `cargo run --bin bench-compare -- <baseline.json> <current.json> [options]`
//!
//! Exits with status 1 when an input cannot be read or parsed, or when a tier 1
//! regression is found under `--tier1-strict`.

use std::io;
use std::process::ExitCode;

use bmb_bench_compare::cli::{run, Cli};
use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match run(&cli, &mut stdout) {
        Ok(outcome) if outcome.failed => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
