//! Command-line surface and the load, compare, render pipeline behind it.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};

use crate::compare::{compare, Thresholds, DEFAULT_THRESHOLD_PCT, TIER1_THRESHOLD_PCT};
use crate::error::CompareError;
use crate::loader::load_results;
use crate::report::{format_ci_annotations, format_json, format_report};

/// Compare BMB benchmark results between baseline and current runs.
#[derive(Debug, Clone, Parser)]
#[command(name = "bench-compare", version, about)]
pub struct Cli {
    /// Path to baseline results JSON.
    pub baseline: PathBuf,

    /// Path to current results JSON.
    pub current: PathBuf,

    /// Default threshold percentage.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_THRESHOLD_PCT)]
    pub threshold: f64,

    /// Tier 1 threshold percentage.
    #[arg(long = "tier1-threshold", value_name = "N", default_value_t = TIER1_THRESHOLD_PCT)]
    pub tier1_threshold: f64,

    /// Fail on any Tier 1 regression.
    #[arg(long = "tier1-strict")]
    pub tier1_strict: bool,

    /// Also write the plaintext report to this file.
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output results in JSON format.
    #[arg(long)]
    pub json: bool,

    /// Emit GitHub Actions annotations after the report.
    #[arg(long)]
    pub ci: bool,
}

impl Cli {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.threshold, self.tier1_threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// A tier 1 regression was found under `--tier1-strict`.
    pub failed: bool,
}

/// Load both result files, compare them, and write the selected report to
/// `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<RunOutcome, CompareError> {
    let baseline = load_results(&cli.baseline)?;
    let current = load_results(&cli.current)?;
    let comparisons = compare(&baseline, &current, cli.thresholds());

    if cli.json {
        if cli.ci {
            warn!("--ci has no effect together with --json");
        }
        if cli.output.is_some() {
            warn!("--output has no effect together with --json");
        }
        writeln!(out, "{}", format_json(&comparisons)?)?;
        return Ok(RunOutcome { failed: false });
    }

    let report = format_report(&comparisons, cli.tier1_strict);
    info!(
        "{} comparisons: {} regressions, {} improvements, {} unchanged, {} missing",
        comparisons.len(),
        report.summary.regressions,
        report.summary.improvements,
        report.summary.unchanged,
        report.summary.missing
    );
    writeln!(out, "{}", report.text)?;

    if cli.ci {
        for annotation in format_ci_annotations(&comparisons, cli.tier1_strict) {
            writeln!(out, "{annotation}")?;
        }
    }

    if let Some(path) = &cli.output {
        write_report(path, &report.text)?;
        info!("report written to {}", path.display());
        writeln!(out, "\nReport written to: {}", path.display())?;
    }

    Ok(RunOutcome {
        failed: report.failed(),
    })
}

fn write_report(path: &Path, text: &str) -> Result<(), CompareError> {
    let mut file = File::create(path).map_err(|e| CompareError::write(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| CompareError::write(path, e))
}
