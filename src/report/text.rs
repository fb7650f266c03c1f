//! Tiered plaintext report.

use std::collections::BTreeMap;

use crate::compare::{Classification, Comparison};

use super::{format_percent, Summary};

const TITLE: &str = "BMB Benchmark Comparison Report";
const RULE_WIDTH: usize = 70;
const TABLE_WIDTH: usize = 65;

/// Overall result line at the bottom of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    /// Regressions were found, but none that fail the run.
    Warning,
    /// A tier 1 regression was found with strict mode on.
    Failed,
}

impl Verdict {
    fn line(self) -> &'static str {
        match self {
            Verdict::Passed => "RESULT: PASSED",
            Verdict::Warning => "RESULT: WARNING (Non-critical regressions detected)",
            Verdict::Failed => "RESULT: FAILED (Tier 1 regression detected)",
        }
    }
}

/// Rendered plaintext report with the counts it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct TextReport {
    pub text: String,
    pub summary: Summary,
    pub verdict: Verdict,
}

impl TextReport {
    /// Whether the run should exit with a failure status.
    pub fn failed(&self) -> bool {
        self.verdict == Verdict::Failed
    }
}

pub fn tier_label(tier: i64) -> String {
    match tier {
        0 => "Tier 0: Bootstrap".to_string(),
        1 => "Tier 1: Core Compute".to_string(),
        2 => "Tier 2: Contract Features".to_string(),
        3 => "Tier 3: Real World".to_string(),
        other => format!("Tier {other}"),
    }
}

pub fn format_report(comparisons: &[Comparison], tier1_strict: bool) -> TextReport {
    let mut tiers: BTreeMap<i64, Vec<&Comparison>> = BTreeMap::new();
    for comparison in comparisons {
        tiers.entry(comparison.tier).or_default().push(comparison);
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![rule.clone(), TITLE.to_string(), rule.clone(), String::new()];
    let mut summary = Summary::default();
    let mut failed = false;

    for (tier, mut rows) in tiers {
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        lines.push(format!("=== {} ===", tier_label(tier)));
        lines.push(String::new());
        lines.push(row("Benchmark", "Baseline", "Current", "Delta", "Status"));
        lines.push("-".repeat(TABLE_WIDTH));

        for c in rows {
            summary.record(c.classification);
            failed |= tier1_strict && c.is_strict_regression();

            let delta = c
                .delta_percent
                .map(format_percent)
                .unwrap_or_else(|| "N/A".to_string());
            lines.push(row(
                &c.name,
                &format_ms(c.baseline_ms),
                &format_ms(c.current_ms),
                &delta,
                status(c.classification),
            ));
        }
        lines.push(String::new());
    }

    let verdict = if failed {
        Verdict::Failed
    } else if summary.regressions > 0 {
        Verdict::Warning
    } else {
        Verdict::Passed
    };

    lines.push(rule.clone());
    lines.push("Summary".to_string());
    lines.push(rule);
    lines.push(format!("  Regressions:  {}", summary.regressions));
    lines.push(format!("  Improvements: {}", summary.improvements));
    lines.push(format!("  Unchanged:    {}", summary.unchanged));
    lines.push(format!("  Missing:      {}", summary.missing));
    lines.push(String::new());
    lines.push(verdict.line().to_string());

    TextReport {
        text: lines.join("\n"),
        summary,
        verdict,
    }
}

fn row(name: &str, baseline: &str, current: &str, delta: &str, status: &str) -> String {
    format!("{name:<20} {baseline:>10} {current:>10} {delta:>10} {status:>12}")
}

fn status(classification: Classification) -> &'static str {
    match classification {
        Classification::Regression => "REGRESSION",
        Classification::Improvement => "IMPROVED",
        Classification::Unchanged => "OK",
        Classification::Missing => "MISSING",
    }
}

/// Whole milliseconds, e.g. `103ms`.
fn format_ms(ms: Option<f64>) -> String {
    match ms {
        Some(ms) => format!("{ms:.0}ms"),
        None => "N/A".to_string(),
    }
}
