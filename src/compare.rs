//! Joining baseline and current results and classifying the deltas.

use std::collections::{BTreeSet, HashMap};

use log::debug;
use serde::Serialize;

use crate::schema::BenchmarkRecord;

/// Percent threshold applied to every tier except the strict one.
pub const DEFAULT_THRESHOLD_PCT: f64 = 5.0;
/// Percent threshold applied to [`STRICT_TIER`].
pub const TIER1_THRESHOLD_PCT: f64 = 2.0;
/// Core-compute tier. Gets the tighter threshold and can fail a run.
pub const STRICT_TIER: i64 = 1;

/// Per-tier regression thresholds, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub default: f64,
    pub tier1: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            default: DEFAULT_THRESHOLD_PCT,
            tier1: TIER1_THRESHOLD_PCT,
        }
    }
}

impl Thresholds {
    pub fn new(default: f64, tier1: f64) -> Self {
        Self { default, tier1 }
    }

    pub fn for_tier(&self, tier: i64) -> f64 {
        if tier == STRICT_TIER {
            self.tier1
        } else {
            self.default
        }
    }
}

/// Outcome of comparing one benchmark across the two runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Slower than baseline by more than the threshold.
    Regression,
    /// Faster than baseline by more than the threshold.
    Improvement,
    Unchanged,
    /// No delta could be computed.
    Missing,
}

impl Classification {
    /// Classify a percent delta. Both bounds are strict, so a delta of exactly
    /// `threshold` is unchanged.
    pub fn classify(delta_percent: Option<f64>, threshold: f64) -> Self {
        match delta_percent {
            None => Classification::Missing,
            Some(pct) if pct > threshold => Classification::Regression,
            Some(pct) if pct < -threshold => Classification::Improvement,
            Some(_) => Classification::Unchanged,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Regression => "regression",
            Classification::Improvement => "improvement",
            Classification::Unchanged => "unchanged",
            Classification::Missing => "missing",
        }
    }
}

/// One `(tier, name)` key joined across baseline and current.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub tier: i64,
    pub name: String,
    pub baseline_ms: Option<f64>,
    pub current_ms: Option<f64>,
    /// `current_ms - baseline_ms`, only when both are present and the
    /// baseline is positive.
    pub delta_ms: Option<f64>,
    pub delta_percent: Option<f64>,
    pub threshold: f64,
    pub classification: Classification,
}

impl Comparison {
    pub fn is_regression(&self) -> bool {
        self.classification == Classification::Regression
    }

    pub fn is_improvement(&self) -> bool {
        self.classification == Classification::Improvement
    }

    pub fn is_missing(&self) -> bool {
        self.classification == Classification::Missing
    }

    /// Regression in the strict tier, which fails the run under strict mode.
    pub fn is_strict_regression(&self) -> bool {
        self.tier == STRICT_TIER && self.is_regression()
    }
}

/// Compare two result sets.
///
/// Output is ordered by tier, then by name. When a run contains the same key
/// more than once, its last entry is used.
pub fn compare(
    baseline: &[BenchmarkRecord],
    current: &[BenchmarkRecord],
    thresholds: Thresholds,
) -> Vec<Comparison> {
    let base_map = index(baseline);
    let curr_map = index(current);

    let keys: BTreeSet<(i64, &str)> = base_map.keys().chain(curr_map.keys()).copied().collect();

    keys.into_iter()
        .map(|key| {
            let baseline_ms = base_map.get(&key).and_then(|r| measured(r));
            let current_ms = curr_map.get(&key).and_then(|r| measured(r));
            let comparison = join(key, baseline_ms, current_ms, thresholds);
            debug!(
                "tier {} {}: {}",
                comparison.tier,
                comparison.name,
                comparison.classification.as_str()
            );
            comparison
        })
        .collect()
}

fn index(records: &[BenchmarkRecord]) -> HashMap<(i64, &str), &BenchmarkRecord> {
    records.iter().map(|r| (r.key(), r)).collect()
}

/// A zero measurement counts as not measured.
fn measured(record: &BenchmarkRecord) -> Option<f64> {
    record.value_ms().filter(|ms| *ms != 0.0)
}

fn join(
    (tier, name): (i64, &str),
    baseline_ms: Option<f64>,
    current_ms: Option<f64>,
    thresholds: Thresholds,
) -> Comparison {
    let threshold = thresholds.for_tier(tier);

    let (delta_ms, delta_percent) = match (baseline_ms, current_ms) {
        (Some(base), Some(curr)) if base > 0.0 => {
            let delta = curr - base;
            (Some(delta), Some(delta / base * 100.0))
        }
        _ => (None, None),
    };

    Comparison {
        tier,
        name: name.to_string(),
        baseline_ms,
        current_ms,
        delta_ms,
        delta_percent,
        threshold,
        classification: Classification::classify(delta_percent, threshold),
    }
}
