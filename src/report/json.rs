//! Machine-readable JSON report.

use serde::Serialize;

use crate::compare::{Classification, Comparison};

use super::Summary;

/// Summary block of the JSON report.
///
/// `unchanged` is everything that is neither a regression nor an improvement,
/// so missing comparisons are counted there. Downstream consumers rely on
/// this, and it differs from the plaintext summary on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JsonSummary {
    pub total: usize,
    pub regressions: usize,
    pub improvements: usize,
    pub unchanged: usize,
}

impl From<&Summary> for JsonSummary {
    fn from(summary: &Summary) -> Self {
        let total = summary.total();
        Self {
            total,
            regressions: summary.regressions,
            improvements: summary.improvements,
            unchanged: total - summary.regressions - summary.improvements,
        }
    }
}

#[derive(Serialize)]
struct JsonComparison<'a> {
    name: &'a str,
    tier: i64,
    baseline_ms: Option<f64>,
    current_ms: Option<f64>,
    delta_ms: Option<f64>,
    delta_percent: Option<f64>,
    threshold: f64,
    is_regression: bool,
    is_improvement: bool,
    classification: Classification,
}

impl<'a> From<&'a Comparison> for JsonComparison<'a> {
    fn from(c: &'a Comparison) -> Self {
        Self {
            name: &c.name,
            tier: c.tier,
            baseline_ms: c.baseline_ms,
            current_ms: c.current_ms,
            delta_ms: c.delta_ms,
            delta_percent: c.delta_percent,
            threshold: c.threshold,
            is_regression: c.is_regression(),
            is_improvement: c.is_improvement(),
            classification: c.classification,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: JsonSummary,
    comparisons: Vec<JsonComparison<'a>>,
}

/// Render comparisons as a pretty-printed JSON document, in comparator order.
pub fn format_json(comparisons: &[Comparison]) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        summary: JsonSummary::from(&Summary::tally(comparisons)),
        comparisons: comparisons.iter().map(JsonComparison::from).collect(),
    };
    serde_json::to_string_pretty(&report)
}
