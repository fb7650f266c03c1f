//! Rendering comparisons as a plaintext table, a JSON document, or CI
//! annotations.
//!
//! All renderers are pure functions of their input.

pub mod ci;
pub mod json;
pub mod text;

pub use ci::{format_ci_annotations, Annotation, AnnotationLevel};
pub use json::{format_json, JsonSummary};
pub use text::{format_report, TextReport, Verdict};

use crate::compare::{Classification, Comparison};

/// Count of comparisons per classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub regressions: usize,
    pub improvements: usize,
    pub unchanged: usize,
    pub missing: usize,
}

impl Summary {
    pub fn tally<'a, I>(comparisons: I) -> Self
    where
        I: IntoIterator<Item = &'a Comparison>,
    {
        let mut summary = Summary::default();
        for comparison in comparisons {
            summary.record(comparison.classification);
        }
        summary
    }

    pub fn record(&mut self, classification: Classification) {
        match classification {
            Classification::Regression => self.regressions += 1,
            Classification::Improvement => self.improvements += 1,
            Classification::Unchanged => self.unchanged += 1,
            Classification::Missing => self.missing += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.regressions + self.improvements + self.unchanged + self.missing
    }
}

/// Signed percent with one decimal, e.g. `+3.0%`.
pub(crate) fn format_percent(pct: f64) -> String {
    format!("{pct:+.1}%")
}
