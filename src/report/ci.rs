//! GitHub Actions workflow annotations.

use std::fmt;

use crate::compare::Comparison;

use super::format_percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Error,
    Warning,
    Notice,
}

impl AnnotationLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationLevel::Error => "error",
            AnnotationLevel::Warning => "warning",
            AnnotationLevel::Notice => "notice",
        }
    }
}

/// A single `::level::message` workflow command.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub level: AnnotationLevel,
    pub message: String,
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}::{}", self.level.as_str(), self.message)
    }
}

/// Annotations for regressions and improvements, in comparator order.
///
/// Tier 1 regressions are errors under strict mode; every other regression is
/// a warning. Unchanged and missing benchmarks are not annotated.
pub fn format_ci_annotations(comparisons: &[Comparison], tier1_strict: bool) -> Vec<Annotation> {
    comparisons
        .iter()
        .filter_map(|c| {
            let pct = c.delta_percent?;
            if c.is_regression() {
                let level = if tier1_strict && c.is_strict_regression() {
                    AnnotationLevel::Error
                } else {
                    AnnotationLevel::Warning
                };
                Some(Annotation {
                    level,
                    message: format!(
                        "Performance regression in {}: {} (threshold: {}%)",
                        c.name,
                        format_percent(pct),
                        format_threshold(c.threshold)
                    ),
                })
            } else if c.is_improvement() {
                Some(Annotation {
                    level: AnnotationLevel::Notice,
                    message: format!(
                        "Performance improvement in {}: {}",
                        c.name,
                        format_percent(pct)
                    ),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Threshold with at least one decimal place, e.g. `2.0` or `2.5`.
fn format_threshold(threshold: f64) -> String {
    format!("{threshold:?}")
}

#[cfg(test)]
mod tests {
    use super::format_threshold;

    #[test]
    fn threshold_keeps_one_decimal() {
        assert_eq!(format_threshold(2.0), "2.0");
        assert_eq!(format_threshold(2.5), "2.5");
        assert_eq!(format_threshold(10.0), "10.0");
    }
}
