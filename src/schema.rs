//! Benchmark result document types.
//!
//! The BMB benchmark runner writes one JSON file per run. Measurement fields
//! that could not be collected are either left out, written as JSON `null`, or
//! written as the string `"null"`. All three forms load as `None`, so code past
//! this module only ever reasons about presence and absence.

use serde::{Deserialize, Deserializer, Serialize};

/// String the benchmark runner writes when a measurement is not available.
pub const NOT_AVAILABLE: &str = "null";

/// Top-level result document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Individual benchmark results, in the order the runner produced them.
    #[serde(default)]
    pub results: Vec<BenchmarkRecord>,
}

/// One measured benchmark from one run.
///
/// Only `tier`, `name` and `bmb_ms` take part in comparison. The reference
/// timings and ratios are carried so a loaded document keeps everything the
/// runner recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Benchmark tier (0 = bootstrap, 1 = core compute, 2 = contract features,
    /// 3 = real world). Other values are accepted as-is.
    #[serde(default)]
    pub tier: i64,
    /// Benchmark name, unique within a tier.
    #[serde(default)]
    pub name: String,
    /// BMB wall time in milliseconds.
    #[serde(
        default,
        deserialize_with = "measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub bmb_ms: Option<f64>,
    /// Reference C implementation wall time in milliseconds.
    #[serde(
        default,
        deserialize_with = "measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub c_ms: Option<f64>,
    /// Reference Rust implementation wall time in milliseconds.
    #[serde(
        default,
        deserialize_with = "measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub rust_ms: Option<f64>,
    #[serde(
        default,
        deserialize_with = "measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub ratio_c: Option<f64>,
    #[serde(
        default,
        deserialize_with = "measurement",
        skip_serializing_if = "Option::is_none"
    )]
    pub ratio_rust: Option<f64>,
}

impl BenchmarkRecord {
    pub fn new(tier: i64, name: impl Into<String>, bmb_ms: Option<f64>) -> Self {
        Self {
            tier,
            name: name.into(),
            bmb_ms,
            ..Default::default()
        }
    }

    /// Join key shared by baseline and current runs.
    pub fn key(&self) -> (i64, &str) {
        (self.tier, self.name.as_str())
    }

    /// The measurement that comparisons are made on.
    pub fn value_ms(&self) -> Option<f64> {
        self.bmb_ms
    }
}

fn measurement<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text == NOT_AVAILABLE => Ok(None),
        Some(Raw::Text(text)) => Err(serde::de::Error::custom(format!(
            "expected a number or \"{NOT_AVAILABLE}\", found string {text:?}"
        ))),
    }
}
