//! Shared test utilities: record builders and result file fixtures.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use bmb_bench_compare::{BenchmarkRecord, BenchmarkReport};

// =============================================================================
// Fixture paths
// =============================================================================

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn baseline_fixture() -> PathBuf {
    data_dir().join("baseline.json")
}

pub fn current_fixture() -> PathBuf {
    data_dir().join("current.json")
}

pub fn malformed_fixture() -> PathBuf {
    data_dir().join("malformed.json")
}

// =============================================================================
// Records
// =============================================================================

pub fn record(tier: i64, name: &str, bmb_ms: f64) -> BenchmarkRecord {
    BenchmarkRecord::new(tier, name, Some(bmb_ms))
}

pub fn unmeasured(tier: i64, name: &str) -> BenchmarkRecord {
    BenchmarkRecord::new(tier, name, None)
}

/// Write `records` as a result document into `dir` and return its path.
pub fn write_results(dir: &Path, file: &str, records: Vec<BenchmarkRecord>) -> PathBuf {
    let path = dir.join(file);
    let report = BenchmarkReport { results: records };
    std::fs::write(&path, serde_json::to_vec_pretty(&report).unwrap()).unwrap();
    path
}
