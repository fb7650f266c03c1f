//! Reading benchmark result files.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::CompareError;
use crate::schema::{BenchmarkRecord, BenchmarkReport};

/// Load every record from the result file at `path`, in file order.
///
/// Duplicate `(tier, name)` entries are kept; the comparator decides which one
/// wins.
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<Vec<BenchmarkRecord>, CompareError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| CompareError::read(path, e))?;
    let records = parse_results(&contents).map_err(|e| CompareError::parse(path, e))?;
    debug!(
        "loaded {} benchmark records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parse a result document held in memory.
pub fn parse_results(json: &str) -> Result<Vec<BenchmarkRecord>, serde_json::Error> {
    let report: BenchmarkReport = serde_json::from_str(json)?;
    Ok(report.results)
}
