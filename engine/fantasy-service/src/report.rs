//! Plain-text reports of the best rosters

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use roster_optimizer::OptimizationResult;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Every best roster followed by the number of rosters
pub fn render_report(result: &OptimizationResult) -> String {
    let mut out = String::new();
    for roster in &result.rosters {
        let _ = writeln!(out, "{}", roster);
    }
    let _ = write!(out, "{}", result.len());
    out
}

/// Write the report to `<output_dir>/<unix-timestamp>.txt` and return its path
pub fn write_report(
    output_dir: &Path,
    result: &OptimizationResult,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    let path = output_dir.join(format!("{}.txt", generated_at.timestamp()));
    std::fs::write(&path, render_report(result))
        .with_context(|| format!("Failed to write report: {:?}", path))?;

    tracing::info!("Report written to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_empty_report_is_just_the_count() {
        let result = OptimizationResult {
            best_score: None,
            rosters: Vec::new(),
            evaluated: 0,
            rejected_over_budget: 12,
        };
        assert_eq!(render_report(&result), "0");
    }

    #[test]
    fn test_report_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output");
        let result = OptimizationResult {
            best_score: None,
            rosters: Vec::new(),
            evaluated: 0,
            rejected_over_budget: 0,
        };
        let at = Utc.timestamp_opt(1_709_300_000, 0).unwrap();

        let path = write_report(&output, &result, at).unwrap();
        assert_eq!(path, output.join("1709300000.txt"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "0");
    }
}
