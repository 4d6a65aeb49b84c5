//! Batch analysis of uploaded trafficking data files.

use log::{error, info};
use std::fmt::Write;
use std::path::PathBuf;
use tpp_core::{error::TppError, upload::UploadedAnalysisResult};
use tpp_data::{ingest, series};
use tpp_utils::format::thousands;

/// Height in characters of the tallest bar in the monthly trend sparkline.
const TREND_BAR_ROWS: f64 = 8.0;

/// Render one analysis result the way the dashboard's result card shows it.
pub fn render_result(result: &UploadedAnalysisResult) -> String {
    let metrics = &result.prevention_metrics;
    let mut out = String::new();
    let _ = writeln!(out, "Year {}  ({} incidents)", result.year, result.total_incidents);
    let _ = writeln!(
        out,
        "  Interventions {}  Victims Saved {}  Networks Disrupted {}  Awareness Reach {}",
        metrics.successful_interventions,
        metrics.potential_victims_saved,
        metrics.networks_disrupted,
        thousands(metrics.awareness_reach)
    );
    if !result.trends.is_empty() {
        let _ = writeln!(out, "  Monthly Trends:");
        let heights = series::trend_bar_heights(&result.trends, TREND_BAR_ROWS);
        for (trend, height) in result.trends.iter().zip(heights) {
            let _ = writeln!(
                out,
                "    {:<6} {:<8} {}",
                trend.month,
                "#".repeat(height.round() as usize),
                trend.count
            );
        }
    }
    out
}

/// Attach the file format hint to ingestion failures only.
fn batch_error(err: TppError) -> anyhow::Error {
    if err.is_ingestion_failure() {
        anyhow::Error::new(err).context("Error analyzing files. Please check the file format.")
    } else {
        err.into()
    }
}

pub async fn run_analyze(files: &[PathBuf], json: bool, per_file: bool) -> anyhow::Result<()> {
    info!("Analyzing {} file(s)", files.len());

    if per_file {
        let outcomes = ingest::analyze_paths_detailed(files).await;
        let mut failures = 0usize;
        for (path, outcome) in files.iter().zip(outcomes) {
            match outcome {
                Ok(result) if json => println!("{}", serde_json::to_string(&result)?),
                Ok(result) => print!("{}", render_result(&result)),
                Err(e) => {
                    failures += 1;
                    error!("{}: {}", path.display(), e);
                }
            }
        }
        if failures > 0 {
            anyhow::bail!("{} of {} file(s) could not be analyzed", failures, files.len());
        }
        return Ok(());
    }

    let results = ingest::analyze_paths(files).await.map_err(batch_error)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for result in &results {
            print!("{}", render_result(result));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tpp_core::upload::{MonthlyTrend, PreventionMetrics};

    #[test]
    fn test_render_result() {
        let result = UploadedAnalysisResult {
            year: 2023,
            total_incidents: 911,
            prevention_metrics: PreventionMetrics {
                successful_interventions: 187,
                potential_victims_saved: 342,
                networks_disrupted: 23,
                awareness_reach: 125_000,
            },
            trends: vec![
                MonthlyTrend { month: "Jan".to_string(), count: 40 },
                MonthlyTrend { month: "Feb".to_string(), count: 20 },
            ],
        };
        let text = render_result(&result);
        assert!(text.starts_with("Year 2023  (911 incidents)"));
        assert!(text.contains("Awareness Reach 125.0k"));
        assert!(text.contains("Jan    ######## 40"));
        assert!(text.contains("Feb    ####     20"));
    }

    #[test]
    fn test_batch_error_hint_only_for_ingestion_failures() {
        let malformed = batch_error(TppError::malformed("a.json", "bad"));
        assert!(malformed.to_string().contains("check the file format"));
        let unreadable = batch_error(TppError::unreadable("b.json", "gone"));
        assert!(unreadable.to_string().contains("check the file format"));
        let other = batch_error(TppError::DivisionByZero);
        assert!(!other.to_string().contains("check the file format"));
    }

    #[tokio::test]
    async fn test_run_analyze_fails_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{}").unwrap();
        let err = run_analyze(&[path], false, false).await.unwrap_err();
        assert!(err.to_string().contains("check the file format"));
    }

    #[tokio::test]
    async fn test_run_analyze_per_file_counts_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[]").unwrap();
        let err = run_analyze(&[path], true, true).await.unwrap_err();
        assert!(err.to_string().contains("1 of 1"));
    }
}
