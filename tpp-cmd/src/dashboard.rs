//! Text rendering of the monitoring dashboard.

use log::info;
use std::fmt::Write;
use std::path::Path;
use tpp_core::metrics::DashboardSummary;
use tpp_data::{dataset::Dataset, metrics, series};
use tpp_utils::format::{percent, signed_percent};

/// Render the four headline cards.
pub fn render_headline(summary: &DashboardSummary) -> String {
    let m = &summary.metrics;
    let mut out = String::new();
    let _ = writeln!(out, "== Trafficking Prevention Platform ({}) ==", summary.latest_month);
    let _ = writeln!(
        out,
        "Active Cases      {:>8}   {} change from first month",
        m.active_cases,
        percent(summary.change_from_first_pct)
    );
    let _ = writeln!(
        out,
        "Risk Level        {:>8}   based on {} active cases",
        m.risk_level, m.active_cases
    );
    let _ = writeln!(
        out,
        "Prevention Score  {:>7}%   {} improvement",
        m.prevention_score,
        signed_percent(summary.prevention_improvement as f64)
    );
    let _ = writeln!(
        out,
        "Predicted Trend   {:>8}   expected by next quarter",
        format!("-{}", percent(m.predicted_reduction_pct))
    );
    out
}

/// Render report status, news, monthly trends and the predictive table.
pub fn render_panels(dataset: &Dataset) -> String {
    let stats = &dataset.intervention_stats;
    let mut out = String::new();

    let _ = writeln!(out, "\n-- Report Status --");
    let _ = writeln!(
        out,
        "Resolved {}  Pending {}  Prevention Rate {}%  Total Reports {}  Resolution Rate {}",
        stats.resolved_cases,
        stats.pending_investigations,
        stats.prevention_rate,
        stats.total_reports,
        percent(stats.resolution_rate())
    );
    let _ = writeln!(
        out,
        "Response time: critical {}, high {}, medium {}, low {}",
        stats.response_time.critical,
        stats.response_time.high,
        stats.response_time.medium,
        stats.response_time.low
    );
    for share in series::platform_shares(&stats.platform_breakdown) {
        let _ = writeln!(out, "  {:<12} {:>5.1}%", share.platform, share.share_pct);
    }

    let _ = writeln!(out, "\n-- Latest Updates --");
    for item in dataset.news_newest_first(None) {
        let _ = writeln!(
            out,
            "[{}] {} ({}, {})",
            item.category,
            item.title,
            item.source,
            tpp_utils::dates::format_display_date(&item.date)
        );
    }

    let _ = writeln!(out, "\n-- Monthly Trends --");
    let _ = writeln!(out, "{:<10} {:>9} {:>10}", "Month", "Incidents", "Prevention");
    for point in series::monthly_trend(&dataset.observations) {
        let _ = writeln!(
            out,
            "{:<10} {:>9} {:>10}",
            point.month, point.incidents, point.prevention_score
        );
    }

    let _ = writeln!(out, "\n-- Predictive Analysis --");
    let _ = writeln!(
        out,
        "{:<22} {:>7} {:>9} {:>9}",
        "Category", "Current", "Predicted", "Reduction"
    );
    for point in series::predictive_comparison(&dataset.predictive_metrics) {
        let _ = writeln!(
            out,
            "{:<22} {:>7} {:>9} {:>9}",
            point.category,
            point.current,
            point.predicted,
            percent(point.reduction_pct)
        );
    }

    let _ = writeln!(out, "\n-- Keyword Watchlist --");
    for group in &dataset.keyword_analysis {
        let _ = writeln!(
            out,
            "{:<16} {:>5}  {:<8} {}",
            group.category,
            group.frequency,
            group.risk_level,
            group.keywords.join(", ")
        );
    }
    out
}

pub fn run_dashboard(data: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let dataset = crate::load_dataset(data)?;
    let summary = metrics::summarize(&dataset.observations)?;
    info!(
        "Dashboard metrics: {} active cases, risk {}",
        summary.metrics.active_cases, summary.metrics.risk_level
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_headline(&summary));
        print!("{}", render_panels(&dataset));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_headline_bundled() {
        let dataset = Dataset::bundled().unwrap();
        let summary = metrics::summarize(&dataset.observations).unwrap();
        let text = render_headline(&summary);
        assert!(text.contains("Apr 2024"));
        assert!(text.contains("143"));
        assert!(text.contains("Low"));
        assert!(text.contains("83%"));
        assert!(text.contains("+18.0% improvement"));
        assert!(text.contains("-41.6%"));
    }

    #[test]
    fn test_render_panels_bundled() {
        let dataset = Dataset::bundled().unwrap();
        let text = render_panels(&dataset);
        assert!(text.contains("Resolved 423"));
        assert!(text.contains("Resolution Rate 73.2%"));
        assert!(text.contains("[success] Major Trafficking Network Disrupted"));
        assert!(text.contains("Mar 15, 2024"));
        assert!(text.contains("Suspicious Networks"));
        assert!(text.contains("passport help, visa assistance"));
        let news_pos = text.find("Latest Updates").unwrap();
        let trend_pos = text.find("Monthly Trends").unwrap();
        assert!(news_pos < trend_pos);
    }
}
