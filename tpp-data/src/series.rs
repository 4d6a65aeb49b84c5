//! Chart-ready series built from the dataset.
//!
//! All row structs derive `Serialize` so they can be written out as JSON or
//! CSV for whatever draws the charts.

use serde::Serialize;
use std::collections::BTreeMap;
use tpp_core::{
    error::{Result, TppError},
    observation::MonthlyObservation,
    predictive::PredictiveMetric,
    upload::MonthlyTrend,
};

/// One point of the dual-axis monthly trend chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub month: String,
    pub incidents: u32,
    pub prevention_score: u32,
}

/// One bar group of the predictive analysis chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictivePoint {
    pub category: String,
    pub current: u32,
    pub predicted: u32,
    pub reduction_pct: f64,
}

/// One slice of a platform distribution pie chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformShare {
    pub platform: String,
    pub value: u32,
    pub share_pct: f64,
}

/// A labelled count, used for risk factor and location totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LabelCount {
    pub label: String,
    pub count: u64,
}

/// Incidents and prevention score per month, oldest first.
pub fn monthly_trend(observations: &[MonthlyObservation]) -> Vec<TrendPoint> {
    observations
        .iter()
        .map(|o| TrendPoint {
            month: o.month.clone(),
            incidents: o.incidents,
            prevention_score: o.prevention_score,
        })
        .collect()
}

/// Current versus predicted counts per category.
pub fn predictive_comparison(metrics: &[PredictiveMetric]) -> Vec<PredictivePoint> {
    metrics
        .iter()
        .map(|m| PredictivePoint {
            category: m.category.clone(),
            current: m.current,
            predicted: m.predicted,
            reduction_pct: m.reduction_pct(),
        })
        .collect()
}

/// Pie slices sorted by descending value, ties broken by platform name.
pub fn platform_shares(breakdown: &BTreeMap<String, u32>) -> Vec<PlatformShare> {
    let total: u64 = breakdown.values().map(|&v| u64::from(v)).sum();
    let mut shares: Vec<PlatformShare> = breakdown
        .iter()
        .map(|(platform, &value)| PlatformShare {
            platform: platform.clone(),
            value,
            share_pct: if total == 0 {
                0.0
            } else {
                f64::from(value) / total as f64 * 100.0
            },
        })
        .collect();
    shares.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.platform.cmp(&b.platform)));
    shares
}

/// Sum labelled counts across all months, keeping first-seen order.
fn totals_by_label<'a, I>(pairs: I) -> Vec<LabelCount>
where
    I: Iterator<Item = (&'a str, u32)>,
{
    let mut totals: Vec<LabelCount> = Vec::new();
    for (label, count) in pairs {
        match totals.iter_mut().find(|t| t.label == label) {
            Some(entry) => entry.count += u64::from(count),
            None => totals.push(LabelCount {
                label: label.to_string(),
                count: u64::from(count),
            }),
        }
    }
    totals
}

/// Risk factor counts summed over every month.
pub fn risk_factor_totals(observations: &[MonthlyObservation]) -> Vec<LabelCount> {
    totals_by_label(
        observations
            .iter()
            .flat_map(|o| o.risk_factors.iter())
            .map(|r| (r.category.as_str(), r.count)),
    )
}

/// Location counts summed over every month.
pub fn location_totals(observations: &[MonthlyObservation]) -> Vec<LabelCount> {
    totals_by_label(
        observations
            .iter()
            .flat_map(|o| o.locations.iter())
            .map(|l| (l.region.as_str(), l.count)),
    )
}

/// Bar heights for an uploaded trend series, scaled so the largest count
/// is `max_px` tall.
pub fn trend_bar_heights(trends: &[MonthlyTrend], max_px: f64) -> Vec<f64> {
    let max = trends.iter().map(|t| t.count).max().unwrap_or(0);
    trends
        .iter()
        .map(|t| {
            if max == 0 {
                0.0
            } else {
                t.count as f64 / max as f64 * max_px
            }
        })
        .collect()
}

/// Serialize rows as CSV with a header line.
pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| TppError::malformed("csv output", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn test_monthly_trend() {
        let dataset = Dataset::bundled().unwrap();
        let trend = monthly_trend(&dataset.observations);
        assert_eq!(trend.len(), 4);
        assert_eq!(trend[0].month, "Jan 2024");
        assert_eq!(trend[3].incidents, 143);
        assert_eq!(trend[3].prevention_score, 83);
    }

    #[test]
    fn test_predictive_comparison() {
        let dataset = Dataset::bundled().unwrap();
        let points = predictive_comparison(&dataset.predictive_metrics);
        let networks = points
            .iter()
            .find(|p| p.category == "Suspicious Networks")
            .unwrap();
        assert_eq!(networks.current, 78);
        assert!((networks.reduction_pct - 42.307).abs() < 0.01);
    }

    #[test]
    fn test_platform_shares_sorted_and_sum_to_100() {
        let dataset = Dataset::bundled().unwrap();
        let shares = platform_shares(&dataset.intervention_stats.platform_breakdown);
        assert_eq!(shares[0].platform, "facebook");
        assert_eq!(shares.last().unwrap().platform, "other");
        let sum: f64 = shares.iter().map(|s| s.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_platform_shares_empty() {
        assert!(platform_shares(&BTreeMap::new()).is_empty());
        let zeros: BTreeMap<String, u32> = [("facebook".to_string(), 0)].into_iter().collect();
        assert_eq!(platform_shares(&zeros)[0].share_pct, 0.0);
    }

    #[test]
    fn test_risk_factor_totals() {
        let dataset = Dataset::bundled().unwrap();
        let totals = risk_factor_totals(&dataset.observations);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].label, "Job Offers");
        assert_eq!(totals[0].count, 120 + 95 + 82 + 70);
    }

    #[test]
    fn test_location_totals() {
        let dataset = Dataset::bundled().unwrap();
        let totals = location_totals(&dataset.observations);
        let labels: Vec<&str> = totals.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["North America", "Europe", "Asia", "Other"]);
        assert_eq!(totals[3].count, 30 + 20 + 20 + 15);
    }

    #[test]
    fn test_trend_bar_heights() {
        let trends = vec![
            MonthlyTrend { month: "Jan".to_string(), count: 50 },
            MonthlyTrend { month: "Feb".to_string(), count: 25 },
            MonthlyTrend { month: "Mar".to_string(), count: 0 },
        ];
        assert_eq!(trend_bar_heights(&trends, 100.0), vec![100.0, 50.0, 0.0]);
        assert!(trend_bar_heights(&[], 100.0).is_empty());
    }

    #[test]
    fn test_to_csv() {
        let rows = vec![TrendPoint {
            month: "Jan 2024".to_string(),
            incidents: 245,
            prevention_score: 65,
        }];
        let csv = to_csv(&rows).unwrap();
        assert_eq!(csv, "month,incidents,preventionScore\nJan 2024,245,65\n");
    }
}
