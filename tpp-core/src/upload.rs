//! Shapes of uploaded analysis documents and the summaries derived from them.

use serde::{Deserialize, Serialize};

/// Prevention outcome counters reported for one year.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreventionMetrics {
    pub successful_interventions: u64,
    pub potential_victims_saved: u64,
    pub networks_disrupted: u64,
    /// Number of people reached by awareness campaigns
    pub awareness_reach: u64,
}

/// A (month, count) point of a yearly trend series.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub count: u64,
}

/// One region entry of an uploaded document.
///
/// Only the first region is expected to carry `monthlyTrends`.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRegion {
    pub incidents: u64,
    #[serde(default)]
    pub monthly_trends: Option<Vec<MonthlyTrend>>,
}

/// The raw document accepted by upload ingestion. Unknown fields are ignored.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocument {
    pub year: i32,
    pub regions: Vec<UploadRegion>,
    pub prevention_metrics: PreventionMetrics,
}

/// Normalized summary of one uploaded document.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedAnalysisResult {
    pub year: i32,
    /// Sum of incidents across all regions
    pub total_incidents: u64,
    pub prevention_metrics: PreventionMetrics,
    /// Monthly trend series of the first region
    pub trends: Vec<MonthlyTrend>,
}
