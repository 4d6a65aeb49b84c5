use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Target response times per priority, as human readable text ("2 hours").
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ResponseTimes {
    pub critical: String,
    pub high: String,
    pub medium: String,
    pub low: String,
}

/// Aggregate outcome of submitted reports and interventions.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionStats {
    pub total_reports: u32,
    pub resolved_cases: u32,
    pub pending_investigations: u32,
    /// Prevention rate in percent
    pub prevention_rate: u32,
    pub response_time: ResponseTimes,
    pub successful_interventions: u32,
    /// Share of reports per platform, in percent
    pub platform_breakdown: BTreeMap<String, u32>,
}

impl InterventionStats {
    /// Share of reports that have been resolved, in percent.
    pub fn resolution_rate(&self) -> f64 {
        if self.total_reports == 0 {
            return 0.0;
        }
        f64::from(self.resolved_cases) / f64::from(self.total_reports) * 100.0
    }
}
