use serde::{Deserialize, Serialize};
use std::fmt;

/// Incident count above which the risk level is `Critical`.
pub const CRITICAL_THRESHOLD: u32 = 200;
/// Incident count above which the risk level is `High`.
pub const HIGH_THRESHOLD: u32 = 150;
/// Incident count above which the risk level is `Medium`.
pub const MEDIUM_THRESHOLD: u32 = 100;

/// Categorical risk level. Serialized in lower case to match the data files.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify an incident count. Thresholds are exclusive lower bounds
    /// checked from the top down.
    pub fn from_incidents(incidents: u32) -> RiskLevel {
        if incidents > CRITICAL_THRESHOLD {
            RiskLevel::Critical
        } else if incidents > HIGH_THRESHOLD {
            RiskLevel::High
        } else if incidents > MEDIUM_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Summary values computed from an observation sequence.
///
/// These have no identity of their own and are recomputed whenever the
/// sequence they were derived from changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    /// Incidents in the most recent period
    pub active_cases: u32,
    pub risk_level: RiskLevel,
    /// Prevention score of the most recent period
    pub prevention_score: u32,
    /// Absolute relative change between the first and last period, in percent
    pub predicted_reduction_pct: f64,
}

/// The values shown on the dashboard's headline cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(flatten)]
    pub metrics: DerivedMetrics,
    /// Signed change from the first period; positive means fewer incidents
    pub change_from_first_pct: f64,
    /// Prevention score points gained since the first period
    pub prevention_improvement: i64,
    /// Label of the most recent period
    pub latest_month: String,
}
