use crate::metrics::RiskLevel;
use serde::{Deserialize, Serialize};

/// Current versus predicted counts for one monitoring category.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveMetric {
    pub category: String,
    pub current: u32,
    pub predicted: u32,
    pub risk_level: RiskLevel,
    pub prevention_measures: Vec<String>,
}

impl PredictiveMetric {
    /// Expected reduction from `current` to `predicted`, in percent.
    ///
    /// Returns 0 when there is nothing to reduce.
    pub fn reduction_pct(&self) -> f64 {
        if self.current == 0 {
            return 0.0;
        }
        (f64::from(self.current) - f64::from(self.predicted)) / f64::from(self.current) * 100.0
    }
}

/// Frequency of a group of recruitment keywords seen in monitored content.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    pub category: String,
    pub keywords: Vec<String>,
    pub frequency: u32,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(current: u32, predicted: u32) -> PredictiveMetric {
        PredictiveMetric {
            category: "Online Recruitment".to_string(),
            current,
            predicted,
            risk_level: RiskLevel::High,
            prevention_measures: vec![],
        }
    }

    #[test]
    fn test_reduction_pct() {
        let pct = metric(156, 102).reduction_pct();
        assert!((pct - 34.615).abs() < 0.01, "got {}", pct);
    }

    #[test]
    fn test_reduction_pct_zero_current() {
        assert_eq!(metric(0, 10).reduction_pct(), 0.0);
    }
}
