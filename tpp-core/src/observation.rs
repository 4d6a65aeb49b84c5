use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A (category, count) pair describing one recruitment risk factor.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub category: String,
    pub count: u32,
}

/// A (region, count) pair describing where incidents were observed.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct LocationCount {
    pub region: String,
    pub count: u32,
}

/// One month of aggregated incident and prevention data.
///
/// Observations are supplied oldest first; the last element is the
/// current period.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyObservation {
    /// Display label, e.g. "Jan 2024"
    pub month: String,
    pub incidents: u32,
    /// Prevention score in the 0-100 range
    pub prevention_score: u32,
    /// Incident counts keyed by platform name
    pub platform_distribution: BTreeMap<String, u32>,
    pub risk_factors: Vec<RiskFactor>,
    pub locations: Vec<LocationCount>,
}

impl MonthlyObservation {
    /// Parse a JSON array of observations, as stored in `monthly_data.json`.
    pub fn parse_json(json: &str) -> serde_json::Result<Vec<MonthlyObservation>> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod test {
    use super::MonthlyObservation;

    const STR_RESULT: &str = r#"[
  {
    "month": "Jan 2024",
    "incidents": 245,
    "preventionScore": 65,
    "platformDistribution": { "facebook": 85, "instagram": 65, "twitter": 45, "tiktok": 30, "other": 20 },
    "riskFactors": [ { "category": "Job Offers", "count": 120 } ],
    "locations": [ { "region": "North America", "count": 95 } ]
  }
]"#;

    #[test]
    fn test_parse_json() {
        let observations = MonthlyObservation::parse_json(STR_RESULT).unwrap();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].incidents, 245);
        assert_eq!(observations[0].prevention_score, 65);
        assert_eq!(observations[0].risk_factors[0].category, "Job Offers");
        assert_eq!(observations[0].platform_distribution["facebook"], 85);
    }

    #[test]
    fn test_negative_incidents_rejected() {
        let json = STR_RESULT.replace("245", "-1");
        assert!(MonthlyObservation::parse_json(&json).is_err());
    }
}
