use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a submitted report is about.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    SuspiciousActivity,
    PotentialVictim,
    TraffickingNetwork,
}

/// Priority chosen by the reporter.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "suspicious_activity" => Ok(ReportType::SuspiciousActivity),
            "potential_victim" => Ok(ReportType::PotentialVictim),
            "trafficking_network" => Ok(ReportType::TraffickingNetwork),
            other => Err(format!("unknown report type: {}", other)),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {}", other)),
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportType::SuspiciousActivity => "Suspicious Activity",
            ReportType::PotentialVictim => "Potential Victim",
            ReportType::TraffickingNetwork => "Trafficking Network",
        };
        f.write_str(label)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(label)
    }
}

/// State of a report as acknowledged on submission.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
}

/// The form contents of a report before submission.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ReportDraft {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub priority: Priority,
    pub description: String,
}

/// Acknowledgment returned once a report has been accepted.
#[derive(Debug, Clone, Serialize)]
pub struct ReportReceipt {
    pub id: String,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub priority: Priority,
    pub description: String,
    pub status: ReportStatus,
    pub timestamp: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_wire_names() {
        let draft: ReportDraft = serde_json::from_str(
            r#"{"type": "trafficking_network", "priority": "high", "description": "x"}"#,
        )
        .unwrap();
        assert_eq!(draft.report_type, ReportType::TraffickingNetwork);
        assert_eq!(draft.priority, Priority::High);
    }

    #[test]
    fn test_status_wire_name() {
        assert_eq!(
            serde_json::to_string(&ReportStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert!(serde_json::from_str::<ReportStatus>("\"resolved\"").is_err());
    }

    #[test]
    fn test_from_str_accepts_cli_spellings() {
        assert_eq!(
            "suspicious-activity".parse::<ReportType>().unwrap(),
            ReportType::SuspiciousActivity
        );
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
