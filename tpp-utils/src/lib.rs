//! Shared utility functions for TPP crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Local, NaiveDate};

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Format a date the way the news panel shows it, e.g. "Mar 15, 2024"
    pub fn format_display_date(date: &NaiveDate) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    /// Format a local timestamp as "YYYY-MM-DD HH:MM:SS"
    pub fn format_timestamp(ts: &DateTime<Local>) -> String {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }

}

/// Number formatting for dashboard cards
pub mod format {
    /// Format a percentage with one decimal place, e.g. "41.6%"
    pub fn percent(value: f64) -> String {
        format!("{:.1}%", value)
    }

    /// Format a signed percentage with an explicit sign, e.g. "+18.0%" or "-3.5%"
    pub fn signed_percent(value: f64) -> String {
        if value >= 0.0 {
            format!("+{:.1}%", value)
        } else {
            format!("{:.1}%", value)
        }
    }

    /// Format a count in thousands with one decimal place, e.g. 125000 -> "125.0k"
    pub fn thousands(value: u64) -> String {
        format!("{:.1}k", value as f64 / 1000.0)
    }

}
