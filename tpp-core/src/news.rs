use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Kind of news update, which decides how it is highlighted.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Alert,
    Success,
    Info,
}

impl fmt::Display for NewsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NewsCategory::Alert => "alert",
            NewsCategory::Success => "success",
            NewsCategory::Info => "info",
        };
        f.write_str(label)
    }
}

impl FromStr for NewsCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "alert" => Ok(NewsCategory::Alert),
            "success" => Ok(NewsCategory::Success),
            "info" => Ok(NewsCategory::Info),
            other => Err(format!("unknown news category: {}", other)),
        }
    }
}

/// A news item shown in the "Latest Updates" panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub source: String,
    /// Publication date, serialized as "YYYY-MM-DD"
    pub date: NaiveDate,
    pub url: String,
    pub category: NewsCategory,
}

impl Ord for NewsItem {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date).then_with(|| self.id.cmp(&other.id))
    }
}

impl Eq for NewsItem {}

impl PartialEq for NewsItem {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.id == other.id
    }
}

impl PartialOrd for NewsItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_news_item() {
        let json = r##"{
            "id": "1",
            "title": "Network Disrupted",
            "description": "45 victims rescued.",
            "source": "International Police Organization",
            "date": "2024-03-15",
            "url": "#",
            "category": "success"
        }"##;
        let item: NewsItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(item.category, NewsCategory::Success);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("ALERT".parse::<NewsCategory>().unwrap(), NewsCategory::Alert);
        assert!("rumour".parse::<NewsCategory>().is_err());
    }
}
