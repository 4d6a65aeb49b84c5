use log::info;
use serde::de::DeserializeOwned;
use std::path::Path;
use tpp_core::{
    error::{Result, TppError},
    intervention::InterventionStats,
    news::{NewsCategory, NewsItem},
    observation::MonthlyObservation,
    predictive::{KeywordAnalysis, PredictiveMetric},
};

pub const MONTHLY_DATA_FILE: &str = "monthly_data.json";
pub const PREDICTIVE_METRICS_FILE: &str = "predictive_metrics.json";
pub const INTERVENTION_STATS_FILE: &str = "intervention_stats.json";
pub const KEYWORD_ANALYSIS_FILE: &str = "keyword_analysis.json";
pub const NEWS_FILE: &str = "news.json";

/// Embedded monthly observations, oldest first.
pub static MONTHLY_DATA_JSON: &str = include_str!("../../fixtures/monthly_data.json");

/// Embedded predictive metrics per monitoring category.
pub static PREDICTIVE_METRICS_JSON: &str = include_str!("../../fixtures/predictive_metrics.json");

/// Embedded intervention statistics summary.
pub static INTERVENTION_STATS_JSON: &str = include_str!("../../fixtures/intervention_stats.json");

/// Embedded keyword frequency analysis.
pub static KEYWORD_ANALYSIS_JSON: &str = include_str!("../../fixtures/keyword_analysis.json");

/// Embedded news items.
pub static NEWS_JSON: &str = include_str!("../../fixtures/news.json");

/// Everything the dashboard renders, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Chronological, oldest first, never empty
    pub observations: Vec<MonthlyObservation>,
    pub predictive_metrics: Vec<PredictiveMetric>,
    pub intervention_stats: InterventionStats,
    pub keyword_analysis: Vec<KeywordAnalysis>,
    pub news: Vec<NewsItem>,
}

fn parse<T: DeserializeOwned>(file: &str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| TppError::malformed(file, e))
}

impl Dataset {
    /// Load the dataset compiled into the binary.
    pub fn bundled() -> Result<Dataset> {
        Dataset::from_json(
            MONTHLY_DATA_JSON,
            PREDICTIVE_METRICS_JSON,
            INTERVENTION_STATS_JSON,
            KEYWORD_ANALYSIS_JSON,
            NEWS_JSON,
        )
    }

    /// Load the five dataset files from a directory instead of the embedded copies.
    pub fn from_dir(dir: &Path) -> Result<Dataset> {
        info!("Loading dataset from {}", dir.display());
        let read = |name: &str| -> Result<String> {
            let path = dir.join(name);
            std::fs::read_to_string(&path)
                .map_err(|e| TppError::unreadable(path.display().to_string(), e))
        };
        Dataset::from_json(
            &read(MONTHLY_DATA_FILE)?,
            &read(PREDICTIVE_METRICS_FILE)?,
            &read(INTERVENTION_STATS_FILE)?,
            &read(KEYWORD_ANALYSIS_FILE)?,
            &read(NEWS_FILE)?,
        )
    }

    fn from_json(
        monthly: &str,
        predictive: &str,
        stats: &str,
        keywords: &str,
        news: &str,
    ) -> Result<Dataset> {
        let observations: Vec<MonthlyObservation> = parse(MONTHLY_DATA_FILE, monthly)?;
        if observations.is_empty() {
            return Err(TppError::EmptyObservationSet);
        }
        let dataset = Dataset {
            observations,
            predictive_metrics: parse(PREDICTIVE_METRICS_FILE, predictive)?,
            intervention_stats: parse(INTERVENTION_STATS_FILE, stats)?,
            keyword_analysis: parse(KEYWORD_ANALYSIS_FILE, keywords)?,
            news: parse(NEWS_FILE, news)?,
        };
        info!(
            "Loaded {} monthly observations, {} predictive metrics, {} news items",
            dataset.observations.len(),
            dataset.predictive_metrics.len(),
            dataset.news.len()
        );
        Ok(dataset)
    }

    /// News items newest first, optionally restricted to one category.
    pub fn news_newest_first(&self, category: Option<NewsCategory>) -> Vec<&NewsItem> {
        let mut items: Vec<&NewsItem> = self
            .news
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect();
        items.sort_by(|a, b| b.cmp(a));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_dataset_loads() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(dataset.observations.len(), 4);
        assert_eq!(dataset.observations[0].month, "Jan 2024");
        assert_eq!(dataset.observations[3].incidents, 143);
        assert_eq!(dataset.predictive_metrics.len(), 4);
        assert_eq!(dataset.intervention_stats.total_reports, 578);
        assert_eq!(dataset.keyword_analysis.len(), 4);
        assert_eq!(dataset.news.len(), 3);
    }

    #[test]
    fn test_news_newest_first() {
        let dataset = Dataset::bundled().unwrap();
        let ids: Vec<&str> = dataset
            .news_newest_first(None)
            .iter()
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3"]);

        let alerts = dataset.news_newest_first(Some(NewsCategory::Alert));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "2");
    }

    #[test]
    fn test_empty_observations_rejected() {
        let result = Dataset::from_json(
            "[]",
            PREDICTIVE_METRICS_JSON,
            INTERVENTION_STATS_JSON,
            KEYWORD_ANALYSIS_JSON,
            NEWS_JSON,
        );
        assert!(matches!(result, Err(TppError::EmptyObservationSet)));
    }

    #[test]
    fn test_from_dir_missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result = Dataset::from_dir(dir.path());
        assert!(matches!(result, Err(TppError::UnreadableFile { .. })));
    }

    #[test]
    fn test_from_dir_names_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [
            (MONTHLY_DATA_FILE, MONTHLY_DATA_JSON),
            (PREDICTIVE_METRICS_FILE, PREDICTIVE_METRICS_JSON),
            (INTERVENTION_STATS_FILE, INTERVENTION_STATS_JSON),
            (KEYWORD_ANALYSIS_FILE, KEYWORD_ANALYSIS_JSON),
            (NEWS_FILE, "not json"),
        ] {
            std::fs::write(dir.path().join(name), body).unwrap();
        }
        match Dataset::from_dir(dir.path()) {
            Err(TppError::MalformedInput { file, .. }) => assert_eq!(file, NEWS_FILE),
            other => panic!("expected malformed news file, got {:?}", other),
        }
    }
}
