use std::path::Path;
use tpp_core::news::{NewsCategory, NewsItem};
use tpp_utils::dates::{format_display_date, parse_date};

/// News items newest first, filtered by category and earliest publication date.
pub fn select_news<'a>(
    items: Vec<&'a NewsItem>,
    since: Option<&str>,
) -> anyhow::Result<Vec<&'a NewsItem>> {
    let Some(since) = since else {
        return Ok(items);
    };
    let since = parse_date(since)?;
    Ok(items.into_iter().filter(|item| item.date >= since).collect())
}

pub fn run_news(
    category: Option<NewsCategory>,
    since: Option<&str>,
    data: Option<&Path>,
) -> anyhow::Result<()> {
    let dataset = crate::load_dataset(data)?;
    let items = select_news(dataset.news_newest_first(category), since)?;
    if items.is_empty() {
        println!("No news items.");
    }
    for item in items {
        println!("[{}] {}", item.category, item.title);
        println!("    {}", item.description);
        println!("    {} | {} | {}", item.source, format_display_date(&item.date), item.url);
    }
    Ok(())
}
