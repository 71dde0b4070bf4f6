//! News feed
//!
//! Seeded headlines with search, category and sentiment filters.

use crate::models::{Impact, NewsItem, Sentiment};
use crate::Result;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Selection value meaning "no constraint"
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsFilter {
    pub search: String,
    pub category: Option<String>,
    pub sentiment: Option<Sentiment>,
}

impl NewsFilter {
    /// Build from raw picker values where `"all"` disables a constraint
    pub fn from_selection(search: &str, category: &str, sentiment: &str) -> Result<Self> {
        let category = if category.trim().eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(category.trim().to_string())
        };

        let sentiment = if sentiment.trim().eq_ignore_ascii_case(ALL) {
            None
        } else {
            Some(sentiment.parse::<Sentiment>()?)
        };

        Ok(Self {
            search: search.to_string(),
            category,
            sentiment,
        })
    }

    pub fn matches(&self, item: &NewsItem) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = item.title.to_lowercase().contains(&needle)
            || item.summary.to_lowercase().contains(&needle);

        let matches_category = self
            .category
            .as_deref()
            .map_or(true, |c| item.category.eq_ignore_ascii_case(c));

        let matches_sentiment = self.sentiment.map_or(true, |s| item.sentiment == s);

        matches_search && matches_category && matches_sentiment
    }

    /// Matching items in feed order
    pub fn apply<'a>(&self, items: &'a [NewsItem]) -> Vec<&'a NewsItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

/// Majority of positive vs negative; ties and empty input are neutral
pub fn overall_sentiment<'a>(items: impl IntoIterator<Item = &'a NewsItem>) -> Sentiment {
    let (positive, negative) = items
        .into_iter()
        .fold((0usize, 0usize), |(pos, neg), item| match item.sentiment {
            Sentiment::Positive => (pos + 1, neg),
            Sentiment::Negative => (pos, neg + 1),
            Sentiment::Neutral => (pos, neg),
        });

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Demo headlines, newest first
pub fn mock_news() -> Vec<NewsItem> {
    let now = Utc::now();
    let item = |id: &str,
                title: &str,
                summary: &str,
                source: &str,
                hours_ago: i64,
                sentiment: Sentiment,
                impact: Impact,
                category: &str,
                related: &[&str]| NewsItem {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        source: source.to_string(),
        published_at: now - Duration::hours(hours_ago),
        sentiment,
        impact,
        category: category.to_string(),
        related_stocks: related.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        item(
            "1",
            "Federal Reserve Signals Potential Interest Rate Cuts",
            "Fed officials hint at possible rate reductions in the coming months amid cooling inflation data.",
            "Financial Times",
            2,
            Sentiment::Positive,
            Impact::High,
            "Economy",
            &["SPY", "QQQ", "BND"],
        ),
        item(
            "2",
            "Apple Reports Strong Q4 Earnings, Beats Estimates",
            "iPhone maker exceeds revenue expectations with robust services growth and international expansion.",
            "Reuters",
            4,
            Sentiment::Positive,
            Impact::High,
            "Earnings",
            &["AAPL", "QQQ"],
        ),
        item(
            "3",
            "Renewable Energy Sector Sees Record Investment",
            "Global clean energy investments reach new highs as governments accelerate climate commitments.",
            "Bloomberg",
            6,
            Sentiment::Positive,
            Impact::Medium,
            "Energy",
            &["ICLN", "QCLN", "PBW"],
        ),
        item(
            "4",
            "Tech Stocks Face Headwinds Amid Regulatory Concerns",
            "Major technology companies under scrutiny as antitrust discussions gain momentum.",
            "Wall Street Journal",
            8,
            Sentiment::Negative,
            Impact::Medium,
            "Technology",
            &["GOOGL", "META", "AMZN"],
        ),
        item(
            "5",
            "Cryptocurrency Market Shows Signs of Recovery",
            "Bitcoin and major altcoins gain ground as institutional adoption continues to grow.",
            "CoinDesk",
            10,
            Sentiment::Positive,
            Impact::Medium,
            "Crypto",
            &["COIN", "MSTR"],
        ),
    ]
}
