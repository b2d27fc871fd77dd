use serde::Serialize;

use crate::core::Sentiment;

/// A headline annotated with the classifier's sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline.
    pub title: String,
    /// Summary text, when the news source provides one.
    pub description: Option<String>,
    /// Link to the full article. Not guaranteed unique within a feed.
    pub url: String,
    /// Publisher name (e.g. "bloomberg.com").
    pub source: String,
    /// Publication time exactly as sent by the service.
    pub published_at: String,
    /// Sentiment computed for the title and description.
    pub sentiment: Sentiment,
}

/// One page of the news feed, in the order the service returned it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsFeed {
    /// The ticker the service filtered on, `None` for the general feed.
    pub ticker: Option<String>,
    /// Number of articles the service reports.
    pub count: u32,
    pub articles: Vec<Article>,
}

impl NewsFeed {
    /// True when the query completed but matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
