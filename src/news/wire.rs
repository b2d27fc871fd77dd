use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) ticker: Option<String>,
    pub(crate) count: Option<u32>,
    pub(crate) articles: Vec<ArticleNode>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) url: String,
    pub(crate) source: String,
    pub(crate) published_at: String,
    pub(crate) sentiment: SentimentNode,
}

#[derive(Deserialize)]
pub(crate) struct SentimentNode {
    pub(crate) label: String,
    pub(crate) score: f64,
}
