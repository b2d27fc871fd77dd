use crate::{
    core::{FsClient, FsError, Sentiment, SentimentLabel, client::constants::NEWS_PATH, net},
    news::{
        model::{Article, NewsFeed},
        wire,
    },
};

pub(super) async fn fetch_news(
    client: &FsClient,
    ticker: Option<&str>,
    limit: u32,
) -> Result<NewsFeed, FsError> {
    let mut url = client.endpoint(NEWS_PATH)?;
    {
        let mut qp = url.query_pairs_mut();
        if let Some(t) = ticker.filter(|t| !t.is_empty()) {
            qp.append_pair("ticker", t);
        }
        qp.append_pair("limit", &limit.to_string());
    }

    let envelope: wire::NewsEnvelope = net::send_json(client.http().get(url)).await?;

    let articles: Vec<Article> = envelope
        .articles
        .into_iter()
        .map(|node| Article {
            title: node.title,
            description: node.description,
            url: node.url,
            source: node.source,
            published_at: node.published_at,
            sentiment: Sentiment {
                label: SentimentLabel::parse(&node.sentiment.label),
                score: node.sentiment.score,
            },
        })
        .collect();

    let count = envelope
        .count
        .unwrap_or_else(|| u32::try_from(articles.len()).unwrap_or(u32::MAX));

    Ok(NewsFeed {
        ticker: envelope.ticker,
        count,
        articles,
    })
}
