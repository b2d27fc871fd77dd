use futures::future::BoxFuture;

use crate::core::{FsError, Sentiment};
use crate::news::NewsFeed;

/// The two remote operations the dashboard depends on.
///
/// This decouples the dashboard state machine from HTTP so it can be driven by
/// an in-memory double in tests. It is implemented by [`FsClient`](crate::FsClient).
pub trait SentimentService: Send + Sync {
    /// Fetch one page of headlines, optionally filtered by ticker.
    ///
    /// `ticker` is `None` for the general feed.
    fn fetch_news<'a>(
        &'a self,
        ticker: Option<&'a str>,
    ) -> BoxFuture<'a, Result<NewsFeed, FsError>>;

    /// Classify a single piece of free text.
    fn predict<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Sentiment, FsError>>;
}

impl SentimentService for crate::core::FsClient {
    fn fetch_news<'a>(
        &'a self,
        ticker: Option<&'a str>,
    ) -> BoxFuture<'a, Result<NewsFeed, FsError>> {
        Box::pin(async move {
            let mut builder = crate::news::NewsBuilder::new(self);
            if let Some(t) = ticker {
                builder = builder.ticker(t);
            }
            builder.fetch().await
        })
    }

    fn predict<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<Sentiment, FsError>> {
        Box::pin(crate::predict::PredictBuilder::new(self, text).fetch())
    }
}
