mod api;
mod model;
mod wire;

pub use model::{Article, NewsFeed};

use crate::{FsClient, FsError};

/// A builder for fetching one page of the sentiment-annotated news feed.
pub struct NewsBuilder {
    client: FsClient,
    ticker: Option<String>,
    limit: u32,
}

impl NewsBuilder {
    /// Creates a `NewsBuilder` for the general feed with the client's default page size.
    pub fn new(client: &FsClient) -> Self {
        Self {
            client: client.clone(),
            ticker: None,
            limit: client.news_limit(),
        }
    }

    /// Filters the feed by ticker symbol.
    ///
    /// The symbol is trimmed; an empty string means no filter. The format is not
    /// validated here, the service decides what it accepts.
    #[must_use]
    pub fn ticker(mut self, ticker: impl AsRef<str>) -> Self {
        let t = ticker.as_ref().trim();
        self.ticker = (!t.is_empty()).then(|| t.to_string());
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `FsError::Status` for a non-2xx response, `FsError::Json` if the
    /// body is not the expected JSON, and `FsError::Http`/`FsError::Timeout` if no
    /// response was received.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(ticker = ?self.ticker, limit = self.limit)))]
    pub async fn fetch(self) -> Result<NewsFeed, FsError> {
        api::fetch_news(&self.client, self.ticker.as_deref(), self.limit).await
    }
}
