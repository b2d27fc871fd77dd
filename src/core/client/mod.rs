//! Public client surface + builder.
//! Defaults (base URL, UA, timeout, page size) live in `constants`.

pub(crate) mod constants;

use crate::core::FsError;
use constants::{DEFAULT_BASE_URL, DEFAULT_NEWS_LIMIT, DEFAULT_TIMEOUT_SECS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and the service base URL.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FsClient {
    http: Client,
    base_url: Url,
    news_limit: u32,
}

impl Default for FsClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FsClient {
    /// Create a new builder.
    pub fn builder() -> FsClientBuilder {
        FsClientBuilder::default()
    }

    /// The service base URL every endpoint is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The page size sent with news requests unless a request overrides it.
    pub const fn news_limit(&self) -> u32 {
        self.news_limit
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, FsError> {
        Ok(self.base_url.join(path)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FsClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    news_limit: Option<u32>,
}

impl FsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the service base URL (e.g., `http://localhost:8000/`).
    ///
    /// A missing trailing slash is added so that a path prefix survives endpoint joins.
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the overall request timeout. Default: 15 seconds.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Set the default page size for news requests. Default: 12.
    #[must_use]
    pub const fn news_limit(mut self, limit: u32) -> Self {
        self.news_limit = Some(limit);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default base URL cannot be parsed or the HTTP
    /// client cannot be constructed (e.g. TLS backend initialization fails).
    pub fn build(self) -> Result<FsClient, FsError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            );

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FsClient {
            http,
            base_url: with_trailing_slash(base_url),
            news_limit: self.news_limit.unwrap_or(DEFAULT_NEWS_LIMIT),
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
