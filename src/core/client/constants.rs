//! Centralized constants for default endpoints and UA.

/// Identifies this client to the sentiment service.
pub(crate) const USER_AGENT: &str = concat!("finsense-rs/", env!("CARGO_PKG_VERSION"));

/// Hosted sentiment service (news feed, prediction and health endpoints hang off it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://hussainr-finsense.hf.space/";

/// Overall request timeout applied unless the builder overrides it.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Page size sent as `limit` on news requests.
pub(crate) const DEFAULT_NEWS_LIMIT: u32 = 12;

pub(crate) const NEWS_PATH: &str = "news-with-sentiment";
pub(crate) const PREDICT_PATH: &str = "predict";
