//! finsense-rs: client and terminal dashboard for a financial news sentiment service.
//!
//! The service exposes two endpoints: a news feed where every headline carries a
//! sentiment label and score, and a classifier for arbitrary text.
//!
//! - [`NewsBuilder`] and [`PredictBuilder`] call those endpoints through an [`FsClient`].
//! - [`dashboard`] holds the view state (search, mode switch, loading/error/empty)
//!   as pure transitions, with sequence tokens so only the latest response is shown.
//! - [`render`] turns that state into text.
//!
//! ```no_run
//! # use finsense_rs::{FsClient, NewsBuilder};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FsClient::builder()
//!     .base_url("http://localhost:8000".parse()?)
//!     .build()?;
//! let feed = NewsBuilder::new(&client).ticker("NVDA").fetch().await?;
//! for a in &feed.articles {
//!     println!("{} [{}]", a.title, a.sentiment.label);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod dashboard;
pub mod health;
pub mod news;
pub mod predict;
pub mod render;

pub use core::{
    ErrorKind, FsClient, FsClientBuilder, FsError, Sentiment, SentimentLabel, SentimentService,
};
pub use dashboard::{Action, Dashboard, DashboardState, NewsView, ViewMode};
pub use health::ServiceStatus;
pub use news::{Article, NewsBuilder, NewsFeed};
pub use predict::PredictBuilder;
