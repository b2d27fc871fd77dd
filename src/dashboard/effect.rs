use crate::core::{FsError, Sentiment, SentimentService};
use crate::news::NewsFeed;

/// A news query issued by the dashboard, tagged with its sequence token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRequest {
    pub seq: u64,
    /// `None` requests the general feed.
    pub ticker: Option<String>,
}

/// An analysis submission issued by the dashboard, tagged with its sequence token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeRequest {
    pub seq: u64,
    pub text: String,
}

/// Network work requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchNews(NewsRequest),
    Analyze(AnalyzeRequest),
}

/// The result of running an [`Effect`], carrying the token it was issued with.
#[derive(Debug)]
pub enum Outcome {
    News {
        seq: u64,
        result: Result<NewsFeed, FsError>,
    },
    Analysis {
        seq: u64,
        result: Result<Sentiment, FsError>,
    },
}

/// Perform one effect against `service`. Exactly one remote call is made.
///
/// This borrows nothing from the dashboard, so several effects may be in
/// flight at once; the state discards outcomes whose token is stale.
pub async fn execute<S: SentimentService + ?Sized>(service: &S, effect: Effect) -> Outcome {
    match effect {
        Effect::FetchNews(req) => Outcome::News {
            seq: req.seq,
            result: service.fetch_news(req.ticker.as_deref()).await,
        },
        Effect::Analyze(req) => Outcome::Analysis {
            seq: req.seq,
            result: service.predict(&req.text).await,
        },
    }
}
