use crate::core::Sentiment;
use crate::dashboard::effect::{AnalyzeRequest, Effect, NewsRequest, Outcome};
use crate::news::Article;

/// Which of the two top-level views is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Live headline feed.
    #[default]
    News,
    /// Free-text analysis form.
    Custom,
}

/// A user action the dashboard reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The dashboard is first shown.
    Mount,
    SelectMode(ViewMode),
    /// The ticker search box changed.
    EditTicker(String),
    /// The search form was submitted with this query.
    SubmitSearch(String),
    /// The retry button on the error banner was pressed.
    Retry,
    /// The analysis text area changed.
    EditAnalysis(String),
    SubmitAnalysis,
}

/// What the news view should show. Exactly one applies at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NewsView<'a> {
    /// Banner with the failure message and a retry action.
    Error(&'a str),
    /// Placeholder cards while the first results of a query load.
    Loading,
    Results(&'a [Article]),
    /// A completed query (or no query yet) with nothing to show.
    Empty,
}

/// State of the news feed side of the dashboard.
#[derive(Debug, Clone, Default)]
pub struct NewsState {
    ticker_input: String,
    active_ticker: Option<String>,
    articles: Vec<Article>,
    is_loading: bool,
    last_error: Option<String>,
    last_request: Option<NewsRequest>,
    has_loaded: bool,
    seq: u64,
}

impl NewsState {
    pub fn ticker_input(&self) -> &str {
        &self.ticker_input
    }

    /// Ticker echoed by the last applied response.
    pub fn active_ticker(&self) -> Option<&str> {
        self.active_ticker.as_deref()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The most recently issued request, which `retry` repeats.
    pub const fn last_request(&self) -> Option<&NewsRequest> {
        self.last_request.as_ref()
    }

    fn begin(mut self, ticker: Option<String>) -> (Self, Effect) {
        self.seq += 1;
        let req = NewsRequest {
            seq: self.seq,
            ticker,
        };
        self.is_loading = true;
        self.last_error = None;
        self.articles.clear();
        self.last_request = Some(req.clone());
        (self, Effect::FetchNews(req))
    }
}

/// State of the free-text analysis form.
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    text: String,
    analyzing: bool,
    result: Option<Sentiment>,
    error: Option<String>,
    seq: u64,
}

impl AnalysisState {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub const fn result(&self) -> Option<&Sentiment> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.analyzing && !self.text.trim().is_empty()
    }
}

/// The whole dashboard as a plain value.
///
/// Every transition consumes the current state and returns the next one plus
/// at most one [`Effect`] to run. Outcomes of effects are folded back in with
/// [`DashboardState::apply`].
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    mode: ViewMode,
    news: NewsState,
    analysis: AnalysisState,
}

impl DashboardState {
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    pub const fn news(&self) -> &NewsState {
        &self.news
    }

    pub const fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    /// Route an [`Action`] to its transition.
    #[must_use]
    pub fn reduce(self, action: Action) -> (Self, Option<Effect>) {
        match action {
            Action::Mount => self.mount(),
            Action::SelectMode(mode) => self.select_mode(mode),
            Action::EditTicker(s) => (self.edit_ticker(s), None),
            Action::SubmitSearch(q) => {
                let (next, effect) = self.submit_search(q);
                (next, Some(effect))
            }
            Action::Retry => self.retry(),
            Action::EditAnalysis(s) => (self.edit_analysis(s), None),
            Action::SubmitAnalysis => self.submit_analysis(),
        }
    }

    /// Initial load: the default news view fetches the general feed.
    #[must_use]
    pub fn mount(self) -> (Self, Option<Effect>) {
        let mode = self.mode;
        self.select_mode(mode)
    }

    /// Switch views. Entering the news view fetches only if nothing has ever
    /// loaded and no fetch is already running; results survive switching away.
    #[must_use]
    pub fn select_mode(mut self, mode: ViewMode) -> (Self, Option<Effect>) {
        self.mode = mode;
        if mode == ViewMode::News && !self.news.has_loaded && !self.news.is_loading {
            let (news, effect) = self.news.begin(None);
            self.news = news;
            return (self, Some(effect));
        }
        (self, None)
    }

    #[must_use]
    pub fn edit_ticker(mut self, input: impl Into<String>) -> Self {
        self.news.ticker_input = input.into();
        self
    }

    /// Fetch the feed filtered by `query`. A blank query means no filter.
    #[must_use]
    pub fn submit_search(mut self, query: impl Into<String>) -> (Self, Effect) {
        let query = query.into();
        let trimmed = query.trim();
        let ticker = (!trimmed.is_empty()).then(|| trimmed.to_string());
        self.news.ticker_input = query;
        let (news, effect) = self.news.begin(ticker);
        self.news = news;
        (self, effect)
    }

    /// Repeat the last news request with the same parameters.
    ///
    /// Only meaningful while the error banner is showing; otherwise a no-op.
    #[must_use]
    pub fn retry(mut self) -> (Self, Option<Effect>) {
        if self.news.last_error.is_none() {
            return (self, None);
        }
        let Some(ticker) = self.news.last_request.as_ref().map(|r| r.ticker.clone()) else {
            return (self, None);
        };
        let (news, effect) = self.news.begin(ticker);
        self.news = news;
        (self, Some(effect))
    }

    #[must_use]
    pub fn edit_analysis(mut self, text: impl Into<String>) -> Self {
        self.analysis.text = text.into();
        self
    }

    /// Submit the analysis text. Blank text or a running analysis makes this a no-op.
    #[must_use]
    pub fn submit_analysis(mut self) -> (Self, Option<Effect>) {
        if !self.analysis.can_submit() {
            return (self, None);
        }
        self.analysis.seq += 1;
        self.analysis.analyzing = true;
        self.analysis.result = None;
        self.analysis.error = None;
        let req = AnalyzeRequest {
            seq: self.analysis.seq,
            text: self.analysis.text.clone(),
        };
        (self, Some(Effect::Analyze(req)))
    }

    /// Fold the outcome of an effect into the state.
    ///
    /// Outcomes whose token is not the latest issued on their path are dropped,
    /// so a slow response to an earlier request never replaces a newer one.
    #[must_use]
    pub fn apply(mut self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::News { seq, result } => {
                if seq != self.news.seq {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(seq, latest = self.news.seq, "discarding stale news response");
                    return self;
                }
                self.news.is_loading = false;
                match result {
                    Ok(feed) => {
                        self.news.has_loaded |= !feed.articles.is_empty();
                        self.news.active_ticker = feed.ticker;
                        self.news.articles = feed.articles;
                    }
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(kind = e.kind().as_str(), error = %e, "news fetch failed");
                        self.news.articles.clear();
                        self.news.last_error = Some(e.user_message());
                    }
                }
            }
            Outcome::Analysis { seq, result } => {
                if seq != self.analysis.seq {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(seq, latest = self.analysis.seq, "discarding stale analysis");
                    return self;
                }
                self.analysis.analyzing = false;
                match result {
                    Ok(sentiment) => self.analysis.result = Some(sentiment),
                    Err(e) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(kind = e.kind().as_str(), error = %e, "analysis failed");
                        self.analysis.error = Some(e.user_message());
                    }
                }
            }
        }
        self
    }

    /// Which of the four mutually exclusive news states to render.
    pub fn news_view(&self) -> NewsView<'_> {
        if let Some(err) = self.news.last_error.as_deref() {
            NewsView::Error(err)
        } else if self.news.is_loading && self.news.articles.is_empty() {
            NewsView::Loading
        } else if !self.news.articles.is_empty() {
            NewsView::Results(&self.news.articles)
        } else {
            NewsView::Empty
        }
    }
}
