use std::fmt::Write;

use crate::core::Sentiment;
use crate::dashboard::{AnalysisState, DashboardState, NewsView, ViewMode};
use crate::render::{
    RenderOptions,
    badge::{Badge, BadgeSize},
    card::render_card,
};

/// Number of placeholder cards shown while a query loads.
pub const SKELETON_COUNT: usize = 6;

const SKELETON_CARD: &str = "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";
const RULE: &str = "────────────────────────────────────────────────────────";

/// Render the whole dashboard for its current mode.
pub fn render_page(state: &DashboardState, opts: RenderOptions) -> String {
    let mut out = render_nav(state.mode());
    out.push('\n');
    match state.mode() {
        ViewMode::News => {
            out.push_str(&render_search_bar(state));
            out.push_str("\n\n");
            out.push_str(&render_news_view(state.news_view(), opts));
        }
        ViewMode::Custom => out.push_str(&render_analysis(state.analysis(), opts)),
    }
    out
}

fn render_nav(mode: ViewMode) -> String {
    let (news, custom) = match mode {
        ViewMode::News => ("[ Live Feed ]", "  Custom Input  "),
        ViewMode::Custom => ("  Live Feed  ", "[ Custom Input ]"),
    };
    format!("FinSense · AI Analytics    {news} {custom}\n{RULE}\n")
}

fn render_search_bar(state: &DashboardState) -> String {
    let news = state.news();
    let mut out = String::from("Market Sentiment LIVE\nReal-time financial news analyzed by AI.\n\n");
    let input = news.ticker_input();
    let shown = if input.is_empty() {
        "Search Ticker (e.g. BTC, NVDA)..."
    } else {
        input
    };
    let _ = write!(out, "Search: {shown}");
    if news.is_loading() {
        out.push_str("  ⟳ loading");
    }
    if let Some(t) = news.active_ticker() {
        let _ = write!(out, "\nShowing: {t}");
    }
    out
}

/// Render one of the four news states.
pub fn render_news_view(view: NewsView<'_>, opts: RenderOptions) -> String {
    match view {
        NewsView::Error(message) => {
            format!("System Error\n{message}\n\n[r] Retry Connection\n")
        }
        NewsView::Loading => {
            let mut out = String::new();
            for _ in 0..SKELETON_COUNT {
                out.push_str(SKELETON_CARD);
                out.push_str("\n\n");
            }
            out
        }
        NewsView::Results(articles) => {
            let mut out = String::new();
            for (idx, article) in articles.iter().enumerate() {
                let _ = writeln!(out, "{:>2}. {}\n", idx + 1, render_card(article, opts).replace('\n', "\n    "));
            }
            out
        }
        NewsView::Empty => String::from(
            "No Intelligence Found\nSystem could not retrieve news for this query.\n",
        ),
    }
}

/// Render the custom analysis form and its result area.
pub fn render_analysis(analysis: &AnalysisState, opts: RenderOptions) -> String {
    let mut out = String::from(
        "Custom Analysis\nPaste a headline, tweet, or financial report snippet below to run it through the AI model instantly.\n\n",
    );
    let text = analysis.text();
    if text.is_empty() {
        out.push_str("> E.g., Tesla stock surges after record-breaking quarterly earnings report...\n");
    } else {
        let _ = writeln!(out, "> {text}");
    }

    let button = if analysis.is_analyzing() {
        "⟳ Processing Neural Network..."
    } else if analysis.can_submit() {
        "[ Run AI Model ]"
    } else {
        "( Run AI Model )"
    };
    let _ = writeln!(out, "\n{button}");

    if let Some(result) = analysis.result() {
        let _ = write!(out, "\n{RULE}\n{}", render_prediction(result, opts));
    } else if let Some(err) = analysis.error() {
        let _ = write!(out, "\n{RULE}\nAnalysis Failed\n{err}\n");
    }
    out
}

/// Render a single prediction: heading, large badge and explanatory sentence.
pub fn render_prediction(sentiment: &Sentiment, opts: RenderOptions) -> String {
    let badge = Badge::new(sentiment, BadgeSize::Large);
    format!(
        "Predicted Sentiment\n{}\nThe model is {}% confident that this text carries a {} sentiment.\n",
        badge.paint(opts.color),
        sentiment.confidence_pct(),
        sentiment.label,
    )
}
