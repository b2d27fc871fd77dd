//! Plain-text rendering of the dashboard.
//!
//! Everything here is a pure function of its inputs; colour is opt-in so the
//! output can be compared verbatim in tests.

mod badge;
mod card;
mod page;

pub use badge::{Badge, BadgeSize, SentimentStyle, style_for, style_for_raw};
pub use card::{NO_DESCRIPTION, format_published_at, render_card};
pub use page::{SKELETON_COUNT, render_analysis, render_news_view, render_page, render_prediction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Emit terminal colour codes around sentiment badges.
    pub color: bool,
}
