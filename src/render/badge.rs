use crossterm::style::{Color, Stylize};

use crate::core::{Sentiment, SentimentLabel};

/// Fixed presentation for one sentiment label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentStyle {
    pub label: SentimentLabel,
    pub icon: &'static str,
    pub color: Color,
}

const POSITIVE: SentimentStyle = SentimentStyle {
    label: SentimentLabel::Positive,
    icon: "▲",
    color: Color::Green,
};

const NEGATIVE: SentimentStyle = SentimentStyle {
    label: SentimentLabel::Negative,
    icon: "▼",
    color: Color::Red,
};

const NEUTRAL: SentimentStyle = SentimentStyle {
    label: SentimentLabel::Neutral,
    icon: "■",
    color: Color::Blue,
};

/// The style for a parsed label.
#[must_use]
pub const fn style_for(label: SentimentLabel) -> SentimentStyle {
    match label {
        SentimentLabel::Positive => POSITIVE,
        SentimentLabel::Negative => NEGATIVE,
        SentimentLabel::Neutral => NEUTRAL,
    }
}

/// The style for a raw label string; unknown labels get the neutral style.
#[must_use]
pub fn style_for_raw(raw: &str) -> SentimentStyle {
    style_for(SentimentLabel::parse(raw))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeSize {
    /// Inline, used on news cards.
    #[default]
    Small,
    /// Framed, used for the analysis result.
    Large,
}

/// A rendered sentiment indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub style: SentimentStyle,
    pub text: String,
}

impl Badge {
    pub fn new(sentiment: &Sentiment, size: BadgeSize) -> Self {
        let style = style_for(sentiment.label);
        let label = style.label.as_str().to_ascii_uppercase();
        let pct = sentiment.confidence_pct();
        let text = match size {
            BadgeSize::Small => format!("{} {label} {pct}%", style.icon),
            BadgeSize::Large => format!("[ {} {label} | {pct}% ]", style.icon),
        };
        Self { style, text }
    }

    /// The badge text, wrapped in terminal colour codes when `color` is set.
    pub fn paint(&self, color: bool) -> String {
        if color {
            self.text.as_str().with(self.style.color).bold().to_string()
        } else {
            self.text.clone()
        }
    }
}
