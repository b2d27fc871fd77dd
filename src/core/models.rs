use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity assigned to a piece of text by the classifier.
///
/// Parsing is case-insensitive and never fails: anything other than the three
/// canonical labels becomes [`SentimentLabel::Neutral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// Parse a label from the wire, falling back to `Neutral` for unknown values.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" => Self::Positive,
            "negative" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    /// The lowercase canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for SentimentLabel {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classification result: label plus the model's confidence in `[0, 1]`.
///
/// The score is not validated; display code clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    /// Confidence as a whole percentage, rounded and clamped to `0..=100`.
    #[must_use]
    pub fn confidence_pct(&self) -> u8 {
        if !self.score.is_finite() {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (self.score * 100.0).round().clamp(0.0, 100.0) as u8;
        pct
    }
}
