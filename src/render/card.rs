use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::news::Article;
use crate::render::{
    RenderOptions,
    badge::{Badge, BadgeSize},
};

pub const NO_DESCRIPTION: &str = "No description available for this article.";

const DISPLAY_FORMAT: &str = "%b %d • %H:%M";

/// Format a publication timestamp as `Jan 05 • 14:30` (UTC).
///
/// Anything that does not parse is returned unchanged.
pub fn format_published_at(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_string(),
        |dt| dt.format(DISPLAY_FORMAT).to_string(),
    )
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Render one news card.
pub fn render_card(article: &Article, opts: RenderOptions) -> String {
    let description = article
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(NO_DESCRIPTION);
    let badge = Badge::new(&article.sentiment, BadgeSize::Small);

    format!(
        "{source} · {date}\n{title}\n{description}\n{badge}  {url}",
        source = article.source,
        date = format_published_at(&article.published_at),
        title = article.title,
        badge = badge.paint(opts.color),
        url = article.url,
    )
}
