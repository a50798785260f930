//! Collapsing strategy vocabularies onto [`SentimentLabel`].

use super::result::SentimentLabel;

const POSITIVE_EXACT: &[&str] = &["pos", "4 stars", "5 stars"];
const NEGATIVE_EXACT: &[&str] = &["neg", "1 star", "2 stars"];

/// Map a raw strategy label onto the canonical sentiment.
///
/// Star ratings, `POS`/`NEG` tags and `positive`/`negative`/`neutral` names
/// are understood case-insensitively; anything unrecognised (including
/// `"3 stars"`) is neutral.
pub fn normalize_label(raw: &str) -> SentimentLabel {
    let label = raw.trim().to_lowercase();
    if label.contains("positive") || POSITIVE_EXACT.contains(&label.as_str()) {
        SentimentLabel::Positive
    } else if label.contains("negative") || NEGATIVE_EXACT.contains(&label.as_str()) {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}
