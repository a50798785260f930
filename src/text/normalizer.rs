//! Cleanup of raw comment text before classification.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::core::NormalizerMode;

static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").expect("valid mention pattern"));
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").expect("valid hashtag pattern"));
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").expect("valid url pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Emoji the lightweight mode understands, with the word each one becomes.
pub const LIGHTWEIGHT_EMOJI: &[(&str, &str)] = &[
    ("😊", "happy"),
    ("😀", "happy"),
    ("😃", "happy"),
    ("😄", "happy"),
    ("😁", "happy"),
    ("😍", "love"),
    ("🥰", "love"),
    ("😘", "love"),
    ("💕", "love"),
    ("❤️", "love"),
    ("😢", "sad"),
    ("😭", "crying"),
    ("😞", "sad"),
    ("☹️", "sad"),
    ("😠", "angry"),
    ("😡", "angry"),
    ("🤬", "angry"),
    ("😤", "angry"),
    ("👍", "good"),
    ("👌", "good"),
    ("✅", "good"),
    ("💯", "perfect"),
    ("👎", "bad"),
    ("❌", "bad"),
    ("💩", "bad"),
];

/// Turns raw comment text into classifier-ready text.
///
/// Steps, in order: trim, emoji to words (per [`NormalizerMode`]), drop
/// `@mentions`, `#hashtags` and `http…` links, collapse whitespace, trim.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    mode: NormalizerMode,
}

impl TextNormalizer {
    pub fn new(mode: NormalizerMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> NormalizerMode {
        self.mode
    }

    /// Normalize possibly-absent text; `None` and blank input yield `""`.
    pub fn normalize_opt(&self, text: Option<&str>) -> String {
        text.map(|t| self.normalize(t)).unwrap_or_default()
    }

    pub fn normalize(&self, text: &str) -> String {
        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }

        let text = match self.mode {
            NormalizerMode::Full => demojize(text),
            NormalizerMode::Lightweight => replace_common_emoji(text),
        };

        let text = MENTION.replace_all(&text, "");
        let text = HASHTAG.replace_all(&text, "");
        let text = URL.replace_all(&text, "");
        let text = WHITESPACE.replace_all(&text, " ");
        text.trim().to_string()
    }
}

/// Replace every emoji grapheme with `:its_name:`.
fn demojize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        if grapheme.is_ascii() {
            out.push_str(grapheme);
            continue;
        }
        let emoji = emojis::get(grapheme)
            .or_else(|| emojis::get(grapheme.trim_end_matches('\u{fe0f}')));
        match emoji {
            Some(emoji) => {
                out.push(':');
                out.push_str(&emoji.name().replace(' ', "_"));
                out.push(':');
            }
            None => out.push_str(grapheme),
        }
    }
    out
}

fn replace_common_emoji(text: &str) -> String {
    LIGHTWEIGHT_EMOJI
        .iter()
        .fold(text.to_string(), |acc, (emoji, word)| {
            if acc.contains(emoji) {
                acc.replace(emoji, &format!(" {word} "))
            } else {
                acc
            }
        })
}
