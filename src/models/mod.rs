//! Capabilities the cascade classifies through.
//!
//! Model-backed strategies (a multilingual star-rating model, a social-media
//! tuned model) and translators are supplied by the caller; the crate ships
//! the lexicon fallback, [`VaderAnalyzer`], which needs no model at all.

pub mod lexicon;
pub mod vader;

pub use lexicon::Lexicon;
pub use vader::VaderAnalyzer;

use serde::{Deserialize, Serialize};

/// What a strategy says about one text, in its own vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    pub label: String,
    pub score: f32,
}

impl RawPrediction {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// A model that labels text, e.g. `"4 stars"` or `"negative"`, with a score in `[0, 1]`.
pub trait SentimentStrategy: Send + Sync {
    fn name(&self) -> &str;

    fn classify(&self, text: &str) -> anyhow::Result<RawPrediction>;
}

/// VADER-style polarity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Aggregate polarity in `[-1, 1]`.
    pub compound: f64,
}

/// A deterministic scorer used as the terminal tier.
pub trait PolarityScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> anyhow::Result<PolarityScores>;
}

/// Machine translation, e.g. a hosted translation API.
pub trait Translator: Send + Sync {
    fn translate(&self, text: &str, target_lang: &str) -> anyhow::Result<String>;
}

/// Translate `text` into English, leaving blank input untouched.
pub fn translate_to_english(translator: &dyn Translator, text: &str) -> anyhow::Result<String> {
    if text.trim().is_empty() {
        return Ok(text.to_string());
    }
    translator.translate(text, "en")
}
