use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipelines::batch::UNKNOWN;

/// The three sentiments every strategy vocabulary collapses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Parse one of the three canonical names, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "positive" => Some(Self::Positive),
            "negative" => Some(Self::Negative),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which tier of the cascade produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassificationMethod {
    #[serde(rename = "multilingual")]
    Multilingual,
    #[serde(rename = "social")]
    Social,
    #[serde(rename = "translated+social")]
    TranslatedSocial,
    #[serde(rename = "vader")]
    Lexicon,
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "error")]
    Error,
}

impl ClassificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Multilingual => "multilingual",
            Self::Social => "social",
            Self::TranslatedSocial => "translated+social",
            Self::Lexicon => "vader",
            Self::Empty => "empty",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ClassificationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Sentiment of one comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub method: ClassificationMethod,
    pub language: String,
}

impl SentimentResult {
    /// Build a result, clamping `confidence` into `[0, 1]` (NaN becomes 0).
    pub fn new(
        label: SentimentLabel,
        confidence: f64,
        method: ClassificationMethod,
        language: impl Into<String>,
    ) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 1.0)
        };
        Self {
            label,
            confidence,
            method,
            language: language.into(),
        }
    }

    /// Result for a comment with nothing to classify.
    pub fn empty() -> Self {
        Self::new(SentimentLabel::Neutral, 0.0, ClassificationMethod::Empty, UNKNOWN)
    }

    /// Result when even the lexicon tier failed.
    pub fn error() -> Self {
        Self::new(SentimentLabel::Neutral, 0.0, ClassificationMethod::Error, UNKNOWN)
    }
}
