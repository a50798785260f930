use serde::{Deserialize, Serialize};

/// How emoji are turned into words before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizerMode {
    /// Every emoji becomes its `:unicode_name:` token.
    #[default]
    Full,
    /// Only a small table of common emoji becomes a sentiment-bearing word.
    Lightweight,
}

/// Which language the lexicon tier reports in its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconLanguage {
    /// Always `"en"`, matching historical output.
    #[default]
    Fixed,
    /// The language detected for the comment.
    Detected,
}

/// Toggles for the model-backed tiers. The lexicon tier cannot be disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierToggles {
    pub multilingual: bool,
    pub social: bool,
    pub translation: bool,
}

impl Default for TierToggles {
    fn default() -> Self {
        Self {
            multilingual: true,
            social: true,
            translation: true,
        }
    }
}

impl TierToggles {
    pub fn none() -> Self {
        Self {
            multilingual: false,
            social: false,
            translation: false,
        }
    }
}

/// Runtime configuration of a [`SentimentCascade`](crate::pipelines::sentiment_analysis_pipeline::SentimentCascade).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    pub normalizer: NormalizerMode,
    pub tiers: TierToggles,
    /// Comments with fewer whitespace tokens than this go straight to the lexicon tier.
    pub min_tokens: usize,
    /// Multiplier applied to scores obtained through the translation bridge.
    pub translation_penalty: f64,
    /// Compound scores at or above this are positive.
    pub positive_threshold: f64,
    /// Compound scores at or below this are negative.
    pub negative_threshold: f64,
    pub lexicon_language: LexiconLanguage,
    /// Texts with fewer alphabetic characters than this are not worth detecting.
    pub detector_min_chars: usize,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self::advanced()
    }
}

impl CascadeConfig {
    /// Every tier enabled, full emoji names.
    pub fn advanced() -> Self {
        Self {
            normalizer: NormalizerMode::Full,
            tiers: TierToggles::default(),
            min_tokens: 2,
            translation_penalty: 0.8,
            positive_threshold: 0.05,
            negative_threshold: -0.05,
            lexicon_language: LexiconLanguage::Fixed,
            detector_min_chars: 3,
        }
    }

    /// Lexicon tier only, with the small emoji table.
    pub fn lightweight() -> Self {
        Self {
            normalizer: NormalizerMode::Lightweight,
            tiers: TierToggles::none(),
            ..Self::advanced()
        }
    }

    pub fn with_normalizer(mut self, mode: NormalizerMode) -> Self {
        self.normalizer = mode;
        self
    }

    pub fn with_tiers(mut self, tiers: TierToggles) -> Self {
        self.tiers = tiers;
        self
    }

    pub fn with_lexicon_language(mut self, policy: LexiconLanguage) -> Self {
        self.lexicon_language = policy;
        self
    }

    /// Reject values that would break the `[0, 1]` confidence contract.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.translation_penalty) {
            anyhow::bail!(
                "translation_penalty must be within [0, 1], got {}",
                self.translation_penalty
            );
        }
        if self.negative_threshold > self.positive_threshold {
            anyhow::bail!(
                "negative_threshold ({}) must not exceed positive_threshold ({})",
                self.negative_threshold,
                self.positive_threshold
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lightweight_is_lexicon_only() {
        let cfg = CascadeConfig::lightweight();
        assert_eq!(cfg.tiers, TierToggles::none());
        assert_eq!(cfg.normalizer, NormalizerMode::Lightweight);
        assert_eq!(cfg.min_tokens, 2);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: CascadeConfig =
            serde_json::from_str(r#"{"normalizer": "lightweight", "tiers": {"social": false}}"#)
                .unwrap();
        assert_eq!(cfg.normalizer, NormalizerMode::Lightweight);
        assert!(cfg.tiers.multilingual);
        assert!(!cfg.tiers.social);
        assert_eq!(cfg.translation_penalty, 0.8);
        assert_eq!(cfg.lexicon_language, LexiconLanguage::Fixed);
    }

    #[test]
    fn validate_rejects_bad_penalty() {
        let cfg = CascadeConfig {
            translation_penalty: 1.5,
            ..CascadeConfig::default()
        };
        assert!(cfg.validate().is_err());
        assert!(CascadeConfig::default().validate().is_ok());
    }
}
