use std::sync::Arc;

use super::labels::normalize_label;
use super::registry::{StrategyKind, StrategyRegistry};
use super::result::{ClassificationMethod, SentimentLabel, SentimentResult};
use crate::core::{CascadeConfig, ClassificationFault, LexiconLanguage};
use crate::models::{translate_to_english, RawPrediction};
use crate::pipelines::batch::{BatchAggregator, BatchProgress, BatchReport, Comment};
use crate::text::{LanguageDetector, TextNormalizer, WhatlangDetector, FALLBACK_LANGUAGE};

/// Model-backed tiers, strongest first. The lexicon tier always follows.
const MODEL_TIERS: [ClassificationMethod; 3] = [
    ClassificationMethod::Multilingual,
    ClassificationMethod::Social,
    ClassificationMethod::TranslatedSocial,
];

/// Classifies comments by trying each tier in order until one answers.
pub struct SentimentCascade {
    registry: Arc<StrategyRegistry>,
    config: CascadeConfig,
    normalizer: TextNormalizer,
    detector: Box<dyn LanguageDetector>,
}

impl SentimentCascade {
    pub fn new(registry: Arc<StrategyRegistry>, config: CascadeConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(config.normalizer),
            detector: Box::new(WhatlangDetector::new(config.detector_min_chars)),
            registry,
            config,
        }
    }

    /// Lexicon-only cascade with the small emoji table; loads nothing.
    pub fn lightweight() -> Self {
        Self::new(
            Arc::new(StrategyRegistry::lexicon_only()),
            CascadeConfig::lightweight(),
        )
    }

    /// Replace the default `whatlang` detector.
    pub fn with_detector<D: LanguageDetector + 'static>(mut self, detector: D) -> Self {
        self.detector = Box::new(detector);
        self
    }

    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    /// Classify one comment. Never fails: tier faults fall through to the
    /// lexicon tier, and a lexicon fault yields [`SentimentResult::error`].
    pub fn classify(&self, text: &str) -> SentimentResult {
        if text.trim().is_empty() {
            return SentimentResult::empty();
        }

        let processed = self.normalizer.normalize(text);
        let language = self.detector.detect(&processed);

        let tokens = processed.split_whitespace().count();
        if tokens < self.config.min_tokens {
            tracing::debug!(tokens, "text too short for model tiers");
            return self.lexicon_or_error(&processed, &language);
        }

        for tier in MODEL_TIERS {
            if !self.tier_applies(tier, &language) {
                continue;
            }
            match self.run_tier(tier, &processed, &language) {
                Ok(result) => return result,
                Err(fault) if fault.is_expected() => {
                    tracing::debug!(%tier, %fault, "falling through");
                }
                Err(fault) => {
                    tracing::warn!(%tier, %fault, "falling through");
                }
            }
        }

        self.lexicon_or_error(&processed, &language)
    }

    pub fn classify_comment(&self, comment: &Comment) -> SentimentResult {
        self.classify(&comment.text)
    }

    /// Classify comments in order and summarize them.
    pub fn classify_batch<'a, I>(&self, comments: I) -> BatchReport
    where
        I: IntoIterator<Item = &'a Comment>,
    {
        self.classify_batch_with_progress(comments, |_| {})
    }

    /// Like [`classify_batch`](Self::classify_batch), calling `on_progress`
    /// after each comment completes.
    pub fn classify_batch_with_progress<'a, I, F>(&self, comments: I, mut on_progress: F) -> BatchReport
    where
        I: IntoIterator<Item = &'a Comment>,
        F: FnMut(BatchProgress),
    {
        let comments: Vec<&Comment> = comments.into_iter().collect();
        let total = comments.len();
        let mut aggregator = BatchAggregator::new();
        let mut results = Vec::with_capacity(total);

        for (index, comment) in comments.into_iter().enumerate() {
            let result = self.classify_comment(comment);
            aggregator.push(&result);
            results.push(result);
            on_progress(BatchProgress {
                completed: index + 1,
                total,
            });
        }

        let summary = aggregator.finish();
        tracing::info!(
            total = summary.total_comments,
            average_confidence = summary.average_confidence,
            "batch classified"
        );
        BatchReport { results, summary }
    }

    /// Classify plain texts in order.
    pub fn classify_texts<I, S>(&self, texts: I) -> Vec<SentimentResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts.into_iter().map(|t| self.classify(t.as_ref())).collect()
    }

    /// Routing rules; a tier that does not apply is skipped, not failed.
    fn tier_applies(&self, tier: ClassificationMethod, language: &str) -> bool {
        let tiers = &self.config.tiers;
        match tier {
            ClassificationMethod::Multilingual => tiers.multilingual,
            ClassificationMethod::Social => tiers.social && language == FALLBACK_LANGUAGE,
            ClassificationMethod::TranslatedSocial => {
                tiers.translation
                    && language != FALLBACK_LANGUAGE
                    && self.registry.translator().is_some()
                    && self.registry.strategy(StrategyKind::Social).is_some()
            }
            _ => false,
        }
    }

    fn run_tier(
        &self,
        tier: ClassificationMethod,
        text: &str,
        language: &str,
    ) -> Result<SentimentResult, ClassificationFault> {
        match tier {
            ClassificationMethod::Multilingual => {
                let prediction = self.invoke(StrategyKind::Multilingual, text)?;
                Ok(self.to_result(&prediction, 1.0, tier, language))
            }
            ClassificationMethod::Social => {
                let prediction = self.invoke(StrategyKind::Social, text)?;
                Ok(self.to_result(&prediction, 1.0, tier, language))
            }
            ClassificationMethod::TranslatedSocial => {
                let translator = self
                    .registry
                    .translator()
                    .ok_or_else(|| ClassificationFault::unavailable("translator"))?;
                let translated = translate_to_english(translator, text)
                    .map_err(|err| ClassificationFault::Translation(format!("{err:#}")))?;
                let prediction = self.invoke(StrategyKind::Social, &translated)?;
                Ok(self.to_result(&prediction, self.config.translation_penalty, tier, language))
            }
            other => Err(ClassificationFault::unavailable(other.as_str())),
        }
    }

    fn invoke(&self, kind: StrategyKind, text: &str) -> Result<RawPrediction, ClassificationFault> {
        let strategy = self
            .registry
            .strategy(kind)
            .ok_or_else(|| ClassificationFault::unavailable(kind.name()))?;
        strategy
            .classify(text)
            .map_err(|err| ClassificationFault::inference(kind.name(), &err))
    }

    fn to_result(
        &self,
        prediction: &RawPrediction,
        penalty: f64,
        method: ClassificationMethod,
        language: &str,
    ) -> SentimentResult {
        SentimentResult::new(
            normalize_label(&prediction.label),
            f64::from(prediction.score) * penalty,
            method,
            language,
        )
    }

    fn lexicon_or_error(&self, text: &str, language: &str) -> SentimentResult {
        self.lexicon_tier(text, language).unwrap_or_else(|fault| {
            tracing::warn!(%fault, "lexicon tier failed");
            SentimentResult::error()
        })
    }

    /// Terminal tier: thresholds on the compound score.
    fn lexicon_tier(&self, text: &str, language: &str) -> Result<SentimentResult, ClassificationFault> {
        let scores = self
            .registry
            .lexicon()
            .polarity_scores(text)
            .map_err(|err| ClassificationFault::Lexicon(format!("{err:#}")))?;
        let compound = scores.compound;
        if !compound.is_finite() {
            return Err(ClassificationFault::Lexicon(format!(
                "non-finite compound score {compound}"
            )));
        }

        let (label, confidence) = if compound >= self.config.positive_threshold {
            (SentimentLabel::Positive, compound.abs())
        } else if compound <= self.config.negative_threshold {
            (SentimentLabel::Negative, compound.abs())
        } else {
            // neutral confidence grows as the score approaches zero
            (SentimentLabel::Neutral, 1.0 - compound.abs())
        };

        let language = match self.config.lexicon_language {
            LexiconLanguage::Fixed => FALLBACK_LANGUAGE,
            LexiconLanguage::Detected => language,
        };
        Ok(SentimentResult::new(
            label,
            confidence,
            ClassificationMethod::Lexicon,
            language,
        ))
    }
}

impl std::fmt::Debug for SentimentCascade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentCascade")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
