// Stub strategies shared by the integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use comment_sentiment::core::ClassificationFault;
use comment_sentiment::models::{PolarityScorer, PolarityScores, RawPrediction, SentimentStrategy, Translator};
use comment_sentiment::text::LanguageDetector;

/// A strategy with a canned answer that records what it was asked.
#[derive(Clone)]
pub struct StubStrategy {
    name: &'static str,
    answer: Option<(&'static str, f32)>,
    inputs: Arc<Mutex<Vec<String>>>,
}

impl StubStrategy {
    pub fn answering(name: &'static str, label: &'static str, score: f32) -> Self {
        Self {
            name,
            answer: Some((label, score)),
            inputs: Arc::default(),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            answer: None,
            inputs: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

impl SentimentStrategy for StubStrategy {
    fn name(&self) -> &str {
        self.name
    }

    fn classify(&self, text: &str) -> anyhow::Result<RawPrediction> {
        self.inputs.lock().unwrap().push(text.to_string());
        match self.answer {
            Some((label, score)) => Ok(RawPrediction::new(label, score)),
            None => anyhow::bail!("{} inference blew up", self.name),
        }
    }
}

/// Labels by keyword: "love" positive, "hate" negative, otherwise neutral.
pub struct KeywordStrategy;

impl SentimentStrategy for KeywordStrategy {
    fn name(&self) -> &str {
        "keyword"
    }

    fn classify(&self, text: &str) -> anyhow::Result<RawPrediction> {
        let label = if text.contains("love") {
            "positive"
        } else if text.contains("hate") {
            "negative"
        } else {
            "neutral"
        };
        Ok(RawPrediction::new(label, 0.75))
    }
}

/// Prefixes text with `[en]`, or fails.
#[derive(Clone, Default)]
pub struct StubTranslator {
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl StubTranslator {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Translator for StubTranslator {
    fn translate(&self, text: &str, target_lang: &str) -> anyhow::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("translation service unreachable");
        }
        Ok(format!("[{target_lang}] {text}"))
    }
}

/// Reports the same language for every text.
pub struct FixedLanguage(pub &'static str);

impl LanguageDetector for FixedLanguage {
    fn try_detect(&self, _text: &str) -> Result<String, ClassificationFault> {
        Ok(self.0.to_string())
    }
}

/// A lexicon scorer that always fails.
pub struct BrokenLexicon;

impl PolarityScorer for BrokenLexicon {
    fn polarity_scores(&self, _text: &str) -> anyhow::Result<PolarityScores> {
        anyhow::bail!("lexicon file corrupted")
    }
}
