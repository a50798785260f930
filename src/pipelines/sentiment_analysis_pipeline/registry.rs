use std::sync::Arc;

use super::builder::StrategyRegistryBuilder;
use crate::models::{PolarityScorer, SentimentStrategy, Translator, VaderAnalyzer};

/// Name under which the always-present lexicon scorer is reachable.
pub const LEXICON: &str = "lexicon";

/// The model-backed strategy slots of a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// General-purpose multilingual model with a star-rating vocabulary.
    Multilingual,
    /// Model tuned on short informal English text.
    Social,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 2] = [StrategyKind::Multilingual, StrategyKind::Social];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Multilingual => "multilingual",
            Self::Social => "social",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// The strategies loaded for this process, built once and shared with every cascade.
///
/// Missing strategies are simply absent; the lexicon scorer is always there.
pub struct StrategyRegistry {
    pub(crate) multilingual: Option<Arc<dyn SentimentStrategy>>,
    pub(crate) social: Option<Arc<dyn SentimentStrategy>>,
    pub(crate) lexicon: Arc<dyn PolarityScorer>,
    pub(crate) translator: Option<Arc<dyn Translator>>,
}

impl StrategyRegistry {
    pub fn builder() -> StrategyRegistryBuilder {
        StrategyRegistryBuilder::new()
    }

    /// A registry with only the built-in lexicon scorer.
    pub fn lexicon_only() -> Self {
        Self {
            multilingual: None,
            social: None,
            lexicon: Arc::new(VaderAnalyzer::default()),
            translator: None,
        }
    }

    pub fn strategy(&self, kind: StrategyKind) -> Option<&dyn SentimentStrategy> {
        match kind {
            StrategyKind::Multilingual => self.multilingual.as_deref(),
            StrategyKind::Social => self.social.as_deref(),
        }
    }

    /// Look a model strategy up by name; unknown and unloaded names give `None`.
    pub fn get(&self, name: &str) -> Option<&dyn SentimentStrategy> {
        StrategyKind::from_name(name).and_then(|kind| self.strategy(kind))
    }

    pub fn lexicon(&self) -> &dyn PolarityScorer {
        self.lexicon.as_ref()
    }

    pub fn translator(&self) -> Option<&dyn Translator> {
        self.translator.as_deref()
    }

    /// Whether `name` would be attempted: a loaded strategy or the lexicon.
    pub fn is_available(&self, name: &str) -> bool {
        name == LEXICON || self.get(name).is_some()
    }

    /// Names of everything usable, in tier order.
    pub fn available(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = StrategyKind::ALL
            .into_iter()
            .filter(|kind| self.strategy(*kind).is_some())
            .map(|kind| kind.name())
            .collect();
        names.push(LEXICON);
        names
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::lexicon_only()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("available", &self.available())
            .field("translation", &self.translator.is_some())
            .finish()
    }
}
