use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use super::registry::{StrategyKind, StrategyRegistry};
use crate::core::StrategyCache;
use crate::models::{PolarityScorer, SentimentStrategy, Translator, VaderAnalyzer};

type StrategyLoader =
    Box<dyn FnOnce() -> BoxFuture<'static, anyhow::Result<Arc<dyn SentimentStrategy>>> + Send>;

/// Collects strategy loaders and resolves them once into a [`StrategyRegistry`].
///
/// ```rust,no_run
/// use comment_sentiment::pipelines::sentiment_analysis_pipeline::*;
///
/// # struct StarModel;
/// # impl SentimentStrategy for StarModel {
/// #     fn name(&self) -> &str { "stars" }
/// #     fn classify(&self, _: &str) -> anyhow::Result<RawPrediction> { Ok(RawPrediction::new("5 stars", 0.9)) }
/// # }
/// # #[tokio::main]
/// # async fn main() {
/// let registry = StrategyRegistry::builder()
///     .multilingual_with(|| async { Ok(StarModel) })
///     .build()
///     .await;
/// assert!(registry.is_available("multilingual"));
/// # }
/// ```
pub struct StrategyRegistryBuilder {
    cache: StrategyCache,
    loaders: Vec<(StrategyKind, StrategyLoader)>,
    lexicon: Option<Arc<dyn PolarityScorer>>,
    translator: Option<Arc<dyn Translator>>,
}

impl StrategyRegistryBuilder {
    pub fn new() -> Self {
        Self {
            cache: StrategyCache::new(),
            loaders: Vec::new(),
            lexicon: None,
            translator: None,
        }
    }

    /// Share loaded strategies with other registries built from the same cache.
    pub fn cache(mut self, cache: StrategyCache) -> Self {
        self.cache = cache;
        self
    }

    /// Register an async loader for a strategy slot.
    ///
    /// The loader runs at most once per cache; a failing loader leaves the slot empty.
    pub fn strategy_with<F, Fut, S>(mut self, kind: StrategyKind, loader: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<S>> + Send + 'static,
        S: SentimentStrategy + 'static,
    {
        let loader: StrategyLoader = Box::new(move || {
            async move {
                let strategy = loader().await?;
                Ok(Arc::new(strategy) as Arc<dyn SentimentStrategy>)
            }
            .boxed()
        });
        self.loaders.retain(|(existing, _)| *existing != kind);
        self.loaders.push((kind, loader));
        self
    }

    pub fn multilingual_with<F, Fut, S>(self, loader: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<S>> + Send + 'static,
        S: SentimentStrategy + 'static,
    {
        self.strategy_with(StrategyKind::Multilingual, loader)
    }

    pub fn social_with<F, Fut, S>(self, loader: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<S>> + Send + 'static,
        S: SentimentStrategy + 'static,
    {
        self.strategy_with(StrategyKind::Social, loader)
    }

    /// Use an already constructed multilingual strategy.
    pub fn multilingual<S: SentimentStrategy + 'static>(self, strategy: S) -> Self {
        self.multilingual_with(move || async move { Ok(strategy) })
    }

    /// Use an already constructed social strategy.
    pub fn social<S: SentimentStrategy + 'static>(self, strategy: S) -> Self {
        self.social_with(move || async move { Ok(strategy) })
    }

    /// Replace the built-in VADER scorer.
    pub fn lexicon<P: PolarityScorer + 'static>(mut self, scorer: P) -> Self {
        self.lexicon = Some(Arc::new(scorer));
        self
    }

    /// Enable the translation bridge tier.
    pub fn translator<T: Translator + 'static>(mut self, translator: T) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Run (or reuse) every registered loader.
    ///
    /// Load failures never abort the build; the failed slot stays empty.
    pub async fn build(self) -> StrategyRegistry {
        let mut registry = StrategyRegistry {
            multilingual: None,
            social: None,
            lexicon: self
                .lexicon
                .unwrap_or_else(|| Arc::new(VaderAnalyzer::default())),
            translator: self.translator,
        };

        for (kind, loader) in self.loaders {
            match self
                .cache
                .get_or_load::<Arc<dyn SentimentStrategy>, _, _>(kind.name(), loader)
                .await
            {
                Ok(strategy) => match kind {
                    StrategyKind::Multilingual => registry.multilingual = Some(strategy),
                    StrategyKind::Social => registry.social = Some(strategy),
                },
                Err(fault) => tracing::debug!(%fault, "continuing without strategy"),
            }
        }

        tracing::info!(
            available = ?registry.available(),
            translation = registry.translator.is_some(),
            "strategy registry ready"
        );
        registry
    }
}

impl Default for StrategyRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
