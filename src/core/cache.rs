//! Load-once caching for classification strategies.
//!
//! Loading a model strategy (downloading weights, building a tokenizer) is
//! expensive and must happen at most once per process. [`StrategyCache`] keys
//! loaded instances by type and name, remembers failed loads so they are not
//! retried, and hands out clones that share the underlying instance.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::error::ClassificationFault;

type CacheKey = (TypeId, String);

/// Outcome of a load attempt, kept for the lifetime of the cache.
enum CacheEntry {
    Loaded(Arc<dyn Any + Send + Sync>),
    Unavailable(String),
}

/// A cloneable handle to a shared strategy cache.
///
/// Clones share the same storage, so a registry built twice from the same
/// handle reuses the instances loaded the first time.
#[derive(Clone)]
pub struct StrategyCache {
    entries: Arc<Mutex<HashMap<CacheKey, CacheEntry>>>,
}

impl StrategyCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get a cached instance or run `loader` to produce it.
    ///
    /// A loader that fails is recorded as unavailable; later calls for the
    /// same key return [`ClassificationFault::ModelUnavailable`] without
    /// running their loader.
    ///
    /// # Type Parameters
    /// * `M` - The cached value, typically an `Arc<dyn SentimentStrategy>`
    pub async fn get_or_load<M, Fut, F>(&self, key: &str, loader: F) -> Result<M, ClassificationFault>
    where
        M: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<M>>,
    {
        let cache_key = (TypeId::of::<M>(), key.to_string());

        // Held across the load so concurrent callers never load twice.
        let mut entries = self.entries.lock().await;
        match entries.get(&cache_key) {
            Some(CacheEntry::Loaded(cached)) => {
                if let Some(value) = cached.downcast_ref::<M>() {
                    return Ok(value.clone());
                }
            }
            Some(CacheEntry::Unavailable(reason)) => {
                tracing::debug!(strategy = key, %reason, "strategy previously failed to load");
                return Err(ClassificationFault::unavailable(key));
            }
            None => {}
        }

        match loader().await {
            Ok(value) => {
                entries.insert(
                    cache_key,
                    CacheEntry::Loaded(Arc::new(value.clone()) as Arc<dyn Any + Send + Sync>),
                );
                Ok(value)
            }
            Err(err) => {
                tracing::warn!(strategy = key, error = %format!("{err:#}"), "strategy failed to load");
                entries.insert(cache_key, CacheEntry::Unavailable(format!("{err:#}")));
                Err(ClassificationFault::unavailable(key))
            }
        }
    }

    /// Forget every loaded and failed entry.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Number of keys with a recorded outcome, loaded or not.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for StrategyCache {
    fn default() -> Self {
        Self::new()
    }
}
