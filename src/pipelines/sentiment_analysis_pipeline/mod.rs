//! Sentiment classification cascade for short user comments.
//!
//! A comment is normalized, its language detected, and then handed to a
//! fixed sequence of tiers until one of them answers:
//!
//! 1. the multilingual strategy,
//! 2. the social-media strategy (English only),
//! 3. translation to English followed by the social strategy, with its score
//!    scaled down by the configured penalty,
//! 4. the VADER lexicon, which always answers.
//!
//! Comments with fewer than two words go straight to the lexicon. Whatever
//! vocabulary a strategy speaks ("4 stars", "NEG", "positive") is collapsed
//! onto [`SentimentLabel`].
//!
//! ## Main Types
//!
//! - [`SentimentCascade`] - Classifies comments and batches of comments
//! - [`StrategyRegistry`] - The strategies loaded for this process
//! - [`StrategyRegistryBuilder`] - Loads strategies once through a [`StrategyCache`]
//! - [`SentimentResult`] - Label, confidence, producing tier and language of one comment
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use comment_sentiment::pipelines::sentiment_analysis_pipeline::*;
//!
//! # struct SocialModel;
//! # impl SocialModel { async fn load() -> anyhow::Result<Self> { Ok(Self) } }
//! # impl SentimentStrategy for SocialModel {
//! #     fn name(&self) -> &str { "social" }
//! #     fn classify(&self, _: &str) -> anyhow::Result<RawPrediction> { Ok(RawPrediction::new("positive", 0.97)) }
//! # }
//! # #[tokio::main]
//! # async fn main() {
//! let registry = StrategyRegistry::builder()
//!     .social_with(SocialModel::load)
//!     .build()
//!     .await;
//!
//! let cascade = SentimentCascade::new(Arc::new(registry), CascadeConfig::advanced());
//! let result = cascade.classify("I love this channel, keep it up!");
//! println!("{} ({:.2}) via {}", result.label, result.confidence, result.method);
//! # }
//! ```

pub mod builder;
pub mod labels;
pub mod pipeline;
pub mod registry;
pub mod result;

pub use builder::StrategyRegistryBuilder;
pub use labels::normalize_label;
pub use pipeline::SentimentCascade;
pub use registry::{StrategyKind, StrategyRegistry, LEXICON};
pub use result::{ClassificationMethod, SentimentLabel, SentimentResult};

pub use crate::core::{CascadeConfig, LexiconLanguage, NormalizerMode, StrategyCache, TierToggles};
pub use crate::models::{PolarityScorer, PolarityScores, RawPrediction, SentimentStrategy, Translator};
