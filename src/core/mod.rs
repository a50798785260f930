pub mod cache;
pub mod config;
pub mod error;

pub use cache::StrategyCache;
pub use config::{CascadeConfig, LexiconLanguage, NormalizerMode, TierToggles};
pub use error::ClassificationFault;
