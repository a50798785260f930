pub mod core;
pub mod loaders;
pub mod models;
pub mod pipelines;
pub mod text;

// Re-export the types most callers need
pub use crate::core::{CascadeConfig, ClassificationFault, StrategyCache};
pub use models::{RawPrediction, SentimentStrategy, Translator, VaderAnalyzer};
pub use pipelines::batch::{BatchReport, BatchSummary, Comment};
pub use pipelines::sentiment_analysis_pipeline::{
    SentimentCascade, SentimentLabel, SentimentResult, StrategyRegistry,
};
