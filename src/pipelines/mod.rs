// Pipeline modules organized by functionality
pub mod batch;
pub mod sentiment_analysis_pipeline;

pub use batch::{BatchReport, BatchSummary, Comment};
pub use sentiment_analysis_pipeline::*;
