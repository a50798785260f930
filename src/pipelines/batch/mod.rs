//! Batch-level aggregation of per-comment results.
//!
//! ```rust
//! use comment_sentiment::pipelines::batch::Comment;
//! use comment_sentiment::pipelines::sentiment_analysis_pipeline::{SentimentCascade, SentimentLabel};
//!
//! let cascade = SentimentCascade::lightweight();
//! let comments = vec![
//!     Comment::new("ana", "I love this 😍"),
//!     Comment::new("ben", "worst video ever, total waste of time"),
//!     Comment::new("cy", "I love it, great work"),
//! ];
//! let report = cascade.classify_batch(&comments);
//! assert_eq!(report.results.len(), 3);
//! assert_eq!(report.summary.overall(), SentimentLabel::Positive);
//! ```

pub mod aggregator;

pub use aggregator::{BatchAggregator, BatchSummary, ResultRecord, UNKNOWN};

use serde::{Deserialize, Serialize};

use crate::pipelines::sentiment_analysis_pipeline::SentimentResult;

/// One user comment as handed over by the ingestion layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
}

impl Comment {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Reported after each comment of a batch completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchProgress {
    pub completed: usize,
    pub total: usize,
}

impl BatchProgress {
    /// Completed fraction in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }
}

/// Per-comment results, in input order, and their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub results: Vec<SentimentResult>,
    pub summary: BatchSummary,
}
