use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::ClassificationFault;
use crate::pipelines::sentiment_analysis_pipeline::{SentimentLabel, SentimentResult};

/// Histogram key for a missing language or method.
pub const UNKNOWN: &str = "unknown";

/// Statistics over one batch of classified comments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    /// Mean confidence, 0 for an empty batch.
    pub average_confidence: f64,
    pub language_histogram: BTreeMap<String, usize>,
    pub method_histogram: BTreeMap<String, usize>,
    pub total_comments: usize,
}

impl BatchSummary {
    pub fn from_results<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a SentimentResult>,
    {
        let mut aggregator = BatchAggregator::new();
        for result in results {
            aggregator.push(result);
        }
        aggregator.finish()
    }

    /// Summarize loosely-typed records, e.g. results reloaded from JSON.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ResultRecord>,
    {
        let mut aggregator = BatchAggregator::new();
        for record in records {
            aggregator.push_record(record);
        }
        aggregator.finish()
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive_count,
            SentimentLabel::Negative => self.negative_count,
            SentimentLabel::Neutral => self.neutral_count,
        }
    }

    /// Fraction of the batch carrying `label`, 0 for an empty batch.
    pub fn share(&self, label: SentimentLabel) -> f64 {
        if self.total_comments == 0 {
            return 0.0;
        }
        self.count(label) as f64 / self.total_comments as f64
    }

    /// Positive if positives outnumber negatives, negative for the reverse, neutral on a tie.
    pub fn overall(&self) -> SentimentLabel {
        use std::cmp::Ordering;
        match self.positive_count.cmp(&self.negative_count) {
            Ordering::Greater => SentimentLabel::Positive,
            Ordering::Less => SentimentLabel::Negative,
            Ordering::Equal => SentimentLabel::Neutral,
        }
    }
}

/// A classification result whose fields may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultRecord {
    pub label: Option<String>,
    pub confidence: Option<f64>,
    pub method: Option<String>,
    pub language: Option<String>,
}

impl From<&SentimentResult> for ResultRecord {
    fn from(result: &SentimentResult) -> Self {
        Self {
            label: Some(result.label.as_str().to_string()),
            confidence: Some(result.confidence),
            method: Some(result.method.as_str().to_string()),
            language: Some(result.language.clone()),
        }
    }
}

/// Running fold over classification results.
#[derive(Debug, Default)]
pub struct BatchAggregator {
    summary: BatchSummary,
    confidence_sum: f64,
}

impl BatchAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: &SentimentResult) {
        self.record(
            result.label,
            result.confidence,
            result.method.as_str(),
            &result.language,
        );
    }

    /// Fold a record, counting a malformed one as neutral with zero confidence.
    pub fn push_record(&mut self, record: &ResultRecord) {
        let method = record.method.as_deref().unwrap_or(UNKNOWN);
        let language = record.language.as_deref().unwrap_or(UNKNOWN);

        match Self::validate(record) {
            Ok((label, confidence)) => self.record(label, confidence, method, language),
            Err(fault) => {
                tracing::warn!(%fault, "counting record as neutral");
                self.record(SentimentLabel::Neutral, 0.0, method, language);
            }
        }
    }

    fn validate(record: &ResultRecord) -> Result<(SentimentLabel, f64), ClassificationFault> {
        let raw = record
            .label
            .as_deref()
            .ok_or_else(|| ClassificationFault::MalformedResult("missing label".into()))?;
        let label = SentimentLabel::parse(raw).ok_or_else(|| {
            ClassificationFault::MalformedResult(format!("unrecognised label '{raw}'"))
        })?;
        let confidence = record
            .confidence
            .filter(|c| c.is_finite())
            .ok_or_else(|| ClassificationFault::MalformedResult("missing confidence".into()))?;
        Ok((label, confidence.clamp(0.0, 1.0)))
    }

    fn record(&mut self, label: SentimentLabel, confidence: f64, method: &str, language: &str) {
        let summary = &mut self.summary;
        match label {
            SentimentLabel::Positive => summary.positive_count += 1,
            SentimentLabel::Negative => summary.negative_count += 1,
            SentimentLabel::Neutral => summary.neutral_count += 1,
        }
        self.confidence_sum += confidence;
        summary.total_comments += 1;
        *summary
            .language_histogram
            .entry(language.to_string())
            .or_insert(0) += 1;
        *summary.method_histogram.entry(method.to_string()).or_insert(0) += 1;
    }

    pub fn len(&self) -> usize {
        self.summary.total_comments
    }

    pub fn is_empty(&self) -> bool {
        self.summary.total_comments == 0
    }

    pub fn finish(self) -> BatchSummary {
        let mut summary = self.summary;
        summary.average_confidence = if summary.total_comments == 0 {
            0.0
        } else {
            self.confidence_sum / summary.total_comments as f64
        };
        summary
    }
}
