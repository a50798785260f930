// Integration tests for batch classification and summaries

mod common;

use std::sync::Arc;

use comment_sentiment::pipelines::batch::{BatchProgress, ResultRecord};
use comment_sentiment::pipelines::sentiment_analysis_pipeline::*;
use comment_sentiment::{BatchSummary, Comment};
use common::{FixedLanguage, KeywordStrategy};

async fn keyword_cascade() -> SentimentCascade {
    let registry = StrategyRegistry::builder()
        .multilingual(KeywordStrategy)
        .build()
        .await;
    SentimentCascade::new(Arc::new(registry), CascadeConfig::advanced()).with_detector(FixedLanguage("en"))
}

#[tokio::test]
async fn batch_keeps_order_and_counts() {
    let cascade = keyword_cascade().await;
    let comments = vec![
        Comment::new("ana", "love it so much"),
        Comment::new("ben", "I hate the intro music"),
        Comment::new("cy", "   "),
        Comment::new("dee", "I love the editing"),
    ];

    let report = cascade.classify_batch(&comments);
    let labels: Vec<SentimentLabel> = report.results.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            SentimentLabel::Positive,
            SentimentLabel::Negative,
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
        ]
    );
    assert_eq!(report.results[2], SentimentResult::empty());

    let summary = &report.summary;
    assert_eq!(summary.total_comments, 4);
    assert_eq!(summary.positive_count, 2);
    assert_eq!(summary.negative_count, 1);
    assert_eq!(summary.neutral_count, 1);
    assert!((summary.average_confidence - 0.5625).abs() < 1e-9);
    assert_eq!(summary.method_histogram.get("multilingual"), Some(&3));
    assert_eq!(summary.method_histogram.get("empty"), Some(&1));
    assert_eq!(summary.language_histogram.get("en"), Some(&3));
    assert_eq!(summary.language_histogram.get("unknown"), Some(&1));
    assert_eq!(summary.overall(), SentimentLabel::Positive);
    assert_eq!(summary.share(SentimentLabel::Negative), 0.25);
}

#[tokio::test]
async fn progress_is_reported_after_each_comment() {
    let cascade = keyword_cascade().await;
    let comments: Vec<Comment> = ["love this", "hate this", "no opinion here"]
        .into_iter()
        .map(|text| Comment::new("viewer", text))
        .collect();

    let mut seen = Vec::new();
    let report = cascade.classify_batch_with_progress(&comments, |progress| seen.push(progress));

    assert_eq!(report.results.len(), 3);
    assert_eq!(
        seen,
        vec![
            BatchProgress { completed: 1, total: 3 },
            BatchProgress { completed: 2, total: 3 },
            BatchProgress { completed: 3, total: 3 },
        ]
    );
    assert_eq!(seen.last().map(BatchProgress::fraction), Some(1.0));
}

#[test]
fn empty_batch_has_zero_summary() {
    let cascade = SentimentCascade::lightweight();
    let report = cascade.classify_batch(&Vec::<Comment>::new());

    assert!(report.results.is_empty());
    assert_eq!(report.summary, BatchSummary::default());
    assert_eq!(report.summary.average_confidence, 0.0);
    assert_eq!(report.summary.overall(), SentimentLabel::Neutral);
    assert_eq!(report.summary.share(SentimentLabel::Positive), 0.0);
}

#[test]
fn blank_comments_count_as_unknown_language() {
    let cascade = SentimentCascade::lightweight();
    let report = cascade.classify_batch(&[Comment::new("ana", ""), Comment::new("ben", "   ")]);

    assert_eq!(report.summary.language_histogram.len(), 1);
    assert_eq!(report.summary.language_histogram.get("unknown"), Some(&2));
    assert_eq!(report.summary.method_histogram.get("empty"), Some(&2));
}

#[test]
fn summary_from_reloaded_records() -> anyhow::Result<()> {
    let json = r#"[
        {"label": "positive", "confidence": 0.9, "method": "multilingual", "language": "en"},
        {"label": "positive", "confidence": 0.7, "method": "social", "language": "en"},
        {"label": "negative", "confidence": 0.5, "method": "translated+social", "language": "de"},
        {"confidence": 0.8, "method": "social"}
    ]"#;
    let records: Vec<ResultRecord> = serde_json::from_str(json)?;
    let summary = BatchSummary::from_records(&records);

    assert_eq!(summary.total_comments, 4);
    assert_eq!(summary.positive_count, 2);
    assert_eq!(summary.negative_count, 1);
    // the label-less record counts as neutral with zero confidence
    assert_eq!(summary.neutral_count, 1);
    assert!((summary.average_confidence - 0.525).abs() < 1e-9);
    assert_eq!(summary.language_histogram.get("unknown"), Some(&1));
    assert_eq!(summary.method_histogram.get("social"), Some(&2));
    Ok(())
}

#[test]
fn report_serializes_with_wire_names() -> anyhow::Result<()> {
    let cascade = SentimentCascade::lightweight();
    let report = cascade.classify_batch(&[Comment::new("ana", "")]);
    let value = serde_json::to_value(&report)?;

    assert_eq!(value["results"][0]["method"], "empty");
    assert_eq!(value["results"][0]["label"], "neutral");
    assert_eq!(value["summary"]["total_comments"], 1);
    Ok(())
}
