use anyhow::Result;
use comment_sentiment::pipelines::batch::Comment;
use comment_sentiment::pipelines::sentiment_analysis_pipeline::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Stand-in for a real social-media model: answers from a few keywords.
struct KeywordModel;

impl KeywordModel {
    async fn load() -> Result<Self> {
        Ok(Self)
    }
}

impl SentimentStrategy for KeywordModel {
    fn name(&self) -> &str {
        "keyword"
    }

    fn classify(&self, text: &str) -> Result<RawPrediction> {
        let text = text.to_lowercase();
        let prediction = if ["love", "great", "awesome"].iter().any(|w| text.contains(w)) {
            RawPrediction::new("POS", 0.91)
        } else if ["hate", "worst", "boring"].iter().any(|w| text.contains(w)) {
            RawPrediction::new("NEG", 0.88)
        } else {
            RawPrediction::new("NEU", 0.6)
        };
        Ok(prediction)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Building registry...");

    let registry = StrategyRegistry::builder()
        .social_with(KeywordModel::load)
        .build()
        .await;

    println!("Available: {:?}", registry.available());

    let cascade = SentimentCascade::new(Arc::new(registry), CascadeConfig::advanced());

    let comments = vec![
        Comment::new("maria", "I love how you explained this, great video 😍"),
        Comment::new("tom", "worst tutorial I have watched this week"),
        Comment::new("lee", "@creator #tutorial https://example.com"),
        Comment::new("ana", "Este video es increíble, me encanta"),
        Comment::new("sam", "👍"),
        Comment::new("kai", ""),
    ];

    let report = cascade.classify_batch_with_progress(&comments, |progress| {
        println!("  {}/{} classified", progress.completed, progress.total);
    });

    println!("\n=== Per-comment results ===");
    for (comment, result) in comments.iter().zip(&report.results) {
        println!(
            "{:>6}: {:<8} {:.4} via {:<17} [{}] {:?}",
            comment.author, result.label, result.confidence, result.method, result.language, comment.text
        );
    }

    let summary = &report.summary;
    println!("\n=== Summary ===");
    println!(
        "positive {} / negative {} / neutral {} (of {})",
        summary.positive_count, summary.negative_count, summary.neutral_count, summary.total_comments
    );
    println!("average confidence: {:.4}", summary.average_confidence);
    println!("languages: {:?}", summary.language_histogram);
    println!("methods: {:?}", summary.method_histogram);
    println!("overall: {}", summary.overall());

    println!("\n{}", serde_json::to_string_pretty(summary)?);

    Ok(())
}
