use thiserror::Error;

/// Everything that can go wrong inside one classification pass.
///
/// None of these escape [`SentimentCascade::classify`](crate::pipelines::sentiment_analysis_pipeline::SentimentCascade::classify):
/// the cascade turns every fault into a fall-through to the next tier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationFault {
    /// The strategy was never loaded (or failed to load) and stays missing for the run.
    #[error("strategy '{strategy}' is not available")]
    ModelUnavailable { strategy: String },

    /// A single invocation of an available strategy failed.
    #[error("strategy '{strategy}' failed: {message}")]
    Inference { strategy: String, message: String },

    /// The language detector could not decide.
    #[error("language detection failed: {0}")]
    Detection(String),

    /// The translation bridge could not translate the text.
    #[error("translation failed: {0}")]
    Translation(String),

    /// The lexicon fallback itself failed.
    #[error("lexicon scoring failed: {0}")]
    Lexicon(String),

    /// An aggregation input did not look like cascade output.
    #[error("malformed classification result: {0}")]
    MalformedResult(String),
}

impl ClassificationFault {
    pub fn unavailable(strategy: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            strategy: strategy.into(),
        }
    }

    pub fn inference(strategy: impl Into<String>, err: &anyhow::Error) -> Self {
        Self::Inference {
            strategy: strategy.into(),
            message: format!("{err:#}"),
        }
    }

    /// Unavailable strategies are expected in constrained deployments and are not worth a warning.
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::ModelUnavailable { .. })
    }
}
