//! Loading of cascade configuration and lexicon files from disk.
//!
//! ## Main Types
//!
//! - [`ConfigLoader`] - Reads a [`CascadeConfig`] from a JSON file
//! - [`LexiconLoader`] - Reads a VADER-format lexicon into a [`VaderAnalyzer`]
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use comment_sentiment::loaders::{ConfigLoader, LexiconLoader};
//!
//! let config = ConfigLoader::new("cascade.json").load()?;
//! let analyzer = LexiconLoader::new("vader_lexicon.txt").load_analyzer()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::core::CascadeConfig;
use crate::models::{Lexicon, VaderAnalyzer};

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    pub path: PathBuf,
}

impl ConfigLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and validate the config; missing fields take their defaults.
    pub fn load(&self) -> anyhow::Result<CascadeConfig> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading cascade config {}", self.path.display()))?;
        let config: CascadeConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing cascade config {}", self.path.display()))?;
        config.validate()?;

        tracing::debug!(path = %self.path.display(), ?config, "loaded cascade config");
        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct LexiconLoader {
    pub path: PathBuf,
}

impl LexiconLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> anyhow::Result<Lexicon> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading lexicon {}", self.path.display()))?;
        let lexicon = Lexicon::parse(&content)
            .with_context(|| format!("parsing lexicon {}", self.path.display()))?;

        tracing::info!(path = %self.path.display(), entries = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    pub fn load_analyzer(&self) -> anyhow::Result<VaderAnalyzer> {
        Ok(VaderAnalyzer::new(self.load()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::NormalizerMode;
    use std::io::Write;

    #[test]
    fn loads_partial_config() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, r#"{{"normalizer": "lightweight", "min_tokens": 3}}"#)?;

        let config = ConfigLoader::new(file.path()).load()?;
        assert_eq!(config.normalizer, NormalizerMode::Lightweight);
        assert_eq!(config.min_tokens, 3);
        assert_eq!(config.translation_penalty, 0.8);
        Ok(())
    }

    #[test]
    fn invalid_config_is_rejected() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, r#"{{"translation_penalty": 2.0}}"#)?;
        assert!(ConfigLoader::new(file.path()).load().is_err());
        Ok(())
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = ConfigLoader::new("/definitely/not/here.json").load().unwrap_err();
        assert!(format!("{err:#}").contains("/definitely/not/here.json"));
    }

    #[test]
    fn loads_lexicon_into_analyzer() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "splendid\t3.0\t0.5\t[3, 3, 3]")?;
        writeln!(file, "dreadful\t-3.0\t0.5\t[-3, -3, -3]")?;

        let analyzer = LexiconLoader::new(file.path()).load_analyzer()?;
        assert_eq!(analyzer.lexicon().len(), 2);
        assert!(analyzer.scores("a splendid show").compound > 0.0);
        assert!(analyzer.scores("a dreadful show").compound < 0.0);
        // words outside the loaded file are no longer known
        assert_eq!(analyzer.scores("good").compound, 0.0);
        Ok(())
    }
}
