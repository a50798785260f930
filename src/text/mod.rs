pub mod language;
pub mod normalizer;

pub use language::{LanguageDetector, WhatlangDetector, FALLBACK_LANGUAGE};
pub use normalizer::TextNormalizer;
