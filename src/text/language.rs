//! Best-effort language detection used for routing.
//!
//! The detected code only decides which tiers are worth trying; it is never
//! checked against a list of supported languages.

use whatlang::Lang;

use crate::core::ClassificationFault;

/// Returned whenever detection is impossible or inconclusive.
pub const FALLBACK_LANGUAGE: &str = "en";

pub trait LanguageDetector: Send + Sync {
    fn try_detect(&self, text: &str) -> Result<String, ClassificationFault>;

    /// Detect, falling back to [`FALLBACK_LANGUAGE`] on any failure.
    fn detect(&self, text: &str) -> String {
        match self.try_detect(text) {
            Ok(code) => code,
            Err(fault) => {
                tracing::debug!(%fault, "defaulting language to {FALLBACK_LANGUAGE}");
                FALLBACK_LANGUAGE.to_string()
            }
        }
    }
}

/// Trigram-based detector backed by `whatlang`.
#[derive(Debug, Clone)]
pub struct WhatlangDetector {
    min_alphabetic: usize,
}

impl WhatlangDetector {
    /// `min_alphabetic` is the number of letters below which text counts as trivially short.
    pub fn new(min_alphabetic: usize) -> Self {
        Self { min_alphabetic }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new(3)
    }
}

impl LanguageDetector for WhatlangDetector {
    fn try_detect(&self, text: &str) -> Result<String, ClassificationFault> {
        let letters = text.chars().filter(|c| c.is_alphabetic()).count();
        if letters < self.min_alphabetic {
            return Err(ClassificationFault::Detection(format!(
                "only {letters} alphabetic characters"
            )));
        }
        let info = whatlang::detect(text)
            .ok_or_else(|| ClassificationFault::Detection("no language matched".into()))?;
        // short comments routinely get a confident-looking but unreliable guess
        if !info.is_reliable() {
            return Err(ClassificationFault::Detection(format!(
                "unreliable guess '{}' (confidence {:.2})",
                info.lang().code(),
                info.confidence()
            )));
        }
        Ok(iso_639_1(info.lang()).to_string())
    }
}

/// Two-letter code for the languages comment sections mostly use, the
/// detector's three-letter code otherwise.
fn iso_639_1(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Spa => "es",
        Lang::Por => "pt",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Ita => "it",
        Lang::Nld => "nl",
        Lang::Rus => "ru",
        Lang::Ukr => "uk",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Ron => "ro",
        Lang::Hun => "hu",
        Lang::Bul => "bg",
        Lang::Ell => "el",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Ara => "ar",
        Lang::Heb => "he",
        Lang::Hin => "hi",
        Lang::Ben => "bn",
        Lang::Urd => "ur",
        Lang::Ind => "id",
        Lang::Vie => "vi",
        Lang::Tha => "th",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Cmn => "zh",
        other => other.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_common_languages() {
        let detector = WhatlangDetector::default();
        assert_eq!(
            detector.detect("This is a really long English sentence about the video we just watched"),
            "en"
        );
        assert_eq!(
            detector.detect("Este video es increíble, me encanta la música y la forma en que lo explicas"),
            "es"
        );
    }

    #[test]
    fn short_english_comments_stay_english() {
        let detector = WhatlangDetector::default();
        for comment in [
            "great video",
            "good job",
            "nice video man",
            "thanks for sharing",
            "amazing work bro",
        ] {
            assert_eq!(detector.detect(comment), "en", "{comment:?}");
        }
    }

    #[test]
    fn short_or_symbol_only_text_falls_back() {
        let detector = WhatlangDetector::default();
        assert_eq!(detector.detect(""), FALLBACK_LANGUAGE);
        assert_eq!(detector.detect("!!"), FALLBACK_LANGUAGE);
        assert_eq!(detector.detect("12345 :) 678"), FALLBACK_LANGUAGE);
        assert!(detector.try_detect("ok").is_err());
    }
}
