use std::collections::HashMap;

use anyhow::Context;

/// Word → valence map on VADER's `[-4, 4]` scale.
///
/// [`Lexicon::default`] is a compact built-in dictionary covering the words
/// that dominate comment sections, plus the words the lightweight emoji table
/// produces. Load the full VADER lexicon with
/// [`LexiconLoader`](crate::loaders::LexiconLoader) for complete coverage.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    pub fn new(entries: HashMap<String, f64>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(word, valence)| (word.to_lowercase(), valence))
            .collect();
        Self { entries }
    }

    /// Parse VADER's tab-separated format: `token<TAB>mean<TAB>stdev<TAB>ratings`.
    ///
    /// Only the first two columns are used. Blank lines are skipped.
    pub fn parse(source: &str) -> anyhow::Result<Self> {
        let mut entries = HashMap::new();
        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let mut columns = line.split('\t');
            let word = columns
                .next()
                .filter(|w| !w.is_empty())
                .with_context(|| format!("line {}: missing token", line_no + 1))?;
            let valence = columns
                .next()
                .with_context(|| format!("line {}: missing valence for '{word}'", line_no + 1))?
                .trim()
                .parse::<f64>()
                .with_context(|| format!("line {}: invalid valence for '{word}'", line_no + 1))?;
            entries.insert(word.to_lowercase(), valence);
        }
        if entries.is_empty() {
            anyhow::bail!("lexicon contains no entries");
        }
        Ok(Self { entries })
    }

    pub fn get(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    /// Lookup for a word that is already lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn insert(&mut self, word: &str, valence: f64) {
        self.entries.insert(word.to_lowercase(), valence);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let entries = BUILTIN_LEXICON
            .iter()
            .map(|&(word, valence)| (word.to_string(), valence))
            .collect();
        Self { entries }
    }
}

const BUILTIN_LEXICON: &[(&str, f64)] = &[
    // positive
    ("adorable", 2.2),
    ("agree", 1.5),
    ("amazing", 2.8),
    ("amazed", 2.2),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("celebrate", 2.7),
    ("charming", 2.8),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("clever", 2.0),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delighted", 3.0),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fan", 1.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("fresh", 1.3),
    ("friend", 2.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("genius", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("haha", 2.0),
    ("happy", 2.7),
    ("happiness", 2.6),
    ("heaven", 2.3),
    ("helpful", 1.8),
    ("hero", 2.6),
    ("honest", 2.3),
    ("hope", 1.9),
    ("impressive", 2.3),
    ("inspiring", 2.2),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("legendary", 2.5),
    ("like", 1.5),
    ("liked", 1.8),
    ("lmao", 2.0),
    ("lol", 2.9),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("masterpiece", 3.1),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("respect", 2.1),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("smart", 1.7),
    ("smile", 1.5),
    ("solid", 1.3),
    ("success", 2.7),
    ("super", 2.9),
    ("support", 1.7),
    ("sweet", 2.0),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("top", 0.8),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("win", 2.8),
    ("winner", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yes", 1.7),
    // negative
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("ashamed", -2.1),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bomb", -2.2),
    ("boring", -1.3),
    ("broken", -1.5),
    ("clickbait", -1.6),
    ("confused", -1.3),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("cringe", -1.7),
    ("cry", -2.1),
    ("crying", -2.1),
    ("damn", -1.7),
    ("dead", -3.3),
    ("death", -2.9),
    ("die", -2.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dumb", -2.3),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fake", -2.1),
    ("fear", -2.2),
    ("garbage", -2.3),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("hell", -3.6),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("ignorant", -1.5),
    ("kill", -3.7),
    ("killed", -3.5),
    ("lame", -1.8),
    ("liar", -2.9),
    ("lie", -1.6),
    ("lies", -1.8),
    ("lost", -1.3),
    ("mad", -2.2),
    ("mess", -1.5),
    ("miss", -0.6),
    ("negative", -2.7),
    ("no", -1.2),
    ("nonsense", -1.7),
    ("pain", -2.3),
    ("pathetic", -2.6),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("ridiculous", -1.7),
    ("rubbish", -1.9),
    ("sad", -2.1),
    ("scam", -2.8),
    ("scared", -1.9),
    ("shame", -2.1),
    ("shit", -2.6),
    ("sick", -2.3),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("trash", -1.5),
    ("ugh", -1.8),
    ("ugly", -2.3),
    ("unfair", -2.1),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
    ("wtf", -2.8),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_emoji_words() {
        let lexicon = Lexicon::default();
        for word in ["happy", "love", "sad", "crying", "angry", "good", "perfect", "bad"] {
            assert!(lexicon.contains(word), "missing {word}");
        }
    }

    #[test]
    fn parse_vader_format() {
        let lexicon = Lexicon::parse("good\t1.9\t0.9434\t[2, 1, 2]\nBAD\t-2.5\t0.67082\t[-3]\n\n")
            .unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.get("good"), Some(1.9));
        assert_eq!(lexicon.get("bad"), Some(-2.5));
    }

    #[test]
    fn parse_reports_line_numbers() {
        let err = Lexicon::parse("good\t1.9\nbad\tnope\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }
}
