//! Rule-based polarity scoring in the style of VADER.
//!
//! Token valences come from a [`Lexicon`] and are adjusted by the usual
//! heuristics: booster words ("very", "barely"), negation within a three-word
//! window, ALL-CAPS emphasis when the rest of the text is not shouting, the
//! "but" contrast shift, "least", a handful of idioms, and `!`/`?`
//! amplification. The summed valence is squashed into `[-1, 1]` as the
//! compound score.

use std::collections::HashSet;

use super::{Lexicon, PolarityScorer, PolarityScores};

const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
const C_INCR: f64 = 0.733;
const N_SCALAR: f64 = -0.74;
const NORMALIZATION_ALPHA: f64 = 15.0;

const NEGATE: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "ain't", "aren't",
    "can't", "couldn't", "daren't", "didn't", "doesn't", "dont", "hadnt", "hasnt", "havent",
    "isnt", "mightnt", "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
    "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope", "nor", "not", "nothing",
    "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent", "oughtn't", "shan't",
    "shouldn't", "uh-uh", "wasn't", "weren't", "without", "wont", "wouldnt", "won't", "wouldn't",
    "rarely", "seldom", "despite",
];

fn booster(word: &str) -> Option<f64> {
    match word {
        "absolutely" | "amazingly" | "awfully" | "completely" | "considerable" | "considerably"
        | "decidedly" | "deeply" | "effing" | "enormous" | "enormously" | "entirely"
        | "especially" | "exceptional" | "exceptionally" | "extreme" | "extremely"
        | "fabulously" | "flipping" | "flippin" | "frackin" | "fracking" | "fricking"
        | "frickin" | "frigging" | "friggin" | "fully" | "fuckin" | "fucking" | "fuggin"
        | "fugging" | "greatly" | "hella" | "highly" | "hugely" | "incredible" | "incredibly"
        | "intensely" | "major" | "majorly" | "more" | "most" | "particularly" | "purely"
        | "quite" | "really" | "remarkably" | "so" | "substantially" | "thoroughly" | "total"
        | "totally" | "tremendous" | "tremendously" | "uber" | "unbelievably" | "unusually"
        | "utter" | "utterly" | "very" => Some(B_INCR),
        "almost" | "barely" | "hardly" | "just enough" | "kind of" | "kinda" | "kindof"
        | "kind-of" | "less" | "little" | "marginal" | "marginally" | "occasional"
        | "occasionally" | "partly" | "scarce" | "scarcely" | "slight" | "slightly" | "somewhat"
        | "sort of" | "sorta" | "sortof" | "sort-of" => Some(B_DECR),
        _ => None,
    }
}

fn special_case(phrase: &str) -> Option<f64> {
    match phrase {
        "the shit" | "the bomb" | "to die for" => Some(3.0),
        "bad ass" | "badass" => Some(1.5),
        "bus stop" => Some(0.0),
        "yeah right" => Some(-2.0),
        "kiss of death" => Some(-1.5),
        "beating heart" => Some(3.1),
        "broken heart" => Some(-2.9),
        _ => None,
    }
}

fn negated(word: &str) -> bool {
    NEGATE.contains(&word) || word.contains("n't")
}

/// At least one cased character and no lowercase ones.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// True when some, but not all, words are shouted.
fn allcap_differential(words: &[&str]) -> bool {
    let allcap = words.iter().filter(|w| is_upper(w)).count();
    let differential = words.len() - allcap;
    differential > 0 && differential < words.len()
}

/// Punctuation runs that may lead or trail a word and still leave it scorable.
const PUNC_LIST: &[&str] = &[
    ".", "!", "?", ",", ";", ":", "-", "'", "\"", "!!", "!!!", "??", "???", "?!?", "!?!", "?!?!",
    "!?!?!", "?!?!?", "!?!?!?",
];

/// Whitespace tokens longer than one character. A token that is a word of the
/// text with a single [`PUNC_LIST`] run glued to one side is reduced to the word;
/// anything else (emoticons, contractions, `good!!!!`) is kept verbatim.
fn words_and_emoticons(text: &str) -> Vec<&str> {
    let without_punc: String = text.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let words_only: HashSet<&str> = without_punc
        .split_whitespace()
        .filter(|w| w.chars().count() > 1)
        .collect();

    text.split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(|token| {
            PUNC_LIST
                .iter()
                .find_map(|&punc| {
                    [token.strip_prefix(punc), token.strip_suffix(punc)]
                        .into_iter()
                        .flatten()
                        .find(|word| words_only.contains(word))
                })
                .unwrap_or(token)
        })
        .collect()
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64 * 0.292;
    let questions = match text.matches('?').count() {
        0 | 1 => 0.0,
        n @ 2..=3 => n as f64 * 0.18,
        _ => 0.96,
    };
    exclamations + questions
}

/// Lexicon-based polarity scorer; always available, never loads a model.
#[derive(Debug, Clone, Default)]
pub struct VaderAnalyzer {
    lexicon: Lexicon,
}

impl VaderAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score `text`. Text without any scorable word gets all-zero scores.
    pub fn scores(&self, text: &str) -> PolarityScores {
        let words = words_and_emoticons(text);
        let lower: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let is_cap_diff = allcap_differential(&words);

        let mut sentiments = Vec::with_capacity(words.len());
        for i in 0..words.len() {
            let is_kind_of = lower[i] == "kind" && lower.get(i + 1).is_some_and(|n| n == "of");
            if booster(&lower[i]).is_some() || is_kind_of {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.sentiment_valence(&words, &lower, i, is_cap_diff));
        }

        but_check(&lower, &mut sentiments);
        score_valence(&sentiments, text)
    }

    fn sentiment_valence(&self, words: &[&str], lower: &[String], i: usize, is_cap_diff: bool) -> f64 {
        let Some(base) = self.lexicon.get(&lower[i]) else {
            return 0.0;
        };
        let mut valence = base;

        // "no" in front of another lexicon word is a negation, not a sentiment of its own
        if lower[i] == "no" && lower.get(i + 1).is_some_and(|n| self.lexicon.contains(n)) {
            valence = 0.0;
        }
        if (i > 0 && lower[i - 1] == "no")
            || (i > 1 && lower[i - 2] == "no")
            || (i > 2 && lower[i - 3] == "no" && matches!(lower[i - 1].as_str(), "or" | "nor"))
        {
            valence = base * N_SCALAR;
        }

        if is_upper(words[i]) && is_cap_diff {
            if valence > 0.0 {
                valence += C_INCR;
            } else {
                valence -= C_INCR;
            }
        }

        for start_i in 0..3 {
            let j = start_i + 1;
            if i > start_i && !self.lexicon.contains(&lower[i - j]) {
                let mut s = scalar_inc_dec(words[i - j], &lower[i - j], valence, is_cap_diff);
                if start_i == 1 && s != 0.0 {
                    s *= 0.95;
                }
                if start_i == 2 && s != 0.0 {
                    s *= 0.9;
                }
                valence += s;
                valence = negation_check(valence, lower, start_i, i);
                if start_i == 2 {
                    valence = special_idioms_check(valence, lower, i);
                }
            }
        }

        self.least_check(valence, lower, i)
    }

    fn least_check(&self, valence: f64, lower: &[String], i: usize) -> f64 {
        if i > 1 && lower[i - 1] == "least" && !self.lexicon.contains(&lower[i - 1]) {
            if lower[i - 2] != "at" && lower[i - 2] != "very" {
                return valence * N_SCALAR;
            }
        } else if i > 0 && lower[i - 1] == "least" && !self.lexicon.contains(&lower[i - 1]) {
            return valence * N_SCALAR;
        }
        valence
    }
}

impl PolarityScorer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> anyhow::Result<PolarityScores> {
        Ok(self.scores(text))
    }
}

fn scalar_inc_dec(word: &str, word_lower: &str, valence: f64, is_cap_diff: bool) -> f64 {
    let Some(mut scalar) = booster(word_lower) else {
        return 0.0;
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if is_upper(word) && is_cap_diff {
        if valence > 0.0 {
            scalar += C_INCR;
        } else {
            scalar -= C_INCR;
        }
    }
    scalar
}

fn negation_check(valence: f64, lower: &[String], start_i: usize, i: usize) -> f64 {
    let so_or_this = |w: &str| w == "so" || w == "this";
    match start_i {
        0 => {
            if negated(&lower[i - 1]) {
                return valence * N_SCALAR;
            }
        }
        1 => {
            if lower[i - 2] == "never" && so_or_this(&lower[i - 1]) {
                return valence * 1.25;
            } else if lower[i - 2] == "without" && lower[i - 1] == "doubt" {
                return valence;
            } else if negated(&lower[i - 2]) {
                return valence * N_SCALAR;
            }
        }
        2 => {
            if lower[i - 3] == "never" && (so_or_this(&lower[i - 2]) || so_or_this(&lower[i - 1])) {
                return valence * 1.25;
            } else if lower[i - 3] == "without" && (lower[i - 2] == "doubt" || lower[i - 1] == "doubt") {
                return valence;
            } else if negated(&lower[i - 3]) {
                return valence * N_SCALAR;
            }
        }
        _ => {}
    }
    valence
}

fn special_idioms_check(mut valence: f64, lower: &[String], i: usize) -> f64 {
    let onezero = format!("{} {}", lower[i - 1], lower[i]);
    let twoonezero = format!("{} {} {}", lower[i - 2], lower[i - 1], lower[i]);
    let twoone = format!("{} {}", lower[i - 2], lower[i - 1]);
    let threetwoone = format!("{} {} {}", lower[i - 3], lower[i - 2], lower[i - 1]);
    let threetwo = format!("{} {}", lower[i - 3], lower[i - 2]);

    if let Some(v) = [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo]
        .into_iter()
        .find_map(|seq| special_case(seq))
    {
        valence = v;
    }
    if lower.len() > i + 1 {
        if let Some(v) = special_case(&format!("{} {}", lower[i], lower[i + 1])) {
            valence = v;
        }
    }
    if lower.len() > i + 2 {
        if let Some(v) = special_case(&format!("{} {} {}", lower[i], lower[i + 1], lower[i + 2])) {
            valence = v;
        }
    }

    for n_gram in [&threetwoone, &threetwo, &twoone] {
        if let Some(b) = booster(n_gram) {
            valence += b;
        }
    }
    valence
}

/// Sentiment before "but" is dampened, sentiment after it is emphasised.
fn but_check(lower: &[String], sentiments: &mut [f64]) {
    let Some(bi) = lower.iter().position(|w| w == "but") else {
        return;
    };
    for (si, sentiment) in sentiments.iter_mut().enumerate() {
        if si < bi {
            *sentiment *= 0.5;
        } else if si > bi {
            *sentiment *= 1.5;
        }
    }
}

fn score_valence(sentiments: &[f64], text: &str) -> PolarityScores {
    if sentiments.is_empty() {
        return PolarityScores::default();
    }

    let punct = punctuation_emphasis(text);
    let mut sum: f64 = sentiments.iter().sum();
    if sum > 0.0 {
        sum += punct;
    } else if sum < 0.0 {
        sum -= punct;
    }
    let compound = normalize(sum);

    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neu_count = 0.0;
    for &s in sentiments {
        if s > 0.0 {
            pos_sum += s + 1.0;
        } else if s < 0.0 {
            neg_sum += s - 1.0;
        } else {
            neu_count += 1.0;
        }
    }
    if pos_sum > f64::abs(neg_sum) {
        pos_sum += punct;
    } else if pos_sum < f64::abs(neg_sum) {
        neg_sum -= punct;
    }

    let total = pos_sum + f64::abs(neg_sum) + neu_count;
    PolarityScores {
        neg: round_to(f64::abs(neg_sum / total), 3),
        neu: round_to(f64::abs(neu_count / total), 3),
        pos: round_to(f64::abs(pos_sum / total), 3),
        compound: round_to(compound, 4),
    }
}
