//! # Sentiment intensity analyzer
//!
//! Walks the token stream and assigns each token a base valence from the
//! lexicon, then adjusts it using the surrounding context: booster words up
//! to three positions back (damped with distance), negations, ALL-CAPS
//! emphasis, special-case idioms and the "least" modifier. A contrast
//! marker ("but") shifts weight toward the clause that follows it. Token
//! valences are then aggregated into normalized proportions and a compound
//! score in `[-1.0, 1.0]`.
//!
//! The analyzer is cheap to clone and shares its lexicon, so one instance
//! can serve many threads.

use crate::heuristics::{
    booster_scalar, negated, normalize, is_shouting, ALLCAPS_INCR, BOOST_DECR, BOOSTERS, IDIOMS,
    NEGATION_SCALAR,
};
use crate::lexicon::Lexicon;
use crate::scores::SentimentScores;
use crate::tokenizer::TokenizedText;
use std::sync::Arc;
use tracing::debug;

// --- tuning constants ---

/// Damping for a booster two words before the rated token.
const SECOND_WORD_DAMPING: f64 = 0.95;
/// Damping for a booster three words before the rated token.
const THIRD_WORD_DAMPING: f64 = 0.9;

/// Weight shift around a contrast marker.
const CONTRAST_PRE_SCALAR: f64 = 0.5;
const CONTRAST_POST_SCALAR: f64 = 1.5;

/// Punctuation emphasis: each "!" adds a step, capped at four marks;
/// repeated "?" adds a step per mark up to three, then a flat cap.
const EXCLAIM_STEP: f64 = 0.292;
const EXCLAIM_CAP: usize = 4;
const QUESTION_STEP: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;

/// Lexicon and rule based scorer for short, informal text.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Arc<Lexicon>,
}

impl SentimentAnalyzer {
    /// Analyzer over the bundled general-purpose lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::bundled(),
        }
    }

    /// Analyzer over a caller-supplied lexicon, e.g. a domain-specific one
    /// loaded with [`Lexicon::from_file`].
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score one text. Returns negative, neutral and positive proportions
    /// plus the normalized compound score; text with no scorable tokens
    /// yields the all-zero record.
    pub fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokenized = TokenizedText::new(text);
        let tokens = tokenized.tokens();
        let mut sentiments: Vec<f64> = Vec::with_capacity(tokens.len());
        for (index, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();
            // Boosters and "kind of" modify a later word instead of carrying
            // their own score, even when the lexicon rates them.
            let kind_of = lower == "kind"
                && tokens
                    .get(index + 1)
                    .is_some_and(|next| next.to_lowercase() == "of");
            if kind_of || BOOSTERS.contains_key(lower.as_str()) {
                sentiments.push(0.0);
                continue;
            }
            sentiments.push(self.token_valence(&tokenized, index));
        }
        let sentiments = contrast_check(tokens, sentiments);
        let scores = aggregate(&sentiments, text);

        // Never log raw text, only the hashed id.
        let id = anon_hash(text);
        debug!(
            target: "sentiment",
            %id,
            tokens = tokens.len(),
            compound = scores.compound,
            "text scored"
        );
        scores
    }

    /// Context-adjusted valence for the token at `index`. Tokens missing
    /// from the lexicon rate 0.0.
    fn token_valence(&self, tokenized: &TokenizedText, index: usize) -> f64 {
        let tokens = tokenized.tokens();
        let token = &tokens[index];
        let mut valence = match self.lexicon.valence(&token.to_lowercase()) {
            Some(base) => base,
            None => return 0.0,
        };
        if is_shouting(token) && tokenized.mixed_caps() {
            valence += if valence > 0.0 {
                ALLCAPS_INCR
            } else {
                -ALLCAPS_INCR
            };
        }

        // Look back up to three words. Each distance is checked on its own:
        // a lexicon-rated word at one distance does not stop the ones
        // further out from contributing.
        for distance in 0..3 {
            if index > distance {
                let prev = &tokens[index - (distance + 1)];
                if !self.lexicon.contains(&prev.to_lowercase()) {
                    let mut scalar = booster_scalar(prev, valence, tokenized.mixed_caps());
                    if scalar != 0.0 {
                        if distance == 1 {
                            scalar *= SECOND_WORD_DAMPING;
                        } else if distance == 2 {
                            scalar *= THIRD_WORD_DAMPING;
                        }
                    }
                    valence += scalar;
                    valence = never_scaling(valence, tokens, distance, index);
                    if distance == 2 {
                        valence = idioms_check(valence, tokens, index);
                    }
                }
            }
        }
        self.least_check(valence, tokens, index)
    }

    /// "least" before a rated word negates it, except in "at least" and
    /// "very least". Directly at the start of text it always negates.
    fn least_check(&self, valence: f64, tokens: &[String], index: usize) -> f64 {
        if index == 0 {
            return valence;
        }
        let prev = tokens[index - 1].to_lowercase();
        if prev != "least" || self.lexicon.contains(&prev) {
            return valence;
        }
        if index > 1 {
            let two_back = tokens[index - 2].to_lowercase();
            if two_back != "at" && two_back != "very" {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        } else {
            valence * NEGATION_SCALAR
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// --- context rules ---

/// Negation flip for the word `distance + 1` positions back, with the
/// "never so" / "never this" phrasings turned into amplifiers instead.
fn never_scaling(valence: f64, tokens: &[String], distance: usize, index: usize) -> f64 {
    match distance {
        0 => {
            if negated(&tokens[index - 1..index]) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        1 => {
            if tokens[index - 2] == "never"
                && (tokens[index - 1] == "so" || tokens[index - 1] == "this")
            {
                valence * 1.5
            } else if negated(&tokens[index - 2..index - 1]) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        _ => {
            if (tokens[index - 3] == "never"
                && (tokens[index - 2] == "so" || tokens[index - 2] == "this"))
                || tokens[index - 1] == "so"
                || tokens[index - 1] == "this"
            {
                valence * 1.25
            } else if negated(&tokens[index - 3..index - 2]) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
    }
}

/// Multi-word idioms override the token valence outright. Backward windows
/// are checked nearest-first and the first hit wins; forward windows are
/// then allowed to override that. A trailing booster bigram in the far
/// window dampens the result.
fn idioms_check(valence: f64, tokens: &[String], index: usize) -> f64 {
    let onezero = format!("{} {}", tokens[index - 1], tokens[index]);
    let twoonezero = format!(
        "{} {} {}",
        tokens[index - 2],
        tokens[index - 1],
        tokens[index]
    );
    let twoone = format!("{} {}", tokens[index - 2], tokens[index - 1]);
    let threetwoone = format!(
        "{} {} {}",
        tokens[index - 3],
        tokens[index - 2],
        tokens[index - 1]
    );
    let threetwo = format!("{} {}", tokens[index - 3], tokens[index - 2]);

    let mut valence = valence;
    for window in [&onezero, &twoonezero, &twoone, &threetwoone, &threetwo] {
        if let Some(&idiom_valence) = IDIOMS.get(window.as_str()) {
            valence = idiom_valence;
            break;
        }
    }
    if index + 1 < tokens.len() {
        let zeroone = format!("{} {}", tokens[index], tokens[index + 1]);
        if let Some(&idiom_valence) = IDIOMS.get(zeroone.as_str()) {
            valence = idiom_valence;
        }
    }
    if index + 2 < tokens.len() {
        let zeroonetwo = format!(
            "{} {} {}",
            tokens[index],
            tokens[index + 1],
            tokens[index + 2]
        );
        if let Some(&idiom_valence) = IDIOMS.get(zeroonetwo.as_str()) {
            valence = idiom_valence;
        }
    }
    if BOOSTERS.contains_key(threetwo.as_str()) || BOOSTERS.contains_key(twoone.as_str()) {
        valence += BOOST_DECR;
    }
    valence
}

/// Halve everything before the first contrast marker and amplify everything
/// after it, leaving the marker position itself untouched. Only "but" and
/// "BUT" count, and a lowercase marker earlier in the text wins over an
/// upper-case one. Positions stay aligned with the token sequence.
fn contrast_check(tokens: &[String], sentiments: Vec<f64>) -> Vec<f64> {
    let pivot = tokens
        .iter()
        .position(|t| t == "but")
        .or_else(|| tokens.iter().position(|t| t == "BUT"));
    match pivot {
        Some(pivot) => sentiments
            .iter()
            .enumerate()
            .map(|(i, &sentiment)| {
                if i < pivot {
                    sentiment * CONTRAST_PRE_SCALAR
                } else if i > pivot {
                    sentiment * CONTRAST_POST_SCALAR
                } else {
                    sentiment
                }
            })
            .collect(),
        None => sentiments,
    }
}

// --- aggregation ---

fn exclamation_boost(text: &str) -> f64 {
    let count = text.matches('!').count().min(EXCLAIM_CAP);
    count as f64 * EXCLAIM_STEP
}

fn question_boost(text: &str) -> f64 {
    let count = text.matches('?').count();
    if count > 1 {
        if count <= 3 {
            count as f64 * QUESTION_STEP
        } else {
            QUESTION_CAP
        }
    } else {
        0.0
    }
}

/// Split token valences into positive and negative mass plus a neutral
/// count. Each non-neutral token also contributes one unit of mass, so a
/// single rated word is not drowned out by proportional scaling.
fn sift(sentiments: &[f64]) -> (f64, f64, usize) {
    let mut pos_sum = 0.0;
    let mut neg_sum = 0.0;
    let mut neutral = 0usize;
    for &sentiment in sentiments {
        if sentiment > 0.0 {
            pos_sum += sentiment + 1.0;
        } else if sentiment < 0.0 {
            neg_sum += sentiment - 1.0;
        } else {
            neutral += 1;
        }
    }
    (pos_sum, neg_sum, neutral)
}

fn aggregate(sentiments: &[f64], text: &str) -> SentimentScores {
    if sentiments.is_empty() {
        return SentimentScores::default();
    }
    let mut total_valence: f64 = sentiments.iter().sum();
    let punct = exclamation_boost(text) + question_boost(text);
    if total_valence > 0.0 {
        total_valence += punct;
    } else if total_valence < 0.0 {
        total_valence -= punct;
    }
    let compound = normalize(total_valence);

    let (mut pos_sum, mut neg_sum, neutral) = sift(sentiments);
    if pos_sum > neg_sum.abs() {
        pos_sum += punct;
    } else if pos_sum < neg_sum.abs() {
        neg_sum -= punct;
    }
    let total = pos_sum + neg_sum.abs() + neutral as f64;

    SentimentScores {
        neg: round_to((neg_sum / total).abs(), 3),
        neu: round_to((neutral as f64 / total).abs(), 3),
        pos: round_to((pos_sum / total).abs(), 3),
        compound: round_to(compound, 4),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    use std::fmt::Write as _;
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut id = String::with_capacity(12);
    for byte in digest.iter().take(6) {
        let _ = write!(&mut id, "{:02x}", byte);
    }
    id
}
