// src/tokenizer.rs
//
// Splits raw text into the token stream the scorer walks. Tokens keep their
// original casing, and emoticons survive because only known leading/trailing
// punctuation clusters are peeled off words. Single-character tokens are
// dropped up front.

use crate::heuristics::mixed_case_emphasis;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

const PUNCTUATION_CLUSTERS: [&str; 17] = [
    ".", "!", "?", ",", ";", ":", "-", "'", "\"", "!!", "!!!", "??", "???", "?!?", "!?!", "?!?!",
    "!?!?",
];

static STRIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"[!"#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~]"##).expect("punctuation strip regex")
});

/// Token stream plus the casing signal the scorer needs.
#[derive(Debug, Clone)]
pub struct TokenizedText {
    tokens: Vec<String>,
    mixed_caps: bool,
}

impl TokenizedText {
    pub fn new(text: &str) -> Self {
        let tokens = words_and_emoticons(text);
        let mixed_caps = mixed_case_emphasis(&tokens);
        Self { tokens, mixed_caps }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// True when some but not all tokens are fully upper-case. Emphasis
    /// boosts only apply in that case; ALL-CAPS throughout carries no signal.
    pub fn mixed_caps(&self) -> bool {
        self.mixed_caps
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Every bare word combined with every punctuation cluster, in both orders,
/// mapped back to the bare word. Tokens are only rewritten on an exact hit,
/// so inner punctuation (contractions, emoticons) is left alone.
fn punctuation_candidates(text: &str) -> HashMap<String, String> {
    let stripped = STRIP_RE.replace_all(text, "");
    let mut candidates = HashMap::new();
    for word in stripped.split_whitespace().filter(|w| w.chars().count() > 1) {
        for cluster in PUNCTUATION_CLUSTERS {
            candidates.insert(format!("{cluster}{word}"), word.to_string());
            candidates.insert(format!("{word}{cluster}"), word.to_string());
        }
    }
    candidates
}

fn words_and_emoticons(text: &str) -> Vec<String> {
    let candidates = punctuation_candidates(text);
    text.split_whitespace()
        .filter(|t| t.chars().count() > 1)
        .map(|t| candidates.get(t).cloned().unwrap_or_else(|| t.to_string()))
        .collect()
}
