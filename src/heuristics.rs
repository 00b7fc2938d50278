//! # Heuristic constants and lookup tables
//!
//! The tuned intensity constants, the negation/booster/idiom tables, and the
//! small free functions the scoring pipeline composes: sign-aware booster
//! scaling, shouting detection, and score normalization.
//!
//! Values are empirically derived mean intensity adjustments from human
//! ratings; they are fixed, not configurable.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Mean intensity increase contributed by an intensifying adverb ("very").
pub const BOOST_INCR: f64 = 0.293;
/// Mean intensity decrease contributed by a dampening adverb ("slightly").
pub const BOOST_DECR: f64 = -0.293;
/// Mean intensity increase for a word written in ALL CAPS among normal-case text.
pub const ALLCAPS_INCR: f64 = 0.733;
/// Multiplier applied to a valence in the scope of a negation.
pub const NEGATION_SCALAR: f64 = -0.74;
/// Approximate maximum expected raw score; denominator of the compound curve.
pub const NORMALIZE_ALPHA: f64 = 15.0;

/// Words and contractions that flip the sign of a nearby sentiment word.
/// Matched case-sensitively against raw tokens.
static NEGATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    for w in [
        "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt",
        "doesnt", "ain't", "aren't", "can't", "couldn't", "daren't", "didn't",
        "doesn't", "dont", "hadnt", "hasnt", "havent", "isnt", "mightnt",
        "mustnt", "neither", "don't", "hadn't", "hasn't", "haven't", "isn't",
        "mightn't", "mustn't", "neednt", "needn't", "never", "none", "nope",
        "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt",
        "uhuh", "wasnt", "werent", "oughtn't", "shan't", "shouldn't", "uh-uh",
        "wasn't", "weren't", "without", "wont", "wouldnt", "won't",
        "wouldn't", "rarely", "seldom", "despite",
    ] {
        set.insert(w);
    }
    set
});

/// Degree adverbs mapped to their intensity delta. One- and two-word
/// phrases; keys are lowercase.
pub(crate) static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for w in [
        "absolutely", "amazingly", "awfully", "completely", "considerably",
        "decidedly", "deeply", "effing", "enormously", "entirely",
        "especially", "exceptionally", "extremely", "fabulously", "flipping",
        "flippin", "fricking", "frickin", "frigging", "friggin", "fully",
        "fucking", "greatly", "hella", "highly", "hugely", "incredibly",
        "intensely", "majorly", "more", "most", "particularly", "purely",
        "quite", "really", "remarkably", "so", "substantially", "thoroughly",
        "totally", "tremendously", "uber", "unbelievably", "unusually",
        "utterly", "very",
    ] {
        map.insert(w, BOOST_INCR);
    }
    for w in [
        "almost", "barely", "hardly", "just enough", "kind of", "kinda",
        "kindof", "kind-of", "less", "little", "marginally", "occasionally",
        "partly", "scarcely", "slightly", "somewhat", "sort of", "sorta",
        "sortof", "sort-of",
    ] {
        map.insert(w, BOOST_DECR);
    }
    map
});

/// Multi-word idioms whose sentiment overrides the component words.
pub(crate) static IDIOMS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (k, v) in [
        ("the shit", 3.0),
        ("the bomb", 3.0),
        ("bad ass", 1.5),
        ("yeah right", -2.0),
        ("cut the mustard", 2.0),
        ("kiss of death", -1.5),
        ("hand to mouth", -2.0),
    ] {
        map.insert(k, v);
    }
    map
});

// Shouting: no lowercase letters anywhere, at least one uppercase letter.
static SHOUTING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^a-z]*[A-Z]+[^a-z]*$").expect("shouting regex"));

/// True when the input contains a negation.
///
/// Three triggers, checked in order:
/// 1. Any word is a known negation term (exact case).
/// 2. Any word contains the `n't` contraction suffix.
/// 3. "least" appears past position 0 and is not preceded by "at".
pub fn negated<S: AsRef<str>>(words: &[S]) -> bool {
    if words.iter().any(|w| NEGATIONS.contains(w.as_ref())) {
        return true;
    }
    if words.iter().any(|w| w.as_ref().contains("n't")) {
        return true;
    }
    match words.iter().position(|w| w.as_ref() == "least") {
        Some(i) => i > 0 && words[i - 1].as_ref() != "at",
        None => false,
    }
}

/// True for a word written in ALL CAPS. Leading/trailing symbols are fine
/// (`:)WORD:(` counts), a single lowercase letter disqualifies, and a word
/// with no letters at all (`:)`) is not shouting.
pub fn is_shouting(word: &str) -> bool {
    SHOUTING_RE.is_match(word)
}

/// True when only *some* words of the input are shouting. All-caps text and
/// all-lowercase text both carry no emphasis signal.
pub fn mixed_case_emphasis<S: AsRef<str>>(words: &[S]) -> bool {
    let shouting = words.iter().filter(|w| is_shouting(w.as_ref())).count();
    let differential = words.len() - shouting;
    differential > 0 && differential < words.len()
}

/// Intensity delta contributed by a preceding booster word, aligned with the
/// sign of the valence it modifies. Returns 0.0 for non-booster words.
/// A shouting booster under mixed-case emphasis gains a further
/// [`ALLCAPS_INCR`] in the direction of the valence.
pub fn booster_scalar(word: &str, valence: f64, mixed_caps: bool) -> f64 {
    let lower = word.to_lowercase();
    let mut scalar = match BOOSTERS.get(lower.as_str()) {
        Some(&delta) => delta,
        None => return 0.0,
    };
    if valence < 0.0 {
        scalar = -scalar;
    }
    if mixed_caps && is_shouting(word) {
        if valence > 0.0 {
            scalar += ALLCAPS_INCR;
        } else {
            scalar -= ALLCAPS_INCR;
        }
    }
    scalar
}

/// Map a raw valence sum onto `[-1, 1]`: `x / sqrt(x^2 + alpha)`.
pub fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZE_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}
