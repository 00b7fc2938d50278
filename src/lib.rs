// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod analyzer;
pub mod heuristics;
pub mod lexicon;
pub mod scores;
pub mod tokenizer;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::SentimentAnalyzer;
pub use crate::heuristics::{booster_scalar, is_shouting, mixed_case_emphasis, negated, normalize};
pub use crate::lexicon::Lexicon;
pub use crate::scores::{Polarity, SentimentScores};
pub use crate::tokenizer::TokenizedText;
