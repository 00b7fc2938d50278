//! # Lexicon
//!
//! Immutable word → valence map backing the analyzer. Keys are normalized
//! to lowercase at load time; values are mean intensity ratings in roughly
//! `[-4.0, 4.0]`.
//!
//! - `bundled()` returns the compiled-in default asset (shared, loaded once).
//! - `from_json_str` / `from_tsv_str` / `from_file` load external assets;
//!   the tab-separated form is the classic distribution format
//!   (`word<TAB>valence`, extra columns ignored).
//! - `from_entries` builds a lexicon in code, mainly for tests and
//!   domain-specific substitutions.

use anyhow::Context;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

static BUNDLED: Lazy<Arc<Lexicon>> = Lazy::new(|| {
    let raw = include_str!("../vader_lexicon.json");
    let lexicon = Lexicon::from_json_str(raw).expect("valid bundled lexicon");
    info!(entries = lexicon.len(), "bundled sentiment lexicon loaded");
    Arc::new(lexicon)
});

#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Shared handle to the compiled-in default asset.
    pub fn bundled() -> Arc<Self> {
        Arc::clone(&BUNDLED)
    }

    /// Build from `(word, valence)` pairs. Keys are lowercased.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(word, valence)| (word.as_ref().to_lowercase(), valence))
            .collect();
        Self { entries }
    }

    /// Parse a JSON object of word → valence.
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let parsed: HashMap<String, f64> =
            serde_json::from_str(raw).context("parsing lexicon JSON")?;
        Ok(Self::from_entries(parsed))
    }

    /// Parse the classic tab-separated lexicon format: one `word<TAB>valence`
    /// per line, any further tab-separated columns ignored, blank lines
    /// skipped.
    pub fn from_tsv_str(raw: &str) -> anyhow::Result<Self> {
        let mut entries = HashMap::new();
        for (lineno, line) in raw.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let word = fields
                .next()
                .filter(|w| !w.is_empty())
                .with_context(|| format!("lexicon line {}: missing word", lineno + 1))?;
            let valence = fields
                .next()
                .with_context(|| format!("lexicon line {}: missing valence", lineno + 1))?
                .trim()
                .parse::<f64>()
                .with_context(|| format!("lexicon line {}: invalid valence", lineno + 1))?;
            entries.insert(word.to_lowercase(), valence);
        }
        Ok(Self { entries })
    }

    /// Load from a file, dispatching on the extension: `.json` parses as a
    /// JSON object, anything else as tab-separated.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading lexicon file {}", path.display()))?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let lexicon = if is_json {
            Self::from_json_str(&raw)
        } else {
            Self::from_tsv_str(&raw)
        }
        .with_context(|| format!("parsing lexicon file {}", path.display()))?;
        info!(
            path = %path.display(),
            entries = lexicon.len(),
            "sentiment lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Base valence for a word. The word must already be lowercase; tokens
    /// are lowercased once in the scoring pipeline before lookup.
    #[inline]
    pub fn valence(&self, word: &str) -> Option<f64> {
        self.entries.get(word).copied()
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
