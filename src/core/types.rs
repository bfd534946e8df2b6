// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Index of a word in the lexicon's dictionary table.
pub type WordId = usize;

/// One dictionary token and its frequency/importance bias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    /// Occurrence-based weight. Only used as a small tie-break in fuzzy scoring.
    pub weight: u32,
}

/// A knowledge-base record. The matching core only ever reads these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub question: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub canonical_keywords: Vec<String>,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub follow_ups: Vec<String>,
}

/// The outcome of correcting one token.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Replacement text. May hold several space-separated tokens.
    pub replacement: String,
    /// Confidence in `[0, 1]`.
    pub score: f64,
    pub distance: usize,
}

/// A scored knowledge-base item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    pub item: &'a FaqItem,
    pub score: f64,
}

/// Everything the renderer needs for one intent of an utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentReply<'a> {
    /// The intent as split from the raw utterance.
    pub intent: String,
    pub corrected: String,
    pub best: Option<MatchResult<'a>>,
    /// Ranked best-first; never contains `best`.
    pub suggestions: Vec<MatchResult<'a>>,
}
