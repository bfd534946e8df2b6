// File: src/fuzzy/corrector.rs
use crate::config::EngineConfig;
use crate::core::lexicon::Lexicon;
use crate::core::matcher::score;
use crate::core::normalize::{normalize, tokens};
use crate::core::types::Candidate;
use crate::fuzzy::distance::damerau_levenshtein;
use tracing::debug;

const SPLIT_MIN_TOKEN_LEN: usize = 7;
const SPLIT_MIN_PART_LEN: usize = 3;
const SPLIT_SCORE: f64 = 0.88;
const MAX_WEIGHT_BONUS: f64 = 0.12;
const WEIGHT_BONUS_DIVISOR: f64 = 50.0;

/// Rewrites free text towards the lexicon's vocabulary, one token at a time,
/// then snaps the result onto a known phrase when it lands close to one.
/// Never fails: anything it cannot improve is passed through.
pub struct TypoCorrector<'a> {
    lexicon: &'a Lexicon,
    config: &'a EngineConfig,
}

impl<'a> TypoCorrector<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &'a EngineConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn correct_query(&self, text: &str) -> String {
        if text.chars().count() > self.config.max_query_length {
            debug!(len = text.chars().count(), "query too long, skipping correction");
            return text.to_string();
        }

        let normalized = normalize(text);
        if normalized.is_empty() || self.lexicon.is_phrase(&normalized) {
            return normalized;
        }

        let mut corrected: Vec<String> = Vec::new();
        for token in tokens(&normalized) {
            self.correct_token(token, &mut corrected);
        }
        let assembled = corrected.join(" ");

        match self.snap_to_phrase(&assembled) {
            Some(phrase) => {
                debug!(from = %assembled, to = phrase, "snapped to known phrase");
                phrase.to_string()
            }
            None => assembled,
        }
    }

    /// Pushes the corrected form of one token (possibly several words) to `out`.
    fn correct_token(&self, token: &str, out: &mut Vec<String>) {
        let token = collapse_repeats(token);

        if token.chars().all(|c| c.is_ascii_digit()) {
            out.push(token);
            return;
        }
        if let Some(replacement) = self.lexicon.typos().get(&token) {
            out.extend(replacement.iter().cloned());
            return;
        }
        if self.lexicon.contains_word(&token) {
            out.push(token);
            return;
        }

        match self.best_candidate(&token) {
            Some(candidate) if self.accepts(&candidate) => {
                debug!(
                    token = %token,
                    replacement = %candidate.replacement,
                    score = candidate.score,
                    "corrected token"
                );
                out.extend(candidate.replacement.split(' ').map(str::to_string));
            }
            _ => out.push(token),
        }
    }

    /// The most plausible correction for `token`, before the acceptance check.
    pub fn best_candidate(&self, token: &str) -> Option<Candidate> {
        if let Some(replacement) = self.lexicon.typos().get(token) {
            return Some(Candidate {
                replacement: replacement.join(" "),
                score: 1.0,
                distance: 0,
            });
        }
        if let Some(split) = self.split_joined(token) {
            return Some(split);
        }
        self.best_fuzzy(token)
    }

    /// Whether a candidate clears the acceptance floor. Inclusive.
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        candidate.score >= self.config.min_correction_score
    }

    /// Splits a run-together token into two dictionary words, trying split
    /// points left to right.
    fn split_joined(&self, token: &str) -> Option<Candidate> {
        let chars: Vec<(usize, char)> = token.char_indices().collect();
        if chars.len() < SPLIT_MIN_TOKEN_LEN {
            return None;
        }
        (SPLIT_MIN_PART_LEN..=chars.len() - SPLIT_MIN_PART_LEN).find_map(|at| {
            let (left, right) = token.split_at(chars[at].0);
            (self.lexicon.contains_word(left) && self.lexicon.contains_word(right)).then(|| {
                Candidate {
                    replacement: format!("{left} {right}"),
                    score: SPLIT_SCORE,
                    distance: 1,
                }
            })
        })
    }

    /// Scores index hits by length-relative similarity plus a small
    /// frequency bias. Hits over the distance-ratio ceiling are discarded.
    fn best_fuzzy(&self, token: &str) -> Option<Candidate> {
        let token_len = token.chars().count();
        let mut best: Option<(f64, Candidate)> = None;

        for entry in self.lexicon.candidates(token) {
            let distance = damerau_levenshtein(token, &entry.word);
            if distance == 0 {
                continue;
            }
            let longest = token_len.max(entry.word.chars().count());
            let ratio = distance as f64 / longest as f64;
            if ratio > self.config.max_distance_ratio {
                continue;
            }

            let bias = (f64::from(entry.weight) / WEIGHT_BONUS_DIVISOR).min(MAX_WEIGHT_BONUS);
            let raw = (1.0 - ratio) + bias;
            if best.as_ref().map_or(true, |(top, _)| raw > *top) {
                best = Some((
                    raw,
                    Candidate {
                        replacement: entry.word.clone(),
                        score: raw.min(1.0),
                        distance,
                    },
                ));
            }
        }

        best.map(|(_, candidate)| candidate)
    }

    /// The best-scoring known phrase for `assembled`, if it clears the snap
    /// threshold. Ties go to the earlier phrase.
    fn snap_to_phrase(&self, assembled: &str) -> Option<&'a str> {
        if assembled.is_empty() {
            return None;
        }
        let mut best: Option<(f64, &'a str)> = None;

        for phrase in self.lexicon.phrases() {
            let s = score(assembled, phrase);
            if best.map_or(true, |(top, _)| s > top) {
                best = Some((s, phrase.as_str()));
            }
        }

        best.filter(|(s, _)| *s >= self.config.phrase_snap_threshold)
            .map(|(_, phrase)| phrase)
    }
}

/// Shrinks runs of three or more identical letters to two ("soooo" → "soo").
fn collapse_repeats(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut last = None;
    let mut run = 0;
    for c in token.chars() {
        if Some(c) == last {
            run += 1;
        } else {
            last = Some(c);
            run = 1;
        }
        if run <= 2 || !c.is_alphabetic() {
            out.push(c);
        }
    }
    out
}
