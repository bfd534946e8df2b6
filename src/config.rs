// File: src/config.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Tuning knobs for correction and matching. Every field has a default, so
/// an empty JSON object is a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Inputs longer than this many chars skip correction entirely.
    pub max_query_length: usize,
    /// Radius of the delete index; candidates farther away are rejected.
    pub max_edit_distance: usize,
    /// Ceiling on `distance / max(len)` for a fuzzy candidate.
    pub max_distance_ratio: f64,
    /// Inclusive floor for accepting a token correction.
    pub min_correction_score: f64,
    /// Floor for replacing a corrected query with a known phrase.
    pub phrase_snap_threshold: f64,
    /// Floor for reporting an FAQ match.
    pub min_confidence: f64,
    /// Added when a canonical keyword occurs in the query.
    pub keyword_bonus: f64,
    pub max_intents: usize,
    pub suggestion_min_score: f64,
    pub suggestion_max_score: f64,
    pub suggestion_count: usize,
    /// Merged over the built-in misspelling map.
    pub extra_typos: HashMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_query_length: 200,
            max_edit_distance: 2,
            max_distance_ratio: 0.38,
            min_correction_score: 0.70,
            phrase_snap_threshold: 0.86,
            min_confidence: 0.20,
            keyword_bonus: 0.15,
            max_intents: 2,
            suggestion_min_score: 0.10,
            suggestion_max_score: 1.0,
            suggestion_count: 3,
            extra_typos: HashMap::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let unit_fields = [
            ("max_distance_ratio", self.max_distance_ratio),
            ("min_correction_score", self.min_correction_score),
            ("phrase_snap_threshold", self.phrase_snap_threshold),
            ("min_confidence", self.min_confidence),
            ("keyword_bonus", self.keyword_bonus),
            ("suggestion_min_score", self.suggestion_min_score),
            ("suggestion_max_score", self.suggestion_max_score),
        ];
        for (name, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        if self.max_intents == 0 {
            return Err(Error::InvalidConfig("max_intents must be at least 1".into()));
        }
        if self.suggestion_min_score > self.suggestion_max_score {
            return Err(Error::InvalidConfig(
                "suggestion_min_score exceeds suggestion_max_score".into(),
            ));
        }
        Ok(())
    }

    /// True when `score` falls inside the suggestion band, both edges included.
    pub fn in_suggestion_band(&self, score: f64) -> bool {
        score >= self.suggestion_min_score && score <= self.suggestion_max_score
    }
}
