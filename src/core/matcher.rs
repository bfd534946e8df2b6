// src/core/matcher.rs
use crate::config::EngineConfig;
use crate::core::normalize::{normalize, tokens};
use crate::core::types::{FaqItem, MatchResult};
use std::collections::HashSet;
use tracing::debug;

pub const EXACT_SCORE: f64 = 1.0;
pub const CONTAINMENT_SCORE: f64 = 0.92;
/// Variant scan for an item stops once a score reaches this.
const NEAR_PERFECT: f64 = 0.99;

/// Similarity of two normalized strings in `[0, 1]`: identical strings score
/// 1.0, one containing the other scores 0.92, anything else scores the Jaccard
/// overlap of their token sets.
pub fn score(query: &str, candidate: &str) -> f64 {
    if query.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    if query == candidate {
        return EXACT_SCORE;
    }
    if query.contains(candidate) || candidate.contains(query) {
        return CONTAINMENT_SCORE;
    }

    let a: HashSet<&str> = tokens(query).collect();
    let b: HashSet<&str> = tokens(candidate).collect();
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(&b).count() as f64 / union as f64
}

/// An FAQ item with its comparable strings normalized once up front.
#[derive(Debug, Clone)]
pub struct PreparedItem {
    /// Normalized question followed by normalized synonyms.
    variants: Vec<String>,
    keywords: Vec<String>,
}

impl PreparedItem {
    pub fn new(item: &FaqItem) -> Self {
        let variants = std::iter::once(&item.question)
            .chain(&item.synonyms)
            .map(|s| normalize(s))
            .filter(|s| !s.is_empty())
            .collect();
        let keywords = item
            .canonical_keywords
            .iter()
            .map(|s| normalize(s))
            .filter(|s| !s.is_empty())
            .collect();
        Self { variants, keywords }
    }

    /// Best variant score for `query`, plus the keyword bonus (capped at 1.0)
    /// when any canonical keyword occurs in the query.
    pub fn score(&self, query: &str, keyword_bonus: f64) -> f64 {
        let mut best = 0.0_f64;
        for variant in &self.variants {
            best = best.max(score(query, variant));
            if best >= NEAR_PERFECT {
                break;
            }
        }
        if self.keywords.iter().any(|keyword| query.contains(keyword.as_str())) {
            best = (best + keyword_bonus).min(1.0);
        }
        best
    }
}

/// Scores every item against `query`, in input order.
fn score_all<'a>(
    query: &str,
    items: &'a [FaqItem],
    prepared: &[PreparedItem],
    config: &EngineConfig,
) -> Vec<MatchResult<'a>> {
    if query.is_empty() {
        return Vec::new();
    }
    items
        .iter()
        .zip(prepared)
        .map(|(item, prep)| MatchResult {
            item,
            score: prep.score(query, config.keyword_bonus),
        })
        .collect()
}

/// Highest-scoring item for `text`, or `None` below `min_confidence`.
/// On equal scores the earlier item wins.
pub fn match_faq<'a>(text: &str, items: &'a [FaqItem], config: &EngineConfig) -> Option<MatchResult<'a>> {
    let prepared: Vec<PreparedItem> = items.iter().map(PreparedItem::new).collect();
    match_prepared(&normalize(text), items, &prepared, config)
}

/// [`match_faq`] over items prepared ahead of time. `query` must already be
/// normalized.
pub fn match_prepared<'a>(
    query: &str,
    items: &'a [FaqItem],
    prepared: &[PreparedItem],
    config: &EngineConfig,
) -> Option<MatchResult<'a>> {
    let mut best: Option<MatchResult<'a>> = None;
    for result in score_all(query, items, prepared, config) {
        if best.map_or(true, |b| result.score > b.score) {
            best = Some(result);
        }
    }

    match best {
        Some(found) if found.score >= config.min_confidence => {
            debug!(query, question = %found.item.question, score = found.score, "faq matched");
            Some(found)
        }
        _ => {
            debug!(query, "no faq above confidence floor");
            None
        }
    }
}

/// Up to `suggestion_count` items whose score falls in the suggestion band,
/// best first, input order breaking ties.
pub fn suggest_prepared<'a>(
    query: &str,
    items: &'a [FaqItem],
    prepared: &[PreparedItem],
    config: &EngineConfig,
) -> Vec<MatchResult<'a>> {
    let mut ranked: Vec<MatchResult<'a>> = score_all(query, items, prepared, config)
        .into_iter()
        .filter(|result| result.score > 0.0 && config.in_suggestion_band(result.score))
        .collect();
    // Stable sort keeps input order among equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(config.suggestion_count);
    ranked
}
