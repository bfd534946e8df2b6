// src/core/lexicon.rs
use crate::config::EngineConfig;
use crate::core::normalize::{normalize, tokens};
use crate::core::types::{DictionaryEntry, FaqItem, WordId};
use crate::fuzzy::symspell::DeleteIndex;
use crate::fuzzy::typos::CommonTypoMap;
use std::collections::{HashMap, HashSet};

const QUESTION_TOKEN_WEIGHT: u32 = 1;
const KEYWORD_TOKEN_WEIGHT: u32 = 2;

/// The domain vocabulary the corrector works against: weighted dictionary,
/// known phrases, the delete index over the dictionary and the misspelling map.
/// Built in one go and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<DictionaryEntry>,
    by_word: HashMap<String, WordId>,
    /// Normalized phrases in first-seen order, for deterministic snapping.
    phrases: Vec<String>,
    phrase_set: HashSet<String>,
    index: DeleteIndex,
    typos: CommonTypoMap,
}

impl Lexicon {
    /// Builds the vocabulary from every question, synonym and canonical
    /// keyword of the knowledge base.
    pub fn from_items(items: &[FaqItem], config: &EngineConfig) -> Self {
        let mut builder = LexiconBuilder::default();
        for item in items {
            builder.add_phrase(&item.question, QUESTION_TOKEN_WEIGHT);
            for synonym in &item.synonyms {
                builder.add_phrase(synonym, QUESTION_TOKEN_WEIGHT);
            }
            for keyword in &item.canonical_keywords {
                builder.add_phrase(keyword, KEYWORD_TOKEN_WEIGHT);
            }
        }
        builder.finish(config)
    }

    /// Builds a vocabulary from explicit `(word, weight)` pairs and phrases.
    pub fn from_words(words: &[(&str, u32)], phrases: &[&str], config: &EngineConfig) -> Self {
        let mut builder = LexiconBuilder::default();
        for &(word, weight) in words {
            builder.add_token(&normalize(word), weight);
        }
        for phrase in phrases {
            builder.add_phrase(phrase, 0);
        }
        builder.finish(config)
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    pub fn weight(&self, word: &str) -> Option<u32> {
        self.by_word.get(word).map(|&id| self.entries[id].weight)
    }

    /// Dictionary entries sharing a delete variant with `token`, ordered by
    /// word so that downstream tie-breaks are reproducible.
    pub fn candidates(&self, token: &str) -> Vec<&DictionaryEntry> {
        let mut found: Vec<&DictionaryEntry> = self
            .index
            .lookup(token)
            .into_iter()
            .map(|id| &self.entries[id])
            .collect();
        found.sort_by(|a, b| a.word.cmp(&b.word));
        found
    }

    pub fn is_phrase(&self, normalized: &str) -> bool {
        self.phrase_set.contains(normalized)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn typos(&self) -> &CommonTypoMap {
        &self.typos
    }

    pub fn index(&self) -> &DeleteIndex {
        &self.index
    }
}

#[derive(Default)]
struct LexiconBuilder {
    entries: Vec<DictionaryEntry>,
    by_word: HashMap<String, WordId>,
    phrases: Vec<String>,
    phrase_set: HashSet<String>,
}

impl LexiconBuilder {
    fn add_phrase(&mut self, raw: &str, token_weight: u32) {
        let phrase = normalize(raw);
        if phrase.is_empty() {
            return;
        }
        if token_weight > 0 {
            for token in tokens(&phrase) {
                self.add_token(token, token_weight);
            }
        }
        if self.phrase_set.insert(phrase.clone()) {
            self.phrases.push(phrase);
        }
    }

    fn add_token(&mut self, token: &str, weight: u32) {
        if token.is_empty() {
            return;
        }
        match self.by_word.get(token) {
            Some(&id) => self.entries[id].weight += weight,
            None => {
                self.by_word.insert(token.to_string(), self.entries.len());
                self.entries.push(DictionaryEntry {
                    word: token.to_string(),
                    weight,
                });
            }
        }
    }

    fn finish(self, config: &EngineConfig) -> Lexicon {
        let index = DeleteIndex::build(
            self.entries.iter().map(|entry| entry.word.as_str()),
            config.max_edit_distance,
        );
        let mut typos = CommonTypoMap::builtin();
        for (typo, replacement) in &config.extra_typos {
            typos.insert(&normalize(typo), &normalize(replacement));
        }
        Lexicon {
            entries: self.entries,
            by_word: self.by_word,
            phrases: self.phrases,
            phrase_set: self.phrase_set,
            index,
            typos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(question: &str, synonyms: &[&str], keywords: &[&str]) -> FaqItem {
        FaqItem {
            question: question.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
            canonical_keywords: keywords.iter().map(|s| s.to_string()).collect(),
            ..FaqItem::default()
        }
    }

    #[test]
    fn weights_count_occurrences_with_keyword_bias() {
        let items = [
            item("Where is my closest depot?", &["nearest depot"], &["depot"]),
            item("What are your opening times?", &["opening hours"], &[]),
        ];
        let lexicon = Lexicon::from_items(&items, &EngineConfig::default());
        assert_eq!(lexicon.weight("depot"), Some(4));
        assert_eq!(lexicon.weight("opening"), Some(2));
        assert_eq!(lexicon.weight("closest"), Some(1));
        assert_eq!(lexicon.weight("missing"), None);
    }

    #[test]
    fn phrases_are_normalized_and_ordered() {
        let items = [
            item("Where is my closest depot?", &["Nearest depot", "nearest  DEPOT"], &["depot"]),
        ];
        let lexicon = Lexicon::from_items(&items, &EngineConfig::default());
        assert_eq!(
            lexicon.phrases(),
            &["where is my closest depot", "nearest depot", "depot"]
        );
        assert!(lexicon.is_phrase("nearest depot"));
        assert!(!lexicon.is_phrase("Nearest depot"));
    }

    #[test]
    fn candidates_come_back_sorted() {
        let lexicon = Lexicon::from_words(
            &[("times", 1), ("tines", 1), ("timer", 1)],
            &[],
            &EngineConfig::default(),
        );
        let words: Vec<&str> = lexicon.candidates("timez").iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["timer", "times", "tines"]);
    }

    #[test]
    fn extra_typos_extend_the_builtin_map() {
        let mut config = EngineConfig::default();
        config.extra_typos.insert("Depto".into(), "depot".into());
        let lexicon = Lexicon::from_words(&[], &[], &config);
        assert_eq!(lexicon.typos().get("depto").map(|t| t.join(" ")), Some("depot".into()));
        assert!(lexicon.typos().get("teh").is_some());
    }

    #[test]
    fn empty_knowledge_base_gives_empty_structures() {
        let lexicon = Lexicon::from_items(&[], &EngineConfig::default());
        assert!(lexicon.entries().is_empty());
        assert!(lexicon.phrases().is_empty());
        assert!(lexicon.index().is_empty());
    }
}
