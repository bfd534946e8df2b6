use crate::config::EngineConfig;
use crate::core::lexicon::Lexicon;
use crate::core::matcher::{match_prepared, suggest_prepared, PreparedItem};
use crate::core::normalize::normalize;
use crate::core::splitter::split_intents;
use crate::core::types::{FaqItem, IntentReply, MatchResult};
use crate::error::Result;
use crate::fuzzy::corrector::TypoCorrector;
use crate::loader::load_knowledge_base;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Everything derived from one knowledge-base load. Built completely before
/// it is published, and never mutated afterwards.
#[derive(Debug, Default)]
pub struct Snapshot {
    items: Vec<FaqItem>,
    prepared: Vec<PreparedItem>,
    lexicon: Lexicon,
}

impl Snapshot {
    fn build(items: Vec<FaqItem>, config: &EngineConfig) -> Self {
        let prepared = items.iter().map(PreparedItem::new).collect();
        let lexicon = Lexicon::from_items(&items, config);
        info!(
            items = items.len(),
            words = lexicon.entries().len(),
            phrases = lexicon.phrases().len(),
            index_keys = lexicon.index().len(),
            "knowledge base indexed"
        );
        Self { items, prepared, lexicon }
    }

    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }
}

// The engine is a pure function of (text, knowledge base, config): it keeps
// no conversational state between calls.
pub struct FaqEngine {
    config: EngineConfig,
    snapshot: Arc<Snapshot>,
}

impl FaqEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            snapshot: Arc::new(Snapshot::default()),
        }
    }

    pub fn with_items(config: EngineConfig, items: Vec<FaqItem>) -> Self {
        let snapshot = Arc::new(Snapshot::build(items, &config));
        Self { config, snapshot }
    }

    pub fn from_file(config: EngineConfig, path: &Path) -> Result<Self> {
        let items = load_knowledge_base(path)?;
        Ok(Self::with_items(config, items))
    }

    /// Replaces the whole knowledge base. Snapshots handed out earlier stay
    /// valid and unchanged.
    pub fn rebuild(&mut self, items: Vec<FaqItem>) {
        self.snapshot = Arc::new(Snapshot::build(items, &self.config));
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    pub fn correct_query(&self, text: &str) -> String {
        TypoCorrector::new(&self.snapshot.lexicon, &self.config).correct_query(text)
    }

    pub fn split_intents(&self, text: &str) -> Vec<String> {
        split_intents(text, self.config.max_intents)
    }

    pub fn match_faq(&self, text: &str) -> Option<MatchResult<'_>> {
        let snapshot = &*self.snapshot;
        match_prepared(&normalize(text), &snapshot.items, &snapshot.prepared, &self.config)
    }

    pub fn suggest(&self, text: &str) -> Vec<MatchResult<'_>> {
        let snapshot = &*self.snapshot;
        suggest_prepared(&normalize(text), &snapshot.items, &snapshot.prepared, &self.config)
    }

    /// Full pipeline: split into intents, correct each, then match and rank.
    /// Splitting runs on the raw text so punctuation connectors survive.
    pub fn respond(&self, text: &str) -> Vec<IntentReply<'_>> {
        self.split_intents(text)
            .into_iter()
            .map(|intent| {
                let corrected = self.correct_query(&intent);
                let best = self.match_faq(&corrected);
                let suggestions = self
                    .suggest(&corrected)
                    .into_iter()
                    .filter(|s| best.map_or(true, |b| !std::ptr::eq(s.item, b.item)))
                    .collect();
                IntentReply {
                    intent,
                    corrected,
                    best,
                    suggestions,
                }
            })
            .collect()
    }
}
