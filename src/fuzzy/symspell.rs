// File: src/fuzzy/symspell.rs
use crate::core::types::WordId;
use std::collections::{HashMap, HashSet};

/// Fuzzy candidate index based on the Symmetric Delete (SymSpell) algorithm.
/// It pre-calculates every "delete" of each dictionary word, so a lookup costs
/// O(k^2) in the query length instead of a distance check per dictionary word.
#[derive(Debug, Clone, Default)]
pub struct DeleteIndex {
    /// Maps a delete variant (e.g., "openng") to the words it could have come
    /// from (e.g., [id_for_opening]). Every word is also a key of itself.
    deletes: HashMap<String, HashSet<WordId>>,
    max_edit_distance: usize,
}

impl DeleteIndex {
    pub fn new(max_edit_distance: usize) -> Self {
        Self {
            deletes: HashMap::new(),
            max_edit_distance,
        }
    }

    /// Builds the index over `words`, using each word's position as its id.
    pub fn build<'a>(words: impl IntoIterator<Item = &'a str>, max_edit_distance: usize) -> Self {
        let mut index = Self::new(max_edit_distance);
        for (word_id, word) in words.into_iter().enumerate() {
            index.add_word(word, word_id);
        }
        index
    }

    /// Adds a word by generating all its delete variants up to the configured
    /// edit distance and mapping them back to the word's id.
    pub fn add_word(&mut self, word: &str, word_id: WordId) {
        for edit in self.generate_edits(word) {
            self.deletes.entry(edit).or_default().insert(word_id);
        }
    }

    /// Returns the ids of every word sharing a delete variant with `input`.
    /// The result is a superset of the words within `max_edit_distance`;
    /// callers verify the real distance.
    pub fn lookup(&self, input: &str) -> HashSet<WordId> {
        let mut candidates = HashSet::new();

        // The raw input as a key covers dictionary words longer than the input
        if let Some(word_ids) = self.deletes.get(input) {
            candidates.extend(word_ids.iter().copied());
        }

        for edit in self.generate_edits(input) {
            if let Some(word_ids) = self.deletes.get(&edit) {
                candidates.extend(word_ids.iter().copied());
            }
        }
        candidates
    }

    /// Number of distinct delete-variant keys.
    pub fn len(&self) -> usize {
        self.deletes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty()
    }

    /// Generates all unique variants reachable by deleting up to
    /// `max_edit_distance` chars. Includes the original string itself.
    fn generate_edits(&self, word: &str) -> HashSet<String> {
        let mut edits = HashSet::new();
        edits.insert(word.to_string()); // Distance 0

        let mut current_edits = edits.clone();

        for _ in 0..self.max_edit_distance {
            let mut next_edits = HashSet::new();
            for edit in &current_edits {
                for (i, _) in edit.char_indices() {
                    let mut deleted_variant = edit.clone();
                    deleted_variant.remove(i);
                    if !edits.contains(&deleted_variant) {
                        next_edits.insert(deleted_variant);
                    }
                }
            }
            if next_edits.is_empty() {
                break;
            }
            edits.extend(next_edits.iter().cloned());
            current_edits = next_edits;
        }

        edits
    }
}
