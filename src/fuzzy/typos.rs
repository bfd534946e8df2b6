// File: src/fuzzy/typos.rs
use std::collections::HashMap;

/// Misspellings and chat shorthand seen in support conversations.
/// The right-hand side may expand into several tokens.
const BUILTIN_TYPOS: &[(&str, &str)] = &[
    ("teh", "the"),
    ("hte", "the"),
    ("adn", "and"),
    ("nad", "and"),
    ("im", "i am"),
    ("ive", "i have"),
    ("u", "you"),
    ("ur", "your"),
    ("r", "are"),
    ("y", "why"),
    ("pls", "please"),
    ("plz", "please"),
    ("thx", "thanks"),
    ("ty", "thank you"),
    ("wat", "what"),
    ("wht", "what"),
    ("whats", "what is"),
    ("wheres", "where is"),
    ("hows", "how is"),
    ("whens", "when is"),
    ("dont", "do not"),
    ("doesnt", "does not"),
    ("cant", "can not"),
    ("wont", "will not"),
    ("isnt", "is not"),
    ("hrs", "hours"),
    ("mins", "minutes"),
    ("tmrw", "tomorrow"),
    ("tmr", "tomorrow"),
    ("2day", "today"),
    ("nite", "night"),
    ("b4", "before"),
    ("abt", "about"),
    ("recieve", "receive"),
    ("adress", "address"),
    ("nearist", "nearest"),
    ("closet", "closest"),
    ("opn", "open"),
];

/// Token → replacement tokens. A hit here is authoritative: the corrector
/// substitutes it without consulting the fuzzy index.
#[derive(Debug, Clone, Default)]
pub struct CommonTypoMap {
    entries: HashMap<String, Vec<String>>,
}

impl CommonTypoMap {
    pub fn builtin() -> Self {
        let mut map = Self::default();
        for (typo, replacement) in BUILTIN_TYPOS {
            map.insert(typo, replacement);
        }
        map
    }

    /// Adds or replaces an entry. Both sides are split on whitespace; an empty
    /// key or replacement is ignored.
    pub fn insert(&mut self, typo: &str, replacement: &str) {
        let key = typo.trim();
        let tokens: Vec<String> = replacement.split_whitespace().map(str::to_string).collect();
        if key.is_empty() || key.contains(char::is_whitespace) || tokens.is_empty() {
            return;
        }
        self.entries.insert(key.to_string(), tokens);
    }

    pub fn get(&self, token: &str) -> Option<&[String]> {
        self.entries.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
