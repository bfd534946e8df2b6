// File: src/fuzzy/mod.rs
pub mod corrector;
pub mod distance;
pub mod symspell;
pub mod typos;
