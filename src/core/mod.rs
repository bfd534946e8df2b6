// src/core/mod.rs
pub mod engine;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod splitter;
pub mod types;
