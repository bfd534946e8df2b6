// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod loader;
pub use crate::config::EngineConfig;
pub use crate::core::engine::FaqEngine;
pub use crate::core::types::{Candidate, FaqItem, IntentReply, MatchResult};
pub use crate::error::{Error, Result};
