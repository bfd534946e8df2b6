// File: src/loader.rs
use crate::core::normalize::normalize;
use crate::core::types::FaqItem;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

/// On-disk shapes accepted for a knowledge base.
#[derive(Deserialize)]
#[serde(untagged)]
enum KnowledgeFile {
    List(Vec<FaqItem>),
    Wrapped { faqs: Vec<FaqItem> },
}

impl KnowledgeFile {
    fn into_items(self) -> Vec<FaqItem> {
        let items = match self {
            Self::List(items) | Self::Wrapped { faqs: items } => items,
        };
        items
            .into_iter()
            .filter(|item| {
                let keep = !normalize(&item.question).is_empty();
                if !keep {
                    warn!(question = %item.question, "skipping faq with empty question");
                }
                keep
            })
            .collect()
    }
}

pub fn load_knowledge_base(path: &Path) -> Result<Vec<FaqItem>> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let parsed: KnowledgeFile = serde_json::from_reader(reader).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parsed.into_items())
}

pub fn parse_knowledge_base(json: &str) -> serde_json::Result<Vec<FaqItem>> {
    serde_json::from_str::<KnowledgeFile>(json).map(KnowledgeFile::into_items)
}
