use faq_core::loader::load_knowledge_base;
use faq_core::{EngineConfig, Error, FaqEngine};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn sample_kb() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("faq.json")
}

fn engine_with(config: EngineConfig) -> FaqEngine {
    FaqEngine::from_file(config, &sample_kb()).expect("sample knowledge base loads")
}

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn misspelled_question_finds_its_answer() {
    let engine = engine_with(EngineConfig::default());
    let replies = engine.respond("Whats the opning times?");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].corrected, "opening times");
    let best = replies[0].best.expect("a match");
    assert_eq!(best.item.question, "What are your opening times?");
    assert_eq!(best.score, 1.0);
}

#[test]
fn compound_question_yields_one_reply_per_intent() {
    let engine = engine_with(EngineConfig::default());
    let replies = engine.respond("closest depot, delivery cost");
    let questions: Vec<&str> = replies
        .iter()
        .map(|r| r.best.expect("each intent matches").item.question.as_str())
        .collect();
    assert_eq!(
        questions,
        vec!["Where is my closest depot?", "How much does delivery cost?"]
    );
    assert_eq!(replies[1].corrected, "how much does delivery cost");
}

#[test]
fn keyword_inside_a_longer_query_snaps_to_that_keyword() {
    let engine = engine_with(EngineConfig::default());
    // "hours" is the first known phrase contained in the query
    assert_eq!(engine.correct_query("bank holiday hours"), "hours");
}

#[test]
fn suggestions_exclude_the_best_match() {
    let engine = engine_with(EngineConfig::default());
    let replies = engine.respond("Holiday hours?");
    let reply = &replies[0];
    assert_eq!(reply.best.unwrap().item.question, "Are you open on bank holidays?");
    let suggested: Vec<&str> = reply.suggestions.iter().map(|s| s.item.question.as_str()).collect();
    assert_eq!(suggested, vec!["What are your opening times?"]);
}

#[test]
fn gibberish_matches_nothing() {
    let engine = engine_with(EngineConfig::default());
    let replies = engine.respond("xyzzy plugh");
    assert!(replies[0].best.is_none());
    assert!(replies[0].suggestions.is_empty());
}

#[test]
fn config_file_caps_intents() {
    let file = json_file(r#"{ "max_intents": 1 }"#);
    let config = EngineConfig::from_path(file.path()).unwrap();
    let engine = engine_with(config);
    let replies = engine.respond("opening hours and closest depot");
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].best.unwrap().item.question, "What are your opening times?");
}

#[test]
fn long_input_skips_correction() {
    let config = EngineConfig { max_query_length: 10, ..EngineConfig::default() };
    let engine = engine_with(config);
    assert_eq!(engine.correct_query("Whats teh opning times"), "Whats teh opning times");
}

#[test]
fn bad_config_files_are_reported() {
    let invalid = json_file(r#"{ "min_confidence": 2.0 }"#);
    assert!(matches!(
        EngineConfig::from_path(invalid.path()),
        Err(Error::InvalidConfig(_))
    ));

    let malformed = json_file("{ not json");
    assert!(matches!(
        EngineConfig::from_path(malformed.path()),
        Err(Error::Json { .. })
    ));
}

#[test]
fn rebuild_from_a_new_file() {
    let mut engine = engine_with(EngineConfig::default());
    assert!(engine.match_faq("refund").is_some());

    let file = json_file(
        r#"{ "faqs": [{ "question": "Do you sell gift cards?", "canonicalKeywords": ["gift card"] }] }"#,
    );
    engine.rebuild(load_knowledge_base(file.path()).unwrap());

    assert!(engine.match_faq("refund").is_none());
    assert_eq!(engine.correct_query("gift crads"), "do you sell gift cards");
    assert_eq!(
        engine.match_faq("gift cards").unwrap().item.question,
        "Do you sell gift cards?"
    );
}
