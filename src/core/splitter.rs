// src/core/splitter.rs
use tracing::debug;

/// Connectors in the order they are tried.
pub const CONNECTORS: &[&str] = &["and", "also", "&", ",", "plus"];

/// Breaks a compound utterance into at most `max_parts` intents.
///
/// Connectors are whole words (or the `&` and `,` symbols, which need no
/// surrounding spaces). Each connector in [`CONNECTORS`] is applied in turn,
/// splitting at its leftmost occurrence until the cap is reached. Fragments
/// are trimmed, empty ones dropped, and output order follows the source text.
/// Always returns at least one element.
pub fn split_intents(text: &str, max_parts: usize) -> Vec<String> {
    let spaced = text.replace(',', " , ").replace('&', " & ");
    let words: Vec<&str> = spaced.split_whitespace().collect();

    let mut parts: Vec<&[&str]> = vec![&words[..]];
    for connector in CONNECTORS {
        while parts.len() < max_parts.max(1) {
            let Some((part_idx, word_idx)) = find_connector(&parts, connector) else {
                break;
            };
            let part = parts.remove(part_idx);
            let (left, right) = (&part[..word_idx], &part[word_idx + 1..]);
            let pieces = [left, right].into_iter().filter(|p| !p.is_empty());
            for (offset, piece) in pieces.enumerate() {
                parts.insert(part_idx + offset, piece);
            }
        }
    }

    let intents: Vec<String> = parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| join_fragment(p))
        .collect();
    if intents.is_empty() {
        return vec![text.trim().to_string()];
    }
    if intents.len() > 1 {
        debug!(?intents, "split utterance");
    }
    intents
}

fn find_connector(parts: &[&[&str]], connector: &str) -> Option<(usize, usize)> {
    parts.iter().enumerate().find_map(|(part_idx, part)| {
        part.iter()
            .position(|word| word.eq_ignore_ascii_case(connector))
            .map(|word_idx| (part_idx, word_idx))
    })
}

/// Rejoins words, reattaching commas that were padded for tokenizing.
fn join_fragment(words: &[&str]) -> String {
    let mut out = String::new();
    for word in words {
        if !out.is_empty() && *word != "," {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_and() {
        assert_eq!(
            split_intents("opening times and closest depot", 2),
            vec!["opening times", "closest depot"]
        );
    }

    #[test]
    fn no_connector_gives_single_part() {
        assert_eq!(split_intents("  closest depot ", 2), vec!["closest depot"]);
        assert_eq!(split_intents("", 2), vec![""]);
    }

    #[test]
    fn connector_must_be_a_whole_word() {
        assert_eq!(split_intents("brand standards", 2), vec!["brand standards"]);
        assert_eq!(split_intents("Salsa plusher", 2), vec!["Salsa plusher"]);
    }

    #[test]
    fn symbols_split_without_spaces() {
        assert_eq!(split_intents("hours&depot", 2), vec!["hours", "depot"]);
        assert_eq!(split_intents("hours, depot", 2), vec!["hours", "depot"]);
    }

    #[test]
    fn cap_leaves_remaining_connectors_in_last_part() {
        assert_eq!(
            split_intents("hours and depot and delivery", 2),
            vec!["hours", "depot and delivery"]
        );
        assert_eq!(
            split_intents("hours and depot and delivery", 3),
            vec!["hours", "depot", "delivery"]
        );
    }

    #[test]
    fn priority_order_does_not_reorder_output() {
        // "also" is tried after "and" but sits earlier in the text
        assert_eq!(
            split_intents("hours also depot and delivery", 3),
            vec!["hours", "depot", "delivery"]
        );
    }

    #[test]
    fn empty_fragments_are_dropped() {
        assert_eq!(split_intents("and depot", 2), vec!["depot"]);
        assert_eq!(split_intents("and", 2), vec!["and"]);
    }

    #[test]
    fn single_part_cap_never_splits() {
        assert_eq!(split_intents("hours and depot", 1), vec!["hours and depot"]);
    }
}
