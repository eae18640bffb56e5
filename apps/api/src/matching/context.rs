//! Sentence-level context for missing skills.
//!
//! Deliberately looser than the extractor: a case-insensitive substring scan
//! over sentences, so a skill the strict token matcher missed can still show
//! up in phrasing ("containerized with Dockerfiles"). The sentence splitter is
//! a punctuation heuristic — abbreviations and decimals may over-split; that
//! behavior is part of the contract, not a bug to fix quietly.

use std::collections::BTreeMap;

/// Value used when no sentence mentions a skill, so consumers can always
/// assume non-empty context lists.
pub const NO_CONTEXT_SENTINEL: &str = "(No exact-sentence context found)";

/// Splits on `.`, `?`, or `!` immediately followed by whitespace. Results are
/// trimmed; empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if matches!(ch, '.' | '?' | '!') {
            if let Some(&(next_i, next_ch)) = chars.peek() {
                if next_ch.is_whitespace() {
                    push_trimmed(&mut sentences, &text[start..i + 1]);
                    start = next_i;
                }
            }
        }
    }
    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

/// For each missing skill, collects every sentence of `text` containing the
/// skill name as a case-insensitive substring, in document order. Skills with
/// no hits map to `[NO_CONTEXT_SENTINEL]`.
pub fn find_skill_context(text: &str, missing_skills: &[String]) -> BTreeMap<String, Vec<String>> {
    let sentences = split_sentences(text);
    let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();

    let mut context = BTreeMap::new();
    for skill in missing_skills {
        let needle = skill.to_lowercase();
        let hits: Vec<String> = sentences
            .iter()
            .zip(&lowered)
            .filter(|(_, lower)| lower.contains(&needle))
            .map(|(sentence, _)| sentence.clone())
            .collect();

        let value = if hits.is_empty() {
            vec![NO_CONTEXT_SENTINEL.to_string()]
        } else {
            hits
        };
        context.insert(skill.clone(), value);
    }
    context
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_splits_on_terminator_plus_whitespace() {
        let text = "First sentence. Second one! Third one? Trailing";
        assert_eq!(
            split_sentences(text),
            vec!["First sentence.", "Second one!", "Third one?", "Trailing"]
        );
    }

    #[test]
    fn test_terminator_without_whitespace_does_not_split() {
        // "Node.js" stays inside one sentence; the period has no following space.
        assert_eq!(
            split_sentences("We use Node.js heavily"),
            vec!["We use Node.js heavily"]
        );
    }

    #[test]
    fn test_abbreviations_over_split_is_accepted() {
        // Heuristic splitter: "e.g. Rust" splits after "e.g." — by contract.
        assert_eq!(split_sentences("Languages, e.g. Rust."), vec!["Languages, e.g.", "Rust."]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n  ").is_empty());
    }

    #[test]
    fn test_context_is_case_insensitive_substring() {
        let text = "Built pipelines with DOCKERFILES. Unrelated sentence.";
        let ctx = find_skill_context(text, &skills(&["Docker"]));
        assert_eq!(ctx["Docker"], vec!["Built pipelines with DOCKERFILES."]);
    }

    #[test]
    fn test_context_collects_all_hits_in_order() {
        let text = "Rust services in prod. Then more Rust tooling. Nothing else.";
        let ctx = find_skill_context(text, &skills(&["Rust"]));
        assert_eq!(
            ctx["Rust"],
            vec!["Rust services in prod.", "Then more Rust tooling."]
        );
    }

    #[test]
    fn test_sentinel_when_no_sentence_matches() {
        let ctx = find_skill_context("No mention here.", &skills(&["Rust"]));
        assert_eq!(ctx["Rust"], vec![NO_CONTEXT_SENTINEL]);
    }

    #[test]
    fn test_every_requested_skill_gets_an_entry() {
        let ctx = find_skill_context("Only Python here.", &skills(&["Python", "Go"]));
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx["Python"], vec!["Only Python here."]);
        assert_eq!(ctx["Go"], vec![NO_CONTEXT_SENTINEL]);
    }
}
