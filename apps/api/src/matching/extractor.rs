//! Skill extraction — finds canonical vocabulary skills in free-form text.
//!
//! Default: `TokenWindowMatcher` (pure, deterministic, no external model).
//! The `PhraseMatching` seam exists so a smarter matcher can be swapped in
//! without touching handlers: same input (text), same output (canonical names).
//!
//! `AppState` holds an `Arc<dyn PhraseMatching>`.

use std::collections::BTreeSet;

use crate::matching::tokenizer::tokenize;
use crate::matching::vocabulary::SkillVocabulary;

/// Capability seam: text in, set of canonical skill names out.
pub trait PhraseMatching: Send + Sync {
    fn extract_skills(&self, text: &str) -> BTreeSet<String>;
}

/// Exact token-sequence matcher over a frozen vocabulary.
///
/// Single-token skills match on token membership anywhere in the text;
/// multi-token skills match only when a contiguous token window equals the
/// skill's token sequence exactly and in order. Matching is whole-token:
/// "javascript" never matches the skill "Java".
pub struct TokenWindowMatcher {
    vocabulary: SkillVocabulary,
}

impl TokenWindowMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }
}

impl PhraseMatching for TokenWindowMatcher {
    fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let text_tokens = tokenize(text);
        let mut found = BTreeSet::new();

        for (canonical, skill_tokens) in self.vocabulary.token_entries() {
            let hit = match skill_tokens.as_slice() {
                [single] => text_tokens.iter().any(|t| t == single),
                window => text_tokens
                    .windows(window.len())
                    .any(|candidate| candidate == window),
            };
            if hit {
                found.insert(canonical.clone());
            }
        }
        found
    }
}
