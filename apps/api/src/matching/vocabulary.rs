//! Skill vocabulary — the canonical list of recognizable skill names.
//!
//! Loaded once at startup from a JSON array of strings (`skill_patterns.json`)
//! and frozen for the process lifetime. The derived token map drives the
//! extractor; canonical casing is preserved for output.

use std::path::Path;

use thiserror::Error;

use crate::matching::tokenizer::tokenize;

/// Vocabulary loading failed. Fatal at startup — the service must not begin
/// accepting match requests without a vocabulary.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read skill vocabulary from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("skill vocabulary at {path} is not a JSON array of strings")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The canonical skill list plus its derived token map.
///
/// `terms` keeps the file's order and casing. `token_map` pairs each canonical
/// name with its token sequence; entries that tokenize to nothing are dropped
/// there since they can never match.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
    token_map: Vec<(String, Vec<String>)>,
}

impl SkillVocabulary {
    /// Reads a JSON array of canonical skill names from `path`.
    pub fn load(path: &Path) -> Result<Self, VocabularyError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| VocabularyError::Read {
            path: display.clone(),
            source,
        })?;
        let terms: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| VocabularyError::Parse {
                path: display,
                source,
            })?;
        Ok(Self::from_terms(terms))
    }

    /// Builds a vocabulary from an in-memory term list. Used directly in tests
    /// so each test can run against its own vocabulary.
    pub fn from_terms(terms: Vec<String>) -> Self {
        let token_map = terms
            .iter()
            .filter_map(|term| {
                let tokens = tokenize(term);
                if tokens.is_empty() {
                    None
                } else {
                    Some((term.clone(), tokens))
                }
            })
            .collect();
        Self { terms, token_map }
    }

    /// Canonical terms in file order, including unmatchable ones.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// (canonical name, token sequence) pairs for every matchable entry.
    pub fn token_entries(&self) -> impl Iterator<Item = &(String, Vec<String>)> {
        self.token_map.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Number of entries that can actually match (non-empty token sequence).
    pub fn matchable_len(&self) -> usize {
        self.token_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
