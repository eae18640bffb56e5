//! Skill extraction and matching core.
//!
//! Everything here is pure and synchronous over a vocabulary frozen at
//! startup; the only async code is the route handler gluing the pipeline
//! to PDF extraction and the LLM.

pub mod compare;
pub mod context;
pub mod extractor;
pub mod handlers;
pub mod tokenizer;
pub mod vocabulary;

pub use compare::{compare_skills, SkillComparison};
pub use context::{find_skill_context, split_sentences, NO_CONTEXT_SENTINEL};
pub use extractor::{PhraseMatching, TokenWindowMatcher};
pub use vocabulary::SkillVocabulary;
