//! LLM-backed advice: resume summarization and improvement suggestions.

pub mod prompts;
pub mod suggestions;
pub mod summarizer;

pub use suggestions::{
    template_output, LlmSuggestionEngine, SuggestionEngine, SuggestionOutput,
    TemplateSuggestionEngine,
};
pub use summarizer::summarize_resume;
