//! Resume summarization via the LLM.
//!
//! Summarizing before skill extraction cuts noise (headers, addresses, page
//! artifacts from PDF extraction) and keeps the prompt small. Callers fall
//! back to the raw resume text when this fails; a match must never be blocked
//! by the summarizer.

use crate::advice::prompts::{SUMMARIZE_PROMPT_TEMPLATE, SUMMARIZE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Truncation threshold for the resume excerpt sent to the model.
const MAX_RESUME_CHARS: usize = 3000;
const TRUNCATION_MARKER: &str = "\n\n[...truncated...]";

/// Returns a plain-text bullet summary of `resume_text`.
pub async fn summarize_resume(resume_text: &str, llm: &LlmClient) -> Result<String, AppError> {
    let excerpt = excerpt_for_prompt(resume_text);
    let prompt = SUMMARIZE_PROMPT_TEMPLATE.replace("{resume_text}", &excerpt);

    let response = llm
        .call(&prompt, SUMMARIZE_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume summarization failed: {e}")))?;

    response
        .text()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Llm("Summarizer returned empty content".to_string()))
}

/// Caps the resume at `MAX_RESUME_CHARS` characters (char-boundary safe) and
/// appends a marker so the model knows the text was cut.
fn excerpt_for_prompt(resume_text: &str) -> String {
    match resume_text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((byte_index, _)) => format!("{}{}", &resume_text[..byte_index], TRUNCATION_MARKER),
        None => resume_text.to_string(),
    }
}
