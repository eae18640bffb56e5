#![allow(dead_code)]

//! Suggestion generation — pluggable, trait-based engine producing rewritten
//! resume bullets and per-missing-skill advice.
//!
//! Default: `LlmSuggestionEngine` (structured JSON output via the LLM).
//! Fallback: `TemplateSuggestionEngine` (deterministic strings, no network),
//! which the match handler uses when the LLM path fails.
//!
//! `AppState` holds an `Arc<dyn SuggestionEngine>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::advice::prompts::{SUGGEST_PROMPT_TEMPLATE, SUGGEST_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Output shared by all engine backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionOutput {
    pub rewritten_bullets: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Implement this to swap suggestion backends without touching the handler.
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    async fn generate(
        &self,
        missing_skills: &[String],
        resume_summary: &str,
        jd_text: &str,
    ) -> Result<SuggestionOutput, AppError>;
}

/// LLM-backed engine: rewrites the summary bullets in the JD's language and
/// produces one actionable suggestion per missing skill.
pub struct LlmSuggestionEngine(pub LlmClient);

#[async_trait]
impl SuggestionEngine for LlmSuggestionEngine {
    async fn generate(
        &self,
        missing_skills: &[String],
        resume_summary: &str,
        jd_text: &str,
    ) -> Result<SuggestionOutput, AppError> {
        let original_bullets = summary_bullets(resume_summary);
        let bullets_block = original_bullets
            .iter()
            .map(|b| format!("- {b}"))
            .collect::<Vec<_>>()
            .join("\n");

        let prompt = SUGGEST_PROMPT_TEMPLATE
            .replace("{missing_skills}", &missing_skills.join(", "))
            .replace("{jd_text}", jd_text)
            .replace("{resume_summary}", resume_summary)
            .replace("{original_bullets}", &bullets_block);

        self.0
            .call_json::<SuggestionOutput>(&prompt, SUGGEST_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Suggestion generation failed: {e}")))
    }
}

/// Deterministic engine: canned per-skill advice, bullets passed through
/// unchanged. Also serves as the handler's fallback when the LLM fails.
pub struct TemplateSuggestionEngine;

#[async_trait]
impl SuggestionEngine for TemplateSuggestionEngine {
    async fn generate(
        &self,
        missing_skills: &[String],
        resume_summary: &str,
        _jd_text: &str,
    ) -> Result<SuggestionOutput, AppError> {
        Ok(template_output(missing_skills, resume_summary))
    }
}

/// Canned output used by `TemplateSuggestionEngine` and by the handler's
/// LLM-failure fallback path.
pub fn template_output(missing_skills: &[String], resume_summary: &str) -> SuggestionOutput {
    let mut suggestions: Vec<String> = missing_skills
        .iter()
        .map(|skill| {
            format!(
                "• Consider including '{skill}' in your resume. If you have hands-on \
                experience (projects, certifications, or coursework), highlight it."
            )
        })
        .collect();

    if suggestions.is_empty() {
        suggestions.push("• Your resume already covers all listed JD skills. Great job!".to_string());
    }

    SuggestionOutput {
        rewritten_bullets: summary_bullets(resume_summary),
        suggestions,
    }
}

/// Non-empty trimmed lines of the summary, treated as the original bullets.
fn summary_bullets(resume_summary: &str) -> Vec<String> {
    resume_summary
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
