//! Axum route handlers for the Match API.

use std::collections::BTreeMap;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::advice::{summarize_resume, template_output};
use crate::errors::AppError;
use crate::matching::compare::compare_skills;
use crate::matching::context::find_skill_context;
use crate::pdf;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response type
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub match_percentage: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// Sentences from the resume mentioning each missing skill (loose,
    /// case-insensitive substring scan); values are never empty.
    pub missing_skill_context: BTreeMap<String, Vec<String>>,
    pub rewritten_bullets: Vec<String>,
    pub suggestions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Multipart form: `resume_file` (PDF upload) + `jd_text` (plain text).
/// Pipeline: PDF text → summarize → extract skills from both sides →
/// compare → context for missing skills → suggestions.
pub async fn handle_match(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let upload = read_match_upload(multipart).await?;

    if !upload.resume_filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("Resume must be a PDF.".to_string()));
    }
    if upload.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let full_resume_text = pdf::extract_text(&upload.resume_bytes)?;

    // Summarization trims PDF noise before extraction, but a summarizer
    // outage must not block matching: fall back to the raw text.
    let resume_summary = match summarize_resume(&full_resume_text, &state.llm).await {
        Ok(summary) => summary,
        Err(e) => {
            warn!("Resume summarization failed, using full text: {e}");
            full_resume_text.clone()
        }
    };

    let resume_skills = state.matcher.extract_skills(&resume_summary);
    let jd_skills = state.matcher.extract_skills(&upload.jd_text);

    let comparison = compare_skills(&resume_skills, &jd_skills);
    if comparison.jd_skills_empty {
        return Err(AppError::UnprocessableEntity(
            "No recognizable skills were found in the job description.".to_string(),
        ));
    }

    info!(
        "Match computed: {}% ({} matched, {} missing)",
        comparison.match_percentage,
        comparison.matched.len(),
        comparison.missing.len()
    );

    // Loose scan over the FULL resume text: a skill the strict matcher missed
    // can still surface here, buried in phrasing.
    let missing_skill_context = find_skill_context(&full_resume_text, &comparison.missing);

    let advice = match state
        .suggester
        .generate(&comparison.missing, &resume_summary, &upload.jd_text)
        .await
    {
        Ok(output) => output,
        Err(e) => {
            warn!("Suggestion generation failed, using template output: {e}");
            template_output(&comparison.missing, &resume_summary)
        }
    };

    Ok(Json(MatchResponse {
        match_percentage: comparison.match_percentage,
        matched_skills: comparison.matched,
        missing_skills: comparison.missing,
        missing_skill_context,
        rewritten_bullets: advice.rewritten_bullets,
        suggestions: advice.suggestions,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart parsing
// ────────────────────────────────────────────────────────────────────────────

struct MatchUpload {
    resume_bytes: Bytes,
    resume_filename: String,
    jd_text: String,
}

async fn read_match_upload(mut multipart: Multipart) -> Result<MatchUpload, AppError> {
    let mut resume_bytes: Option<Bytes> = None;
    let mut resume_filename = String::new();
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        // Copy the name out before consuming the field with bytes()/text().
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume_file" => {
                resume_filename = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read resume_file: {e}")))?;
                resume_bytes = Some(bytes);
            }
            "jd_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read jd_text: {e}")))?;
                jd_text = Some(text);
            }
            _ => {}
        }
    }

    Ok(MatchUpload {
        resume_bytes: resume_bytes
            .ok_or_else(|| AppError::Validation("resume_file field is required".to_string()))?,
        resume_filename,
        jd_text: jd_text
            .ok_or_else(|| AppError::Validation("jd_text field is required".to_string()))?,
    })
}

#[cfg(test)]
mod tests {
    use crate::matching::compare::compare_skills;
    use crate::matching::context::find_skill_context;
    use crate::matching::extractor::{PhraseMatching, TokenWindowMatcher};
    use crate::matching::vocabulary::SkillVocabulary;

    /// The full pure pipeline, end to end: vocabulary → extraction on both
    /// sides → comparison → missing-skill context.
    #[test]
    fn test_match_pipeline_end_to_end() {
        let vocabulary = SkillVocabulary::from_terms(vec![
            "Python".to_string(),
            "Docker".to_string(),
            "AWS".to_string(),
        ]);
        let matcher = TokenWindowMatcher::new(vocabulary);

        let resume_text = "Built services using Python and deployed via Docker.";
        let jd_text = "Looking for a candidate skilled in Python, Docker, and AWS.";

        let resume_skills = matcher.extract_skills(resume_text);
        let jd_skills = matcher.extract_skills(jd_text);

        let comparison = compare_skills(&resume_skills, &jd_skills);
        assert_eq!(comparison.matched, vec!["Docker", "Python"]);
        assert_eq!(comparison.missing, vec!["AWS"]);
        assert_eq!(comparison.match_percentage, 66.67);
        assert!(!comparison.jd_skills_empty);

        let context = find_skill_context(resume_text, &comparison.missing);
        assert_eq!(
            context["AWS"],
            vec![crate::matching::context::NO_CONTEXT_SENTINEL]
        );
    }

    #[test]
    fn test_empty_jd_skill_set_is_flagged_for_rejection() {
        let matcher = TokenWindowMatcher::new(SkillVocabulary::from_terms(vec![
            "Python".to_string(),
        ]));
        let resume_skills = matcher.extract_skills("Python everywhere");
        let jd_skills = matcher.extract_skills("We want a pleasant colleague.");

        let comparison = compare_skills(&resume_skills, &jd_skills);
        assert!(comparison.jd_skills_empty);
        assert_eq!(comparison.match_percentage, 0.0);
    }
}
